use serde::Deserialize;

use crate::criteria::{
    AvailabilityFilter, EmploymentFilter, ExperienceFilter, FilterCriteria, InternationalFilter,
    LicenseFilter, TierFilter, VerificationFilter, DEFAULT_RADIUS_KM,
};

/// Search request from the web front-end.
///
/// Scalar filters arrive as the raw UI strings ("Any", "5+ years", ...);
/// the `from_raw` boundary maps them to typed criteria, so omitted or
/// unknown values degrade to no constraint instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub query: String,
    pub experience: String,
    pub license: String,
    pub availability: String,
    pub job_types: Vec<String>,
    pub vehicle_types: Vec<String>,
    pub shift_preferences: Vec<String>,
    pub employment_type: String,
    pub verification: String,
    pub international: String,
    pub membership_tier: String,
    pub radius_km: Option<u32>,
    /// Cap on the main list length; the featured panel is never truncated.
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            query: self.query,
            experience: ExperienceFilter::from_raw(&self.experience),
            license: LicenseFilter::from_raw(&self.license),
            availability: AvailabilityFilter::from_raw(&self.availability),
            job_types: self.job_types.into_iter().collect(),
            vehicle_types: self.vehicle_types.into_iter().collect(),
            shift_preferences: self.shift_preferences.into_iter().collect(),
            employment: EmploymentFilter::from_raw(&self.employment_type),
            verification: VerificationFilter::from_raw(&self.verification),
            international: InternationalFilter::from_raw(&self.international),
            tier: TierFilter::from_raw(&self.membership_tier),
            radius_km: self.radius_km.unwrap_or(DEFAULT_RADIUS_KM),
        }
    }
}
