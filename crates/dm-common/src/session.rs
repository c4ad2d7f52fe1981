use crate::{
    criteria::{
        toggle_tag, AvailabilityFilter, EmploymentFilter, ExperienceFilter, FilterCriteria,
        InternationalFilter, LicenseFilter, TierFilter, VerificationFilter,
    },
    matching::{search, RankedView},
    roster::{RosterError, RosterProvider},
    DriverRecord,
};

/// One search session: the roster snapshot, the current criteria, and the
/// two derived display views. Owned exclusively by whoever renders the
/// search page; single-threaded, no suspension points.
///
/// The displayed views only change on `apply` or `reset`; mutating criteria
/// alone does not re-run the pipeline.
pub struct SearchSession {
    roster: Vec<DriverRecord>,
    criteria: FilterCriteria,
    view: RankedView,
}

impl SearchSession {
    /// Start with neutral criteria and the full roster in its original,
    /// unranked order.
    pub fn new(roster: Vec<DriverRecord>) -> Self {
        let view = RankedView::partition(roster.clone());
        Self {
            roster,
            criteria: FilterCriteria::default(),
            view,
        }
    }

    pub fn from_provider(provider: &dyn RosterProvider) -> Result<Self, RosterError> {
        Ok(Self::new(provider.fetch_all()?))
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> &RankedView {
        &self.view
    }

    // Criteria mutations, one per UI control. Raw string setters go through
    // the `from_raw` boundary so unknown values degrade to no constraint.

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    pub fn set_experience_raw(&mut self, raw: &str) {
        self.criteria.experience = ExperienceFilter::from_raw(raw);
    }

    pub fn set_license_raw(&mut self, raw: &str) {
        self.criteria.license = LicenseFilter::from_raw(raw);
    }

    pub fn set_availability_raw(&mut self, raw: &str) {
        self.criteria.availability = AvailabilityFilter::from_raw(raw);
    }

    pub fn set_employment_raw(&mut self, raw: &str) {
        self.criteria.employment = EmploymentFilter::from_raw(raw);
    }

    pub fn set_verification_raw(&mut self, raw: &str) {
        self.criteria.verification = VerificationFilter::from_raw(raw);
    }

    pub fn set_international_raw(&mut self, raw: &str) {
        self.criteria.international = InternationalFilter::from_raw(raw);
    }

    pub fn set_tier_raw(&mut self, raw: &str) {
        self.criteria.tier = TierFilter::from_raw(raw);
    }

    pub fn set_radius_km(&mut self, radius_km: u32) {
        self.criteria.radius_km = radius_km;
    }

    pub fn toggle_job_type(&mut self, tag: &str) {
        self.criteria.job_types = toggle_tag(&self.criteria.job_types, tag);
    }

    pub fn toggle_vehicle_type(&mut self, tag: &str) {
        self.criteria.vehicle_types = toggle_tag(&self.criteria.vehicle_types, tag);
    }

    pub fn toggle_shift_preference(&mut self, tag: &str) {
        self.criteria.shift_preferences = toggle_tag(&self.criteria.shift_preferences, tag);
    }

    /// Run filter -> rank -> partition against the current criteria.
    pub fn apply(&mut self) -> &RankedView {
        self.view = search(&self.roster, &self.criteria);
        &self.view
    }

    /// Restore neutral criteria and the full roster in original order.
    /// Plain assignment: the pipeline is not re-run, so the displayed set
    /// is unranked until the next `apply`.
    pub fn reset(&mut self) -> &RankedView {
        self.criteria = FilterCriteria::default();
        self.view = RankedView::partition(self.roster.clone());
        &self.view
    }
}
