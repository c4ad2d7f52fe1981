pub mod availability;
pub mod employment;
pub mod experience;
pub mod international;
pub mod license;
pub mod tier;
pub mod verification;

use std::collections::BTreeSet;

pub use availability::AvailabilityFilter;
pub use employment::EmploymentFilter;
pub use experience::ExperienceFilter;
pub use international::InternationalFilter;
pub use license::LicenseFilter;
pub use tier::TierFilter;
pub use verification::VerificationFilter;

/// UI default for the radius slider.
pub const DEFAULT_RADIUS_KM: u32 = 50;

/// Full set of user-selected search constraints at a point in time.
///
/// Every scalar field is a closed enum with a `from_raw` mapping from the
/// loose UI string; the neutral value ("Any"/empty set) deactivates the
/// corresponding predicate. Created all-neutral at session start, mutated by
/// the UI control layer, consumed on demand by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text matched case-insensitively against name and location.
    pub query: String,
    pub experience: ExperienceFilter,
    pub license: LicenseFilter,
    pub availability: AvailabilityFilter,
    /// OR semantics within the set; empty set means no constraint.
    pub job_types: BTreeSet<String>,
    pub vehicle_types: BTreeSet<String>,
    pub shift_preferences: BTreeSet<String>,
    pub employment: EmploymentFilter,
    pub verification: VerificationFilter,
    pub international: InternationalFilter,
    pub tier: TierFilter,
    /// Display-only today; never applied against `distance_km`.
    pub radius_km: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            experience: ExperienceFilter::default(),
            license: LicenseFilter::default(),
            availability: AvailabilityFilter::default(),
            job_types: BTreeSet::new(),
            vehicle_types: BTreeSet::new(),
            shift_preferences: BTreeSet::new(),
            employment: EmploymentFilter::default(),
            verification: VerificationFilter::default(),
            international: InternationalFilter::default(),
            tier: TierFilter::default(),
            radius_km: DEFAULT_RADIUS_KM,
        }
    }
}

/// Checkbox-group toggle: add the tag if absent, remove it if present.
/// Returns a new set, leaving the input untouched.
pub fn toggle_tag(selected: &BTreeSet<String>, tag: &str) -> BTreeSet<String> {
    let mut next = selected.clone();
    if !next.remove(tag) {
        next.insert(tag.to_string());
    }
    next
}
