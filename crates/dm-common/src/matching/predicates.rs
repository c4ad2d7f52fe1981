use std::collections::BTreeSet;

use super::experience::parse_years;
use crate::{criteria::FilterCriteria, DriverRecord};

/// Conjunction runner: a driver must pass every active predicate.
/// Predicates at their neutral value auto-pass.
pub fn matches_all(driver: &DriverRecord, criteria: &FilterCriteria) -> bool {
    matches_query(driver, &criteria.query)
        && matches_experience(driver, criteria)
        && criteria.license.matches(&driver.license_types)
        && criteria.availability.admits(&driver.availability)
        && matches_tags(&driver.job_types, &criteria.job_types)
        && matches_tags(&driver.vehicle_types, &criteria.vehicle_types)
        && matches_tags(&driver.shift_preferences, &criteria.shift_preferences)
        && criteria.employment.matches(driver.employment_type)
        && criteria.verification.admits(driver.is_verified)
        && criteria.international.admits(driver.international_routes)
        && criteria.tier.admits(driver.membership_tier)
}

/// Case-insensitive substring match on name OR location.
pub fn matches_query(driver: &DriverRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    driver.name.to_lowercase().contains(&needle)
        || driver.location.to_lowercase().contains(&needle)
}

/// Bucket test over the parsed leading year count. A record whose
/// experience string cannot be parsed fails any active bucket.
pub fn matches_experience(driver: &DriverRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.experience.is_active() {
        return true;
    }

    match parse_years(&driver.experience) {
        Some(years) => criteria.experience.contains(years),
        None => false,
    }
}

/// OR semantics within a multi-select field: the driver passes when their
/// tag set intersects the selection. Empty selection means no constraint.
pub fn matches_tags(driver_tags: &BTreeSet<String>, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || selected.iter().any(|tag| driver_tags.contains(tag))
}
