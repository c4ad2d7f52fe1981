pub mod api;
pub mod criteria;
pub mod logging;
pub mod matching;
pub mod roster;
pub mod session;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Monetized subscription level of a driver profile.
/// Ordered: free < plus < pro.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    #[default]
    Free,
    Plus,
    Pro,
}

impl MembershipTier {
    pub fn is_pro(self) -> bool {
        matches!(self, MembershipTier::Pro)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    Permanent,
    Freelance,
    /// Open to both; passes any active employment filter.
    #[default]
    Either,
}

// Commonly used data model for the search pipeline.
//
// One entry in the searchable driver roster. The roster is immutable input:
// no operation in this crate mutates a record, all operations produce new
// filtered/sorted sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub id: i64,
    pub name: String,
    /// Free text "City, Country".
    pub location: String,
    /// Free text of the form "N years". Parsed in exactly one place,
    /// `matching::experience::parse_years`.
    pub experience: String,
    pub license_types: BTreeSet<String>,
    /// Open string enumeration: "Immediate" | "2 weeks" | "1 month".
    pub availability: String,
    pub job_types: BTreeSet<String>,
    pub vehicle_types: BTreeSet<String>,
    pub shift_preferences: BTreeSet<String>,
    pub employment_type: EmploymentType,
    pub is_verified: bool,
    pub international_routes: bool,
    pub membership_tier: MembershipTier,
    /// Independent of tier; second ranking key.
    pub featured: bool,
    /// Kilometers from the implicit search origin. Collected by the UI
    /// radius control but not applied as a predicate today.
    pub distance_km: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ordering_is_free_plus_pro() {
        assert!(MembershipTier::Free < MembershipTier::Plus);
        assert!(MembershipTier::Plus < MembershipTier::Pro);
        assert!(MembershipTier::Pro.is_pro());
        assert!(!MembershipTier::Plus.is_pro());
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MembershipTier::Pro).unwrap(),
            "\"pro\""
        );
        assert_eq!(
            serde_json::from_str::<EmploymentType>("\"freelance\"").unwrap(),
            EmploymentType::Freelance
        );
    }
}
