use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;

use crate::{DriverRecord, EmploymentType, MembershipTier};

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse roster file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate driver id {0} in roster")]
    DuplicateId(i64),
}

/// Source of the searchable roster. The pipeline only ever sees the
/// returned sequence, so the engine stays testable independently of how
/// drivers are actually sourced (static fixture, file, backend query).
pub trait RosterProvider {
    fn fetch_all(&self) -> Result<Vec<DriverRecord>, RosterError>;
}

/// In-memory roster with a fixed driver sequence.
#[derive(Debug)]
pub struct StaticRoster {
    drivers: Vec<DriverRecord>,
}

impl StaticRoster {
    /// Driver ids must be unique; order is preserved as given.
    pub fn new(drivers: Vec<DriverRecord>) -> Result<Self, RosterError> {
        let mut seen = BTreeSet::new();
        for driver in &drivers {
            if !seen.insert(driver.id) {
                return Err(RosterError::DuplicateId(driver.id));
            }
        }

        Ok(Self { drivers })
    }

    /// Load a roster from a JSON array of driver records.
    pub fn from_json_file(path: &Path) -> Result<Self, RosterError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: display.clone(),
            source,
        })?;

        let drivers: Vec<DriverRecord> =
            serde_json::from_str(&contents).map_err(|source| RosterError::Parse {
                path: display,
                source,
            })?;

        Self::new(drivers)
    }

    /// The built-in six-driver demo roster.
    pub fn demo() -> Self {
        Self {
            drivers: demo_drivers(),
        }
    }
}

impl RosterProvider for StaticRoster {
    fn fetch_all(&self) -> Result<Vec<DriverRecord>, RosterError> {
        Ok(self.drivers.clone())
    }
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn demo_drivers() -> Vec<DriverRecord> {
    vec![
        DriverRecord {
            id: 1,
            name: "Lukas Brandt".into(),
            location: "Berlin, DE".into(),
            experience: "12 years".into(),
            license_types: tags(&["Class C", "Class CE"]),
            availability: "Immediate".into(),
            job_types: tags(&["truck", "tanker"]),
            vehicle_types: tags(&["semi-trailer", "tanker"]),
            shift_preferences: tags(&["night", "overnight"]),
            employment_type: EmploymentType::Permanent,
            is_verified: true,
            international_routes: true,
            membership_tier: MembershipTier::Pro,
            featured: true,
            distance_km: 12,
        },
        DriverRecord {
            id: 2,
            name: "Marta Kowalska".into(),
            location: "Rotterdam, NL".into(),
            experience: "7 years".into(),
            license_types: tags(&["Class CE"]),
            availability: "2 weeks".into(),
            job_types: tags(&["truck", "delivery"]),
            vehicle_types: tags(&["semi-trailer", "refrigerated"]),
            shift_preferences: tags(&["day", "flexible"]),
            employment_type: EmploymentType::Freelance,
            is_verified: true,
            international_routes: true,
            membership_tier: MembershipTier::Plus,
            featured: true,
            distance_km: 45,
        },
        DriverRecord {
            id: 3,
            name: "Ahmed Hassan".into(),
            location: "Hamburg, DE".into(),
            experience: "4 years".into(),
            license_types: tags(&["Class C"]),
            availability: "1 month".into(),
            job_types: tags(&["delivery", "courier"]),
            vehicle_types: tags(&["van"]),
            shift_preferences: tags(&["day"]),
            employment_type: EmploymentType::Either,
            is_verified: false,
            international_routes: false,
            membership_tier: MembershipTier::Free,
            featured: false,
            distance_km: 80,
        },
        DriverRecord {
            id: 4,
            name: "Sofia Ricci".into(),
            location: "Milan, IT".into(),
            experience: "9 years".into(),
            license_types: tags(&["Class CE"]),
            availability: "Immediate".into(),
            job_types: tags(&["truck", "construction"]),
            vehicle_types: tags(&["flatbed", "semi-trailer"]),
            shift_preferences: tags(&["day", "weekend"]),
            employment_type: EmploymentType::Permanent,
            is_verified: true,
            international_routes: true,
            membership_tier: MembershipTier::Pro,
            featured: false,
            distance_km: 150,
        },
        DriverRecord {
            id: 5,
            name: "Carlos Mendez".into(),
            location: "Madrid, ES".into(),
            experience: "2 years".into(),
            license_types: tags(&["Class C"]),
            availability: "2 weeks".into(),
            job_types: tags(&["courier", "moving"]),
            vehicle_types: tags(&["van"]),
            shift_preferences: tags(&["flexible", "weekend"]),
            employment_type: EmploymentType::Freelance,
            is_verified: false,
            international_routes: false,
            membership_tier: MembershipTier::Free,
            featured: false,
            distance_km: 30,
        },
        DriverRecord {
            id: 6,
            name: "Jonas Berg".into(),
            location: "Gothenburg, SE".into(),
            experience: "6 years".into(),
            license_types: tags(&["Class CE"]),
            availability: "1 month".into(),
            job_types: tags(&["truck", "tanker"]),
            vehicle_types: tags(&["semi-trailer", "tanker"]),
            shift_preferences: tags(&["night"]),
            employment_type: EmploymentType::Either,
            is_verified: true,
            international_routes: true,
            membership_tier: MembershipTier::Plus,
            featured: false,
            distance_km: 220,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_roster_has_six_unique_drivers_in_order() {
        let drivers = StaticRoster::demo().fetch_all().unwrap();
        let ids: Vec<i64> = drivers.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn demo_roster_matches_fixture_expectations() {
        let drivers = StaticRoster::demo().fetch_all().unwrap();

        let pro_ids: Vec<i64> = drivers
            .iter()
            .filter(|d| d.membership_tier == MembershipTier::Pro)
            .map(|d| d.id)
            .collect();
        assert_eq!(pro_ids, vec![1, 4]);

        let unverified: Vec<i64> = drivers
            .iter()
            .filter(|d| !d.is_verified)
            .map(|d| d.id)
            .collect();
        assert_eq!(unverified, vec![3, 5]);

        assert!(drivers[0].location.starts_with("Berlin"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut drivers = demo_drivers();
        drivers[5].id = 1;

        let result = StaticRoster::new(drivers);
        assert!(matches!(result, Err(RosterError::DuplicateId(1))));
    }

    #[test]
    fn roster_json_round_trips_through_records() {
        let drivers = demo_drivers();
        let json = serde_json::to_string(&drivers).unwrap();
        let parsed: Vec<DriverRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, drivers);
    }

    #[test]
    fn missing_roster_file_reports_path() {
        let err = StaticRoster::from_json_file(Path::new("/nonexistent/roster.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/roster.json"));
    }
}
