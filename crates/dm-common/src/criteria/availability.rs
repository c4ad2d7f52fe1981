/// Availability window dropdown:
/// ["Any", "Immediate", "Within 2 weeks", "Within a month"]
///
/// Windows nest: Immediate ⊆ Within 2 weeks ⊆ Within a month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvailabilityFilter {
    #[default]
    Any,
    Immediate,
    WithinTwoWeeks,
    WithinMonth,
}

/// Rank of a roster availability string: lower starts sooner.
/// Unknown strings rank as None and fail any active window.
fn availability_rank(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("Immediate") {
        Some(0)
    } else if trimmed.eq_ignore_ascii_case("2 weeks") {
        Some(1)
    } else if trimmed.eq_ignore_ascii_case("1 month") {
        Some(2)
    } else {
        None
    }
}

impl AvailabilityFilter {
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "Immediate" => AvailabilityFilter::Immediate,
            "Within 2 weeks" => AvailabilityFilter::WithinTwoWeeks,
            "Within a month" => AvailabilityFilter::WithinMonth,
            _ => AvailabilityFilter::Any,
        }
    }

    pub fn is_active(self) -> bool {
        self != AvailabilityFilter::Any
    }

    /// Window test against a roster availability string.
    pub fn admits(self, availability: &str) -> bool {
        let max_rank = match self {
            AvailabilityFilter::Any => return true,
            AvailabilityFilter::Immediate => 0,
            AvailabilityFilter::WithinTwoWeeks => 1,
            AvailabilityFilter::WithinMonth => 2,
        };

        match availability_rank(availability) {
            Some(rank) => rank <= max_rank,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_raw_dropdown_values() {
        assert_eq!(
            AvailabilityFilter::from_raw("Immediate"),
            AvailabilityFilter::Immediate
        );
        assert_eq!(
            AvailabilityFilter::from_raw("Within 2 weeks"),
            AvailabilityFilter::WithinTwoWeeks
        );
        assert_eq!(
            AvailabilityFilter::from_raw("Within a month"),
            AvailabilityFilter::WithinMonth
        );
        assert_eq!(AvailabilityFilter::from_raw("Any"), AvailabilityFilter::Any);
        assert_eq!(
            AvailabilityFilter::from_raw("next year"),
            AvailabilityFilter::Any
        );
    }

    #[test]
    fn windows_nest() {
        assert!(AvailabilityFilter::Immediate.admits("Immediate"));
        assert!(!AvailabilityFilter::Immediate.admits("2 weeks"));

        assert!(AvailabilityFilter::WithinTwoWeeks.admits("Immediate"));
        assert!(AvailabilityFilter::WithinTwoWeeks.admits("2 weeks"));
        assert!(!AvailabilityFilter::WithinTwoWeeks.admits("1 month"));

        assert!(AvailabilityFilter::WithinMonth.admits("Immediate"));
        assert!(AvailabilityFilter::WithinMonth.admits("2 weeks"));
        assert!(AvailabilityFilter::WithinMonth.admits("1 month"));
    }

    #[test]
    fn unknown_record_value_fails_active_windows_only() {
        assert!(AvailabilityFilter::Any.admits("sometime"));
        assert!(!AvailabilityFilter::WithinMonth.admits("sometime"));
        assert!(!AvailabilityFilter::WithinMonth.admits(""));
    }
}
