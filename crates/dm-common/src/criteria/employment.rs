use crate::EmploymentType;

/// Employment type dropdown: ["Any", "permanent", "freelance"]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmploymentFilter {
    #[default]
    Any,
    Permanent,
    Freelance,
}

impl EmploymentFilter {
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("permanent") {
            EmploymentFilter::Permanent
        } else if trimmed.eq_ignore_ascii_case("freelance") {
            EmploymentFilter::Freelance
        } else {
            EmploymentFilter::Any
        }
    }

    pub fn is_active(self) -> bool {
        self != EmploymentFilter::Any
    }

    /// A driver open to "either" passes any active employment filter.
    pub fn matches(self, employment: EmploymentType) -> bool {
        match self {
            EmploymentFilter::Any => true,
            EmploymentFilter::Permanent => {
                matches!(employment, EmploymentType::Permanent | EmploymentType::Either)
            }
            EmploymentFilter::Freelance => {
                matches!(employment, EmploymentType::Freelance | EmploymentType::Either)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_raw_values_case_insensitively() {
        assert_eq!(
            EmploymentFilter::from_raw("Permanent"),
            EmploymentFilter::Permanent
        );
        assert_eq!(
            EmploymentFilter::from_raw("freelance"),
            EmploymentFilter::Freelance
        );
        assert_eq!(EmploymentFilter::from_raw("Any"), EmploymentFilter::Any);
        assert_eq!(EmploymentFilter::from_raw("contract"), EmploymentFilter::Any);
    }

    #[test]
    fn either_drivers_pass_both_filters() {
        assert!(EmploymentFilter::Permanent.matches(EmploymentType::Either));
        assert!(EmploymentFilter::Freelance.matches(EmploymentType::Either));
        assert!(EmploymentFilter::Permanent.matches(EmploymentType::Permanent));
        assert!(!EmploymentFilter::Permanent.matches(EmploymentType::Freelance));
        assert!(!EmploymentFilter::Freelance.matches(EmploymentType::Permanent));
    }
}
