use std::collections::BTreeSet;

/// License category dropdown: "Any" or one exact license class string
/// (e.g. "Class C", "Class CE").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LicenseFilter {
    #[default]
    Any,
    Class(String),
}

impl LicenseFilter {
    /// "Any" or blank means no constraint; anything else is an exact class.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "Any" {
            LicenseFilter::Any
        } else {
            LicenseFilter::Class(trimmed.to_string())
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, LicenseFilter::Any)
    }

    /// Exact string membership in the driver's license set.
    pub fn matches(&self, license_types: &BTreeSet<String>) -> bool {
        match self {
            LicenseFilter::Any => true,
            LicenseFilter::Class(class) => license_types.contains(class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn licenses(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn any_and_blank_deactivate() {
        assert_eq!(LicenseFilter::from_raw("Any"), LicenseFilter::Any);
        assert_eq!(LicenseFilter::from_raw("   "), LicenseFilter::Any);
        assert!(!LicenseFilter::from_raw("").is_active());
    }

    #[test]
    fn exact_class_match_only() {
        let filter = LicenseFilter::from_raw("Class CE");
        assert!(filter.is_active());
        assert!(filter.matches(&licenses(&["Class C", "Class CE"])));
        assert!(!filter.matches(&licenses(&["Class C"])));
        // No substring or case folding: "Class CE" != "class ce"
        assert!(!filter.matches(&licenses(&["class ce"])));
    }
}
