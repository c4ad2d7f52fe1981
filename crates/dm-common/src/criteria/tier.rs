use crate::MembershipTier;

/// Membership tier dropdown: ["any", "plus", "pro"]
///
/// Selecting "plus" admits plus and above; "pro" admits pro only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TierFilter {
    #[default]
    Any,
    PlusAndUp,
    ProOnly,
}

impl TierFilter {
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("plus") {
            TierFilter::PlusAndUp
        } else if trimmed.eq_ignore_ascii_case("pro") {
            TierFilter::ProOnly
        } else {
            TierFilter::Any
        }
    }

    pub fn is_active(self) -> bool {
        self != TierFilter::Any
    }

    pub fn admits(self, tier: MembershipTier) -> bool {
        match self {
            TierFilter::Any => true,
            TierFilter::PlusAndUp => tier >= MembershipTier::Plus,
            TierFilter::ProOnly => tier == MembershipTier::Pro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_admits_plus_and_pro() {
        assert!(!TierFilter::PlusAndUp.admits(MembershipTier::Free));
        assert!(TierFilter::PlusAndUp.admits(MembershipTier::Plus));
        assert!(TierFilter::PlusAndUp.admits(MembershipTier::Pro));
    }

    #[test]
    fn pro_admits_pro_only() {
        assert!(!TierFilter::ProOnly.admits(MembershipTier::Free));
        assert!(!TierFilter::ProOnly.admits(MembershipTier::Plus));
        assert!(TierFilter::ProOnly.admits(MembershipTier::Pro));
    }

    #[test]
    fn maps_raw_values() {
        assert_eq!(TierFilter::from_raw("plus"), TierFilter::PlusAndUp);
        assert_eq!(TierFilter::from_raw("PRO"), TierFilter::ProOnly);
        assert_eq!(TierFilter::from_raw("any"), TierFilter::Any);
        assert_eq!(TierFilter::from_raw("gold"), TierFilter::Any);
    }
}
