/// Verification toggle: ["any", "verified"]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerificationFilter {
    #[default]
    Any,
    VerifiedOnly,
}

impl VerificationFilter {
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("verified") {
            VerificationFilter::VerifiedOnly
        } else {
            VerificationFilter::Any
        }
    }

    pub fn is_active(self) -> bool {
        self != VerificationFilter::Any
    }

    pub fn admits(self, is_verified: bool) -> bool {
        match self {
            VerificationFilter::Any => true,
            VerificationFilter::VerifiedOnly => is_verified,
        }
    }
}
