/// International-routes toggle: ["any", "yes", "no"]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InternationalFilter {
    #[default]
    Any,
    Yes,
    No,
}

impl InternationalFilter {
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("yes") {
            InternationalFilter::Yes
        } else if trimmed.eq_ignore_ascii_case("no") {
            InternationalFilter::No
        } else {
            InternationalFilter::Any
        }
    }

    pub fn is_active(self) -> bool {
        self != InternationalFilter::Any
    }

    pub fn admits(self, international_routes: bool) -> bool {
        match self {
            InternationalFilter::Any => true,
            InternationalFilter::Yes => international_routes,
            InternationalFilter::No => !international_routes,
        }
    }
}
