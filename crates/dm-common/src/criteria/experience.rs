/// Experience bucket dropdown:
/// ["Any", "0-2 years", "3-5 years", "5+ years", "10+ years"]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExperienceFilter {
    #[default]
    Any,
    Under3,
    From3To5,
    Over5,
    Over10,
}

impl ExperienceFilter {
    /// Map the raw UI value. Unknown values fall back to no constraint.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "0-2 years" => ExperienceFilter::Under3,
            "3-5 years" => ExperienceFilter::From3To5,
            "5+ years" => ExperienceFilter::Over5,
            "10+ years" => ExperienceFilter::Over10,
            _ => ExperienceFilter::Any,
        }
    }

    pub fn is_active(self) -> bool {
        self != ExperienceFilter::Any
    }

    /// Bucket membership test over a parsed year count.
    pub fn contains(self, years: u32) -> bool {
        match self {
            ExperienceFilter::Any => true,
            ExperienceFilter::Under3 => years < 3,
            ExperienceFilter::From3To5 => (3..=5).contains(&years),
            ExperienceFilter::Over5 => years > 5,
            ExperienceFilter::Over10 => years >= 10,
        }
    }
}
