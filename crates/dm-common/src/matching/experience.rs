use once_cell::sync::Lazy;
use regex::Regex;

static RE_LEADING_YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)").unwrap());

/// Parse the leading integer out of a free-text experience string
/// ("12 years" -> 12). This is the only place the free-text field is
/// interpreted; anything without a leading number yields None and fails
/// active experience buckets rather than erroring.
pub fn parse_years(experience: &str) -> Option<u32> {
    RE_LEADING_YEARS
        .captures(experience)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
