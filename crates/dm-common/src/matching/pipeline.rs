use tracing::debug;

use super::{predicates::matches_all, ranking::rank};
use crate::{criteria::FilterCriteria, DriverRecord};

/// The two output sequences consumed by the presentation layer.
///
/// `featured` holds the pro-tier drivers, `main` everyone else; together
/// they partition the ranked set without duplication. Both preserve the
/// order of the sequence they were derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedView {
    pub featured: Vec<DriverRecord>,
    pub main: Vec<DriverRecord>,
}

impl RankedView {
    /// Split any ordered sequence into the featured panel and the main
    /// list. Pure projection; recomputed on every search/reset, never
    /// cached independently of the sequence it came from.
    pub fn partition(drivers: Vec<DriverRecord>) -> Self {
        let (featured, main) = drivers
            .into_iter()
            .partition(|driver| driver.membership_tier.is_pro());

        Self { featured, main }
    }

    pub fn len(&self) -> usize {
        self.featured.len() + self.main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.main.is_empty()
    }
}

/// Narrow the roster to the drivers matching every active criterion,
/// preserving roster relative order. No error conditions: no matches is an
/// empty sequence, not a failure.
pub fn filter_roster(roster: &[DriverRecord], criteria: &FilterCriteria) -> Vec<DriverRecord> {
    let matched: Vec<_> = roster
        .iter()
        .filter(|driver| matches_all(driver, criteria))
        .cloned()
        .collect();

    debug!(total = roster.len(), matched = matched.len(), "roster filtered");
    matched
}

/// Full pipeline: filter, rank, then partition into the two display views.
pub fn search(roster: &[DriverRecord], criteria: &FilterCriteria) -> RankedView {
    RankedView::partition(rank(filter_roster(roster, criteria)))
}
