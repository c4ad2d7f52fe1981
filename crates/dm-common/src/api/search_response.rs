use serde::{Deserialize, Serialize};

use crate::{matching::RankedView, DriverRecord};

/// Search result payload for the web front-end: the featured panel and the
/// main list, already ranked and partitioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matches before any limit is applied to the main list.
    pub total: usize,
    pub featured: Vec<DriverRecord>,
    pub drivers: Vec<DriverRecord>,
}

impl SearchResponse {
    pub fn from_view(view: RankedView) -> Self {
        Self {
            total: view.len(),
            featured: view.featured,
            drivers: view.main,
        }
    }
}
