pub mod experience;
pub mod pipeline;
pub mod predicates;
pub mod ranking;

pub use pipeline::{filter_roster, search, RankedView};
