//! Filtering and sorting of the campaign list.

mod filters_engine;
mod filters_model;

pub use filters_engine::{apply, matches, sort_by_planned_budget};
pub use filters_model::{FilterCriteria, SortOrder};
