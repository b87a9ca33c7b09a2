//! Filter state models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User-selected criteria narrowing the displayed campaign list.
///
/// Created empty at session start, mutated by the filter controls, reset on
/// explicit user action. Never persisted across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Selected channels. A campaign must carry every selected channel
    /// (intersection, not union), so selecting more channels narrows the
    /// result. Empty means no channel filter.
    pub channels: Vec<String>,
    /// Lower bound on the planned budget, inclusive.
    pub budget_min: Option<f64>,
    /// Upper bound on the planned budget, inclusive.
    pub budget_max: Option<f64>,
    /// Campaigns starting on or after this date.
    pub start_date: Option<NaiveDate>,
    /// Campaigns ending on or before this date.
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// True when no criterion is active, in which case every campaign passes.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
            && self.budget_min.is_none()
            && self.budget_max.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Clears every criterion.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sort direction for the planned-budget ordering. Independent of filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction, for the single toggle control.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}
