use serde::{Deserialize, Serialize};

use crate::domain::a001_activity_log::ActivityLogEntry;
use crate::shared::list_pipeline::{FacetCounts, FilterState, StatScope};

/// Request for the activity feed page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityFeedRequest {
    /// Current search/filter inputs
    #[serde(default)]
    pub filter: FilterState,

    /// Override for the headline-card scope; the page default comes
    /// from configuration when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<StatScope>,
}

/// Response for the activity feed page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFeedResponse {
    /// Filtered entries in original log order
    pub items: Vec<ActivityLogEntry>,
    pub total_count: i32,
    pub headline: ActivityHeadline,
}

/// Headline cards shown above the activity list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityHeadline {
    /// Which sequence the cards were computed over
    pub scope: StatScope,
    /// Events in scope
    pub total_events: u64,
    /// Events per status, first-occurrence order
    pub by_status: FacetCounts,
}
