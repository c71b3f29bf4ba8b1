use contracts::dashboards::d100_activity_feed::{
    ActivityFeedRequest, ActivityFeedResponse, ActivityHeadline,
};
use contracts::domain::a001_activity_log::ActivityLogEntry;
use contracts::shared::list_pipeline::{count_by_facet, filtered_view, StatScope};

/// Build the activity feed page: filtered list plus headline cards.
///
/// The headline cards of this page historically summarize the whole log
/// while the list below is scoped by the active filters, so the default
/// scope is `All`; the request may override it.
pub fn get_activity_feed(
    dataset: &[ActivityLogEntry],
    request: &ActivityFeedRequest,
    default_scope: StatScope,
) -> ActivityFeedResponse {
    let scope = request.scope.unwrap_or(default_scope);
    tracing::info!(
        query = %request.filter.query,
        scope = scope.code(),
        "activity feed requested"
    );

    let items = filtered_view(dataset, &request.filter);

    let stat_items: &[ActivityLogEntry] = match scope {
        StatScope::All => dataset,
        StatScope::Filtered => &items,
    };
    let by_status = count_by_facet(stat_items, "status");
    tracing::debug!(total = stat_items.len(), "activity headline computed");

    ActivityFeedResponse {
        total_count: items.len() as i32,
        headline: ActivityHeadline {
            scope,
            total_events: stat_items.len() as u64,
            by_status,
        },
        items,
    }
}
