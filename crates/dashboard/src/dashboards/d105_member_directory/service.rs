use contracts::dashboards::d105_member_directory::{
    MemberDirectoryRequest, MemberDirectoryResponse, MemberSummary,
};
use contracts::domain::a004_fitness_member::FitnessMember;
use contracts::shared::list_pipeline::{count_by_facet, filtered_view, sum_by_facet, StatScope};

/// Build the fitness member directory page.
pub fn get_member_directory(
    dataset: &[FitnessMember],
    request: &MemberDirectoryRequest,
    default_scope: StatScope,
) -> MemberDirectoryResponse {
    let scope = request.scope.unwrap_or(default_scope);
    tracing::info!(
        query = %request.filter.query,
        scope = scope.code(),
        "member directory requested"
    );

    let items = filtered_view(dataset, &request.filter);

    let stat_items: &[FitnessMember] = match scope {
        StatScope::All => dataset,
        StatScope::Filtered => &items,
    };

    MemberDirectoryResponse {
        total_count: items.len() as i32,
        summary: MemberSummary {
            scope,
            by_status: count_by_facet(stat_items, "status"),
            fees_by_plan: sum_by_facet(stat_items, "plan", |m| m.monthly_fee),
        },
        items,
    }
}
