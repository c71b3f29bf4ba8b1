use contracts::dashboards::d104_student_roster::{
    StudentHeadline, StudentRosterRequest, StudentRosterResponse,
};
use contracts::domain::a003_student::Student;
use contracts::shared::list_pipeline::{count_by_facet, filtered_view, sum_total, StatScope};

/// Build the student roster page for the education module.
pub fn get_student_roster(
    dataset: &[Student],
    request: &StudentRosterRequest,
    default_scope: StatScope,
) -> StudentRosterResponse {
    let scope = request.scope.unwrap_or(default_scope);
    tracing::info!(
        query = %request.filter.query,
        scope = scope.code(),
        "student roster requested"
    );

    let items = filtered_view(dataset, &request.filter);

    let stat_items: &[Student] = match scope {
        StatScope::All => dataset,
        StatScope::Filtered => &items,
    };

    StudentRosterResponse {
        total_count: items.len() as i32,
        headline: StudentHeadline {
            scope,
            total_students: stat_items.len() as u64,
            by_status: count_by_facet(stat_items, "status"),
            balance_due_total: sum_total(stat_items, |s| s.balance_due),
        },
        items,
    }
}
