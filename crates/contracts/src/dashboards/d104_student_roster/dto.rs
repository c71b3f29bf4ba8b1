use serde::{Deserialize, Serialize};

use crate::domain::a003_student::Student;
use crate::shared::list_pipeline::{FacetCounts, FilterState, StatScope};

/// Request for the student roster page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentRosterRequest {
    #[serde(default)]
    pub filter: FilterState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<StatScope>,
}

/// Response for the student roster page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRosterResponse {
    pub items: Vec<Student>,
    pub total_count: i32,
    pub headline: StudentHeadline,
}

/// Headline cards above the roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentHeadline {
    pub scope: StatScope,
    pub total_students: u64,
    /// Students per enrollment status, first-occurrence order
    pub by_status: FacetCounts,
    /// Outstanding tuition across students in scope
    pub balance_due_total: f64,
}
