use serde::{Deserialize, Serialize};

use crate::domain::a004_fitness_member::FitnessMember;
use crate::shared::list_pipeline::{FacetCounts, FacetSums, FilterState, StatScope};

/// Request for the fitness member directory page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberDirectoryRequest {
    #[serde(default)]
    pub filter: FilterState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<StatScope>,
}

/// Response for the fitness member directory page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDirectoryResponse {
    pub items: Vec<FitnessMember>,
    pub total_count: i32,
    pub summary: MemberSummary,
}

/// Summary cards above the directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSummary {
    pub scope: StatScope,
    /// Members per membership status, first-occurrence order
    pub by_status: FacetCounts,
    /// Monthly fee totals per plan tier
    pub fees_by_plan: FacetSums,
}
