use serde::{Deserialize, Serialize};

use crate::domain::a002_card_transaction::CardTransaction;
use crate::shared::list_pipeline::{FacetSums, FilterState, StatScope};

/// Request for the card transaction register page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionRegisterRequest {
    #[serde(default)]
    pub filter: FilterState,

    /// Override for the summary scope (page default: filtered subset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<StatScope>,
}

/// Response for the card transaction register page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRegisterResponse {
    /// Filtered transactions in original order
    pub items: Vec<CardTransaction>,
    pub total_count: i32,
    pub summary: TransactionSummary,
}

/// Summary cards for the register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub scope: StatScope,
    /// Transactions in scope
    pub count: u64,
    /// Sum of amounts in scope
    pub total_amount: f64,
    /// Amount totals per status, first-occurrence order
    pub by_status: FacetSums,
}
