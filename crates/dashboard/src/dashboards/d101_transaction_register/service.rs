use contracts::dashboards::d101_transaction_register::{
    TransactionRegisterRequest, TransactionRegisterResponse, TransactionSummary,
};
use contracts::domain::a002_card_transaction::CardTransaction;
use contracts::shared::list_pipeline::{filtered_view, sum_by_facet, sum_total, StatScope};

/// Build the transaction register page: filtered list plus amount summary.
///
/// The register summarizes what the user currently sees, so the default
/// scope is `Filtered`.
pub fn get_transaction_register(
    dataset: &[CardTransaction],
    request: &TransactionRegisterRequest,
    default_scope: StatScope,
) -> TransactionRegisterResponse {
    let scope = request.scope.unwrap_or(default_scope);
    tracing::info!(
        query = %request.filter.query,
        scope = scope.code(),
        "transaction register requested"
    );

    let items = filtered_view(dataset, &request.filter);

    let stat_items: &[CardTransaction] = match scope {
        StatScope::All => dataset,
        StatScope::Filtered => &items,
    };
    let summary = TransactionSummary {
        scope,
        count: stat_items.len() as u64,
        total_amount: sum_total(stat_items, |t| t.amount),
        by_status: sum_by_facet(stat_items, "status", |t| t.amount),
    };
    tracing::debug!(
        count = summary.count,
        total_amount = summary.total_amount,
        "transaction summary computed"
    );

    TransactionRegisterResponse {
        total_count: items.len() as i32,
        summary,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::transactions::CARD_TRANSACTIONS;
    use contracts::shared::list_pipeline::FilterState;

    #[test]
    fn test_pending_filter_sums_visible_amounts() {
        // category at the sentinel, status constrained
        let request = TransactionRegisterRequest {
            filter: FilterState::new()
                .with_facet("category", "ALL")
                .with_facet("status", "pending"),
            scope: None,
        };
        let response =
            get_transaction_register(&CARD_TRANSACTIONS, &request, StatScope::Filtered);
        assert_eq!(response.summary.count, 3);
        assert_eq!(response.summary.total_amount, 175.0);
        assert_eq!(response.total_count, 3);
    }

    #[test]
    fn test_search_matches_card_last_four() {
        let request = TransactionRegisterRequest {
            filter: FilterState::new().with_query("4821"),
            scope: None,
        };
        let response =
            get_transaction_register(&CARD_TRANSACTIONS, &request, StatScope::Filtered);
        assert_eq!(response.items.len(), 3);
        assert!(response.items.iter().all(|t| t.card_last_four == "4821"));
    }

    #[test]
    fn test_summary_by_status_splits_amounts() {
        let response = get_transaction_register(
            &CARD_TRANSACTIONS,
            &TransactionRegisterRequest::default(),
            StatScope::Filtered,
        );
        let pending = response.summary.by_status.get("pending");
        assert_eq!(pending.total, 175.0);
        assert_eq!(pending.count, 3);
        let flagged = response.summary.by_status.get("flagged");
        assert_eq!(flagged.total, 2500.0);
        assert_eq!(flagged.count, 1);
    }

    #[test]
    fn test_all_scope_overrides_filtered_default() {
        let request = TransactionRegisterRequest {
            filter: FilterState::new().with_facet("status", "declined"),
            scope: Some(StatScope::All),
        };
        let response =
            get_transaction_register(&CARD_TRANSACTIONS, &request, StatScope::Filtered);
        assert_eq!(response.total_count, 1);
        assert_eq!(response.summary.count, CARD_TRANSACTIONS.len() as u64);
    }

    #[test]
    fn test_no_match_yields_zero_summary() {
        let request = TransactionRegisterRequest {
            filter: FilterState::new().with_query("no such merchant"),
            scope: None,
        };
        let response =
            get_transaction_register(&CARD_TRANSACTIONS, &request, StatScope::Filtered);
        assert_eq!(response.summary.count, 0);
        assert_eq!(response.summary.total_amount, 0.0);
        assert!(response.summary.by_status.entries.is_empty());
    }
}
