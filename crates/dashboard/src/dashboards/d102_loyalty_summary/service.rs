use contracts::dashboards::d102_loyalty_summary::{
    LoyaltySummaryRequest, LoyaltySummaryResponse, TierShareRow,
};
use contracts::domain::a006_loyalty_account::LoyaltyAccount;
use contracts::shared::list_pipeline::{
    filtered_view, percent_of, sum_by_facet, sum_total, top_n,
};

/// Build the loyalty summary page: points breakdown per tier, breakage
/// share, and the top earners list. All stats run over the filtered
/// accounts (the page has no global/filtered split).
pub fn get_loyalty_summary(
    dataset: &[LoyaltyAccount],
    request: &LoyaltySummaryRequest,
) -> LoyaltySummaryResponse {
    tracing::info!(
        query = %request.filter.query,
        top_n = request.top_n,
        "loyalty summary requested"
    );

    let accounts = filtered_view(dataset, &request.filter);

    let by_tier = sum_by_facet(&accounts, "tier", |a| a.points_earned);
    let total_earned = by_tier.grand_total();
    let total_expired = sum_total(&accounts, |a| a.points_expired);

    let tiers = by_tier
        .entries
        .iter()
        .map(|(tier, sum)| TierShareRow {
            tier: tier.clone(),
            accounts: sum.count,
            points_earned: sum.total,
            percent_of_total: percent_of(sum.total, total_earned),
        })
        .collect();

    LoyaltySummaryResponse {
        tiers,
        total_earned,
        total_expired,
        breakage_percent: percent_of(total_expired, total_earned),
        top_earners: top_n(&accounts, |a| a.points_earned, request.top_n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::loyalty::LOYALTY_ACCOUNTS;
    use contracts::shared::list_pipeline::FilterState;

    #[test]
    fn test_tier_shares_sum_to_hundred_percent() {
        let response = get_loyalty_summary(&LOYALTY_ACCOUNTS, &LoyaltySummaryRequest::default());
        let share_sum: f64 = response.tiers.iter().map(|t| t.percent_of_total).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiers_keep_first_occurrence_order() {
        let response = get_loyalty_summary(&LOYALTY_ACCOUNTS, &LoyaltySummaryRequest::default());
        let order: Vec<&str> = response.tiers.iter().map(|t| t.tier.as_str()).collect();
        // Dataset order: Olivia (gold), Pavel (silver), Quinn (bronze), ...
        assert_eq!(order, vec!["gold", "silver", "bronze"]);
    }

    #[test]
    fn test_breakage_share_of_points_earned() {
        let response = get_loyalty_summary(&LOYALTY_ACCOUNTS, &LoyaltySummaryRequest::default());
        let expected_earned = 24_500.0 + 9_800.0 + 2_100.0 + 31_750.0 + 1_400.0 + 7_200.0;
        let expected_expired = 1_200.0 + 900.0 + 1_600.0 + 500.0 + 0.0 + 2_400.0;
        assert_eq!(response.total_earned, expected_earned);
        assert_eq!(response.total_expired, expected_expired);
        assert_eq!(
            response.breakage_percent,
            expected_expired / expected_earned * 100.0
        );
    }

    #[test]
    fn test_top_earners_descending() {
        let request = LoyaltySummaryRequest {
            filter: FilterState::new(),
            top_n: 2,
        };
        let response = get_loyalty_summary(&LOYALTY_ACCOUNTS, &request);
        let names: Vec<&str> = response
            .top_earners
            .iter()
            .map(|a| a.member_name.as_str())
            .collect();
        assert_eq!(names, vec!["Rosa Diaz", "Olivia Brown"]);
    }

    #[test]
    fn test_empty_view_reports_zero_breakage_not_nan() {
        let request = LoyaltySummaryRequest {
            filter: FilterState::new().with_query("nobody by this name"),
            top_n: 5,
        };
        let response = get_loyalty_summary(&LOYALTY_ACCOUNTS, &request);
        assert!(response.tiers.is_empty());
        assert_eq!(response.breakage_percent, 0.0);
        assert!(!response.breakage_percent.is_nan());
        assert!(response.top_earners.is_empty());
    }

    #[test]
    fn test_tier_facet_scopes_the_whole_page() {
        let request = LoyaltySummaryRequest {
            filter: FilterState::new().with_facet("tier", "gold"),
            top_n: 5,
        };
        let response = get_loyalty_summary(&LOYALTY_ACCOUNTS, &request);
        assert_eq!(response.tiers.len(), 1);
        assert_eq!(response.tiers[0].tier, "gold");
        assert_eq!(response.tiers[0].accounts, 2);
        assert_eq!(response.tiers[0].percent_of_total, 100.0);
    }
}
