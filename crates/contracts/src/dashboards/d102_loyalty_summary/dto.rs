use serde::{Deserialize, Serialize};

use crate::domain::a006_loyalty_account::LoyaltyAccount;
use crate::shared::list_pipeline::FilterState;

/// Request for the loyalty summary page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltySummaryRequest {
    #[serde(default)]
    pub filter: FilterState,

    /// Size of the "top earners" list
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for LoyaltySummaryRequest {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            top_n: default_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    5
}

/// Response for the loyalty summary page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltySummaryResponse {
    /// Points earned per tier, each with its share of the grand total
    pub tiers: Vec<TierShareRow>,
    /// Points earned across all accounts in scope
    pub total_earned: f64,
    /// Points expired unredeemed across all accounts in scope
    pub total_expired: f64,
    /// Breakage as a percentage of points earned (0 when nothing earned)
    pub breakage_percent: f64,
    /// Top accounts by lifetime points earned, descending
    pub top_earners: Vec<LoyaltyAccount>,
}

/// One tier row of the points breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierShareRow {
    pub tier: String,
    /// Accounts in the tier
    pub accounts: u64,
    /// Points earned in the tier
    pub points_earned: f64,
    /// Share of the grand total of points earned, percent
    pub percent_of_total: f64,
}
