use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_pipeline::ListRecord;

/// Loyalty program account (A006)
///
/// Points issued but never redeemed before expiry are "breakage" —
/// the loyalty summary page reports it as a share of all points earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    pub id: String,
    pub member_name: String,
    pub email: String,

    /// Tier code, see [`LoyaltyTier`]
    pub tier: String,

    /// Account status code ("active" | "inactive")
    pub status: String,

    /// Points earned over the account lifetime
    pub points_earned: f64,

    /// Points redeemed against rewards
    pub points_redeemed: f64,

    /// Points expired unredeemed (breakage)
    pub points_expired: f64,
}

impl LoyaltyAccount {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        member_name: String,
        email: String,
        tier: LoyaltyTier,
        status: String,
        points_earned: f64,
        points_redeemed: f64,
        points_expired: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_name,
            email,
            tier: tier.code().to_string(),
            status,
            points_earned,
            points_redeemed,
            points_expired,
        }
    }
}

impl ListRecord for LoyaltyAccount {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.member_name.as_str(), self.email.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "tier" => Some(&self.tier),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}

/// Loyalty program tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
}

impl LoyaltyTier {
    pub fn code(&self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "bronze",
            LoyaltyTier::Silver => "silver",
            LoyaltyTier::Gold => "gold",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "Bronze",
            LoyaltyTier::Silver => "Silver",
            LoyaltyTier::Gold => "Gold",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "bronze" => Some(LoyaltyTier::Bronze),
            "silver" => Some(LoyaltyTier::Silver),
            "gold" => Some(LoyaltyTier::Gold),
            _ => None,
        }
    }

    pub fn all() -> Vec<LoyaltyTier> {
        vec![LoyaltyTier::Bronze, LoyaltyTier::Silver, LoyaltyTier::Gold]
    }
}
