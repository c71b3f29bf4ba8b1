use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_pipeline::ListRecord;

/// Fitness club member (A004)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessMember {
    pub id: String,
    pub name: String,
    pub email: String,

    /// Plan tier code, see [`PlanTier`]
    pub plan: String,

    /// Membership status code, see [`MembershipStatus`]
    pub status: String,

    /// Check-ins in the current month
    pub visits_this_month: u32,

    /// Monthly fee for the plan
    pub monthly_fee: f64,
}

impl FitnessMember {
    pub fn new(
        name: String,
        email: String,
        plan: PlanTier,
        status: MembershipStatus,
        visits_this_month: u32,
        monthly_fee: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            plan: plan.code().to_string(),
            status: status.code().to_string(),
            visits_this_month,
            monthly_fee,
        }
    }
}

impl ListRecord for FitnessMember {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(&self.status),
            "plan" => Some(&self.plan),
            _ => None,
        }
    }
}

/// Membership plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanTier {
    Basic,
    Standard,
    Premium,
}

impl PlanTier {
    pub fn code(&self) -> &'static str {
        match self {
            PlanTier::Basic => "basic",
            PlanTier::Standard => "standard",
            PlanTier::Premium => "premium",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PlanTier::Basic => "Basic",
            PlanTier::Standard => "Standard",
            PlanTier::Premium => "Premium",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "basic" => Some(PlanTier::Basic),
            "standard" => Some(PlanTier::Standard),
            "premium" => Some(PlanTier::Premium),
            _ => None,
        }
    }

    pub fn all() -> Vec<PlanTier> {
        vec![PlanTier::Basic, PlanTier::Standard, PlanTier::Premium]
    }
}

/// Membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipStatus {
    Active,
    Frozen,
    Cancelled,
}

impl MembershipStatus {
    pub fn code(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "active",
            MembershipStatus::Frozen => "frozen",
            MembershipStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MembershipStatus::Active => "Active",
            MembershipStatus::Frozen => "Frozen",
            MembershipStatus::Cancelled => "Cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(MembershipStatus::Active),
            "frozen" => Some(MembershipStatus::Frozen),
            "cancelled" => Some(MembershipStatus::Cancelled),
            _ => None,
        }
    }

    pub fn all() -> Vec<MembershipStatus> {
        vec![
            MembershipStatus::Active,
            MembershipStatus::Frozen,
            MembershipStatus::Cancelled,
        ]
    }
}
