use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_pipeline::ListRecord;

/// Activity log entry (A001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: String,

    /// When the event happened
    pub timestamp: NaiveDateTime,

    /// Display name of the user who triggered the event
    pub user: String,

    /// Short action label (e.g. "Logged in", "Exported report")
    pub action: String,

    /// Optional free-form detail line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Event category code, see [`ActivityCategory`]
    pub category: String,

    /// Outcome status code, see [`ActivityStatus`]
    pub status: String,
}

impl ActivityLogEntry {
    /// Create a new entry with a generated id
    pub fn new(
        timestamp: NaiveDateTime,
        user: String,
        action: String,
        detail: Option<String>,
        category: ActivityCategory,
        status: ActivityStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp,
            user,
            action,
            detail,
            category: category.code().to_string(),
            status: status.code().to_string(),
        }
    }
}

impl ListRecord for ActivityLogEntry {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.user.as_str(), self.action.as_str()];
        if let Some(detail) = &self.detail {
            fields.push(detail.as_str());
        }
        fields
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(&self.status),
            "category" => Some(&self.category),
            _ => None,
        }
    }
}

/// Outcome of a logged activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Success,
    Warning,
    Error,
}

impl ActivityStatus {
    /// Get the status code
    pub fn code(&self) -> &'static str {
        match self {
            ActivityStatus::Success => "success",
            ActivityStatus::Warning => "warning",
            ActivityStatus::Error => "error",
        }
    }

    /// Get the human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityStatus::Success => "Success",
            ActivityStatus::Warning => "Warning",
            ActivityStatus::Error => "Error",
        }
    }

    /// Parse from a code string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "success" => Some(ActivityStatus::Success),
            "warning" => Some(ActivityStatus::Warning),
            "error" => Some(ActivityStatus::Error),
            _ => None,
        }
    }

    /// Get all statuses (dropdown options)
    pub fn all() -> Vec<ActivityStatus> {
        vec![
            ActivityStatus::Success,
            ActivityStatus::Warning,
            ActivityStatus::Error,
        ]
    }
}

/// Category of a logged activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityCategory {
    Auth,
    Billing,
    Reports,
    Settings,
}

impl ActivityCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ActivityCategory::Auth => "auth",
            ActivityCategory::Billing => "billing",
            ActivityCategory::Reports => "reports",
            ActivityCategory::Settings => "settings",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityCategory::Auth => "Authentication",
            ActivityCategory::Billing => "Billing",
            ActivityCategory::Reports => "Reports",
            ActivityCategory::Settings => "Settings",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "auth" => Some(ActivityCategory::Auth),
            "billing" => Some(ActivityCategory::Billing),
            "reports" => Some(ActivityCategory::Reports),
            "settings" => Some(ActivityCategory::Settings),
            _ => None,
        }
    }

    pub fn all() -> Vec<ActivityCategory> {
        vec![
            ActivityCategory::Auth,
            ActivityCategory::Billing,
            ActivityCategory::Reports,
            ActivityCategory::Settings,
        ]
    }
}
