use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_pipeline::ListRecord;

/// Card transaction (A002)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardTransaction {
    pub id: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Merchant display name
    pub merchant: String,

    /// Cardholder display name
    pub cardholder: String,

    /// Optional statement description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Last four digits of the card, as printed on receipts
    pub card_last_four: String,

    /// Amount in account currency
    pub amount: f64,

    /// Status code, see [`TransactionStatus`]
    pub status: String,

    /// Spend category code (e.g. "travel", "software")
    pub category: String,
}

impl CardTransaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        merchant: String,
        cardholder: String,
        description: Option<String>,
        card_last_four: String,
        amount: f64,
        status: TransactionStatus,
        category: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            merchant,
            cardholder,
            description,
            card_last_four,
            amount,
            status: status.code().to_string(),
            category,
        }
    }
}

impl ListRecord for CardTransaction {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.merchant.as_str(),
            self.cardholder.as_str(),
            self.card_last_four.as_str(),
        ];
        if let Some(description) = &self.description {
            fields.push(description.as_str());
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

/// Settlement status of a card transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Declined,
    Flagged,
}

impl TransactionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Declined => "declined",
            TransactionStatus::Flagged => "flagged",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Declined => "Declined",
            TransactionStatus::Flagged => "Flagged for review",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(TransactionStatus::Completed),
            "pending" => Some(TransactionStatus::Pending),
            "declined" => Some(TransactionStatus::Declined),
            "flagged" => Some(TransactionStatus::Flagged),
            _ => None,
        }
    }

    pub fn all() -> Vec<TransactionStatus> {
        vec![
            TransactionStatus::Completed,
            TransactionStatus::Pending,
            TransactionStatus::Declined,
            TransactionStatus::Flagged,
        ]
    }
}
