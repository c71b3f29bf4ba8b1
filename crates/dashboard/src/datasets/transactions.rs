use chrono::NaiveDate;
use once_cell::sync::Lazy;

use contracts::domain::a002_card_transaction::{CardTransaction, TransactionStatus};

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid seed date")
}

/// The card transaction dataset, statement order.
pub static CARD_TRANSACTIONS: Lazy<Vec<CardTransaction>> = Lazy::new(|| {
    use TransactionStatus::*;

    vec![
        CardTransaction::new(
            date("2026-08-21"),
            "AWS".to_string(),
            "Sarah Johnson".to_string(),
            Some("Cloud hosting, August".to_string()),
            "4821".to_string(),
            1240.50,
            Completed,
            "software".to_string(),
        ),
        CardTransaction::new(
            date("2026-08-22"),
            "United Airlines".to_string(),
            "Mike Chen".to_string(),
            Some("SFO-JFK round trip".to_string()),
            "7733".to_string(),
            689.00,
            Completed,
            "travel".to_string(),
        ),
        CardTransaction::new(
            date("2026-08-23"),
            "Figma".to_string(),
            "Emily Davis".to_string(),
            None,
            "4821".to_string(),
            100.0,
            Pending,
            "software".to_string(),
        ),
        CardTransaction::new(
            date("2026-08-24"),
            "Office Depot".to_string(),
            "James Wilson".to_string(),
            Some("Standing desk parts".to_string()),
            "1047".to_string(),
            50.0,
            Pending,
            "office".to_string(),
        ),
        CardTransaction::new(
            date("2026-08-25"),
            "Uber".to_string(),
            "Priya Patel".to_string(),
            None,
            "7733".to_string(),
            25.0,
            Pending,
            "travel".to_string(),
        ),
        CardTransaction::new(
            date("2026-08-25"),
            "Staples".to_string(),
            "Tom Becker".to_string(),
            Some("Printer toner".to_string()),
            "1047".to_string(),
            89.99,
            Declined,
            "office".to_string(),
        ),
        CardTransaction::new(
            date("2026-08-26"),
            "GiftCardsNow".to_string(),
            "Ana Souza".to_string(),
            Some("Bulk gift card purchase".to_string()),
            "9902".to_string(),
            2500.00,
            Flagged,
            "other".to_string(),
        ),
        CardTransaction::new(
            date("2026-08-27"),
            "Zoom".to_string(),
            "Sarah Johnson".to_string(),
            None,
            "4821".to_string(),
            149.90,
            Completed,
            "software".to_string(),
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_subset_matches_register_scenario() {
        let pending: Vec<f64> = CARD_TRANSACTIONS
            .iter()
            .filter(|t| t.status == "pending")
            .map(|t| t.amount)
            .collect();
        assert_eq!(pending, vec![100.0, 50.0, 25.0]);
    }
}
