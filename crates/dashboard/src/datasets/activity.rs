use chrono::NaiveDateTime;
use once_cell::sync::Lazy;

use contracts::domain::a001_activity_log::{ActivityCategory, ActivityLogEntry, ActivityStatus};

/// Parse a seed timestamp. Seed data is hand-written, a bad literal is a bug.
fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid seed timestamp")
}

/// The activity log dataset: ten entries, newest last.
pub static ACTIVITY_LOG: Lazy<Vec<ActivityLogEntry>> = Lazy::new(|| {
    use ActivityCategory::*;
    use ActivityStatus::*;

    vec![
        ActivityLogEntry::new(
            ts("2026-08-28 08:12:03"),
            "Sarah Johnson".to_string(),
            "Logged in".to_string(),
            None,
            Auth,
            Success,
        ),
        ActivityLogEntry::new(
            ts("2026-08-28 08:45:17"),
            "Mike Chen".to_string(),
            "Exported revenue report".to_string(),
            Some("Q3 revenue, CSV".to_string()),
            Reports,
            Success,
        ),
        ActivityLogEntry::new(
            ts("2026-08-28 09:02:44"),
            "Emily Davis".to_string(),
            "Updated billing address".to_string(),
            None,
            Billing,
            Success,
        ),
        ActivityLogEntry::new(
            ts("2026-08-28 09:30:51"),
            "James Wilson".to_string(),
            "Changed notification settings".to_string(),
            None,
            Settings,
            Success,
        ),
        ActivityLogEntry::new(
            ts("2026-08-28 10:05:09"),
            "Sarah Johnson".to_string(),
            "Downloaded invoice PDF".to_string(),
            Some("Invoice INV-2214".to_string()),
            Billing,
            Success,
        ),
        ActivityLogEntry::new(
            ts("2026-08-28 10:18:36"),
            "Priya Patel".to_string(),
            "Logged in".to_string(),
            Some("New device".to_string()),
            Auth,
            Warning,
        ),
        ActivityLogEntry::new(
            ts("2026-08-28 10:47:20"),
            "Tom Becker".to_string(),
            "Payment retry".to_string(),
            Some("Card declined by issuer".to_string()),
            Billing,
            Error,
        ),
        ActivityLogEntry::new(
            ts("2026-08-28 11:11:58"),
            "Ana Souza".to_string(),
            "Generated payout report".to_string(),
            None,
            Reports,
            Success,
        ),
        ActivityLogEntry::new(
            ts("2026-08-28 11:40:12"),
            "Liam O'Brien".to_string(),
            "Logged in".to_string(),
            Some("2FA fallback code used".to_string()),
            Auth,
            Warning,
        ),
        ActivityLogEntry::new(
            ts("2026-08-28 12:02:30"),
            "Nora Haddad".to_string(),
            "Invited teammate".to_string(),
            Some("viewer role".to_string()),
            Settings,
            Success,
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        assert_eq!(ACTIVITY_LOG.len(), 10);
        let successes = ACTIVITY_LOG.iter().filter(|e| e.status == "success").count();
        let warnings = ACTIVITY_LOG.iter().filter(|e| e.status == "warning").count();
        let errors = ACTIVITY_LOG.iter().filter(|e| e.status == "error").count();
        assert_eq!((successes, warnings, errors), (7, 2, 1));
        let sarahs = ACTIVITY_LOG
            .iter()
            .filter(|e| e.user == "Sarah Johnson")
            .count();
        assert_eq!(sarahs, 2);
    }
}
