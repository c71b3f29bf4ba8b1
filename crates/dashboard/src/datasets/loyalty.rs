use once_cell::sync::Lazy;

use contracts::domain::a006_loyalty_account::{LoyaltyAccount, LoyaltyTier};

/// The loyalty program dataset.
pub static LOYALTY_ACCOUNTS: Lazy<Vec<LoyaltyAccount>> = Lazy::new(|| {
    use LoyaltyTier::*;

    vec![
        LoyaltyAccount::new(
            "Olivia Brown".to_string(),
            "olivia.brown@example.com".to_string(),
            Gold,
            "active".to_string(),
            24_500.0,
            18_000.0,
            1_200.0,
        ),
        LoyaltyAccount::new(
            "Pavel Novak".to_string(),
            "pavel.novak@example.com".to_string(),
            Silver,
            "active".to_string(),
            9_800.0,
            4_300.0,
            900.0,
        ),
        LoyaltyAccount::new(
            "Quinn Murphy".to_string(),
            "quinn.murphy@example.com".to_string(),
            Bronze,
            "inactive".to_string(),
            2_100.0,
            0.0,
            1_600.0,
        ),
        LoyaltyAccount::new(
            "Rosa Diaz".to_string(),
            "rosa.diaz@example.com".to_string(),
            Gold,
            "active".to_string(),
            31_750.0,
            22_000.0,
            500.0,
        ),
        LoyaltyAccount::new(
            "Samir Aziz".to_string(),
            "samir.aziz@example.com".to_string(),
            Bronze,
            "active".to_string(),
            1_400.0,
            600.0,
            0.0,
        ),
        LoyaltyAccount::new(
            "Tara Kelly".to_string(),
            "tara.kelly@example.com".to_string(),
            Silver,
            "inactive".to_string(),
            7_200.0,
            2_500.0,
            2_400.0,
        ),
    ]
});
