use once_cell::sync::Lazy;

use contracts::domain::a004_fitness_member::{FitnessMember, MembershipStatus, PlanTier};

/// The fitness club dataset.
pub static FITNESS_MEMBERS: Lazy<Vec<FitnessMember>> = Lazy::new(|| {
    use MembershipStatus::*;
    use PlanTier::*;

    vec![
        FitnessMember::new(
            "Grace Lee".to_string(),
            "grace.lee@example.com".to_string(),
            Premium,
            Active,
            18,
            89.0,
        ),
        FitnessMember::new(
            "Hugo Fernandez".to_string(),
            "hugo.fernandez@example.com".to_string(),
            Basic,
            Active,
            6,
            29.0,
        ),
        FitnessMember::new(
            "Ingrid Olsen".to_string(),
            "ingrid.olsen@example.com".to_string(),
            Standard,
            Frozen,
            0,
            49.0,
        ),
        FitnessMember::new(
            "Jamal Wright".to_string(),
            "jamal.wright@example.com".to_string(),
            Standard,
            Active,
            11,
            49.0,
        ),
        FitnessMember::new(
            "Keiko Tanaka".to_string(),
            "keiko.tanaka@example.com".to_string(),
            Premium,
            Active,
            22,
            89.0,
        ),
        FitnessMember::new(
            "Lucas Meyer".to_string(),
            "lucas.meyer@example.com".to_string(),
            Basic,
            Cancelled,
            0,
            29.0,
        ),
        FitnessMember::new(
            "Maya Singh".to_string(),
            "maya.singh@example.com".to_string(),
            Standard,
            Active,
            9,
            49.0,
        ),
    ]
});
