use once_cell::sync::Lazy;

use contracts::domain::a005_guest_room::{GuestRoom, RoomStatus};

/// The hospitality dataset, one row per room.
pub static GUEST_ROOMS: Lazy<Vec<GuestRoom>> = Lazy::new(|| {
    use RoomStatus::*;

    vec![
        GuestRoom::new(
            "101".to_string(),
            Some("Victor Hugo Ramos".to_string()),
            "single".to_string(),
            Occupied,
            95.0,
            1,
            14,
        ),
        GuestRoom::new(
            "102".to_string(),
            None,
            "single".to_string(),
            Vacant,
            95.0,
            1,
            6,
        ),
        GuestRoom::new(
            "201".to_string(),
            Some("Wendy Park".to_string()),
            "double".to_string(),
            Occupied,
            140.0,
            2,
            19,
        ),
        GuestRoom::new(
            "202".to_string(),
            Some("Xavier Dupont".to_string()),
            "double".to_string(),
            Occupied,
            140.0,
            2,
            11,
        ),
        GuestRoom::new(
            "203".to_string(),
            None,
            "double".to_string(),
            Maintenance,
            140.0,
            2,
            0,
        ),
        GuestRoom::new(
            "301".to_string(),
            Some("Yara Haik".to_string()),
            "suite".to_string(),
            Occupied,
            260.0,
            4,
            8,
        ),
        GuestRoom::new(
            "302".to_string(),
            None,
            "suite".to_string(),
            Vacant,
            260.0,
            4,
            3,
        ),
    ]
});
