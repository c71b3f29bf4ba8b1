use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::list_pipeline::ListRecord;

/// Hotel room for the hospitality module (A005)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRoom {
    pub id: String,

    /// Room number as printed on the door (e.g. "204")
    pub room_number: String,

    /// Current guest, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,

    /// Room type code (e.g. "single", "double", "suite")
    pub room_type: String,

    /// Status code, see [`RoomStatus`]
    pub status: String,

    /// Rate per night
    pub nightly_rate: f64,

    /// Maximum number of guests
    pub capacity: u32,

    /// Nights occupied in the current month
    pub occupied_nights: u32,
}

impl GuestRoom {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        room_number: String,
        guest_name: Option<String>,
        room_type: String,
        status: RoomStatus,
        nightly_rate: f64,
        capacity: u32,
        occupied_nights: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            room_number,
            guest_name,
            room_type,
            status: status.code().to_string(),
            nightly_rate,
            capacity,
            occupied_nights,
        }
    }
}

impl ListRecord for GuestRoom {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.room_number.as_str(), self.room_type.as_str()];
        if let Some(guest) = &self.guest_name {
            fields.push(guest.as_str());
        }
        fields
    }

    fn facet(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(&self.status),
            "room_type" => Some(&self.room_type),
            _ => None,
        }
    }
}

/// Occupancy status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Occupied,
    Vacant,
    Maintenance,
}

impl RoomStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RoomStatus::Occupied => "occupied",
            RoomStatus::Vacant => "vacant",
            RoomStatus::Maintenance => "maintenance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Vacant => "Vacant",
            RoomStatus::Maintenance => "Under maintenance",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "occupied" => Some(RoomStatus::Occupied),
            "vacant" => Some(RoomStatus::Vacant),
            "maintenance" => Some(RoomStatus::Maintenance),
            _ => None,
        }
    }

    pub fn all() -> Vec<RoomStatus> {
        vec![
            RoomStatus::Occupied,
            RoomStatus::Vacant,
            RoomStatus::Maintenance,
        ]
    }
}
