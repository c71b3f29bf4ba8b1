use serde::{Deserialize, Serialize};

use crate::shared::list_pipeline::{FacetCounts, FacetSums, FilterState};

/// Request for the room occupancy page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomOccupancyRequest {
    #[serde(default)]
    pub filter: FilterState,
}

/// Response for the room occupancy page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomOccupancyResponse {
    /// Rooms in scope after filtering
    pub total_rooms: u64,
    /// Rooms per status (occupied / vacant / maintenance)
    pub by_status: FacetCounts,
    /// Monthly revenue (rate x occupied nights) per status
    pub revenue_by_status: FacetSums,
    /// Progress-bar rows per room type, scaled against the busiest type
    pub occupancy_bars: Vec<OccupancyBar>,
}

/// One progress-bar row of the occupancy breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyBar {
    pub room_type: String,
    /// Occupied nights accumulated by the room type
    pub occupied_nights: f64,
    /// Bar width: share of the busiest room type, percent
    /// (0 for every row when no nights are recorded at all)
    pub percent_of_max: f64,
}
