use contracts::dashboards::d103_room_occupancy::{
    OccupancyBar, RoomOccupancyRequest, RoomOccupancyResponse,
};
use contracts::domain::a005_guest_room::GuestRoom;
use contracts::shared::list_pipeline::{count_by_facet, filtered_view, percent_of, sum_by_facet};

/// Build the room occupancy page: status counts, revenue per status,
/// and per-room-type progress bars scaled against the busiest type.
pub fn get_room_occupancy(
    dataset: &[GuestRoom],
    request: &RoomOccupancyRequest,
) -> RoomOccupancyResponse {
    tracing::info!(query = %request.filter.query, "room occupancy requested");

    let rooms = filtered_view(dataset, &request.filter);

    let by_status = count_by_facet(&rooms, "status");
    let revenue_by_status =
        sum_by_facet(&rooms, "status", |r| r.nightly_rate * f64::from(r.occupied_nights));

    let nights_by_type = sum_by_facet(&rooms, "room_type", |r| f64::from(r.occupied_nights));
    let max_nights = nights_by_type.max_total();
    let occupancy_bars = nights_by_type
        .entries
        .iter()
        .map(|(room_type, sum)| OccupancyBar {
            room_type: room_type.clone(),
            occupied_nights: sum.total,
            percent_of_max: percent_of(sum.total, max_nights),
        })
        .collect();

    RoomOccupancyResponse {
        total_rooms: rooms.len() as u64,
        by_status,
        revenue_by_status,
        occupancy_bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::rooms::GUEST_ROOMS;
    use contracts::domain::a005_guest_room::RoomStatus;
    use contracts::shared::list_pipeline::FilterState;

    #[test]
    fn test_status_counts_cover_all_rooms() {
        let response = get_room_occupancy(&GUEST_ROOMS, &RoomOccupancyRequest::default());
        assert_eq!(response.total_rooms, GUEST_ROOMS.len() as u64);
        assert_eq!(response.by_status.total(), GUEST_ROOMS.len() as u64);
        assert_eq!(response.by_status.get("occupied"), 4);
        assert_eq!(response.by_status.get("vacant"), 2);
        assert_eq!(response.by_status.get("maintenance"), 1);
    }

    #[test]
    fn test_busiest_type_scales_to_hundred_percent() {
        let response = get_room_occupancy(&GUEST_ROOMS, &RoomOccupancyRequest::default());
        // doubles: 19 + 11 + 0 = 30 nights, the busiest type
        let double = response
            .occupancy_bars
            .iter()
            .find(|b| b.room_type == "double")
            .expect("double rooms present");
        assert_eq!(double.occupied_nights, 30.0);
        assert_eq!(double.percent_of_max, 100.0);
        for bar in &response.occupancy_bars {
            assert!(bar.percent_of_max <= 100.0);
        }
    }

    #[test]
    fn test_revenue_multiplies_rate_by_nights() {
        let response = get_room_occupancy(&GUEST_ROOMS, &RoomOccupancyRequest::default());
        // occupied: 101 (95*14) + 201 (140*19) + 202 (140*11) + 301 (260*8)
        let occupied = response.revenue_by_status.get("occupied");
        assert_eq!(occupied.total, 95.0 * 14.0 + 140.0 * 19.0 + 140.0 * 11.0 + 260.0 * 8.0);
        assert_eq!(occupied.count, 4);
    }

    #[test]
    fn test_zero_nights_everywhere_yields_zero_bars() {
        // A wing where nothing was occupied this month
        let rooms = vec![
            GuestRoom::new(
                "401".to_string(),
                None,
                "single".to_string(),
                RoomStatus::Vacant,
                95.0,
                1,
                0,
            ),
            GuestRoom::new(
                "402".to_string(),
                None,
                "double".to_string(),
                RoomStatus::Maintenance,
                140.0,
                2,
                0,
            ),
        ];
        let response = get_room_occupancy(&rooms, &RoomOccupancyRequest::default());
        assert_eq!(response.occupancy_bars.len(), 2);
        for bar in &response.occupancy_bars {
            assert_eq!(bar.percent_of_max, 0.0);
            assert!(!bar.percent_of_max.is_nan());
        }
    }

    #[test]
    fn test_room_type_facet_narrows_the_page() {
        let request = RoomOccupancyRequest {
            filter: FilterState::new().with_facet("room_type", "suite"),
        };
        let response = get_room_occupancy(&GUEST_ROOMS, &request);
        assert_eq!(response.total_rooms, 2);
        assert_eq!(response.occupancy_bars.len(), 1);
        assert_eq!(response.occupancy_bars[0].room_type, "suite");
    }
}
