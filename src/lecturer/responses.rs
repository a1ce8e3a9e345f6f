use serde::Serialize;

#[derive(Default, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub err: String,
    pub total_slots: i64,
    pub free_slots: i64,
    pub pending_slots: i64,
    pub reserved_slots: i64,
    pub disabled_slots: i64,
}

#[derive(Default, Serialize)]
pub struct SlotItem {
    pub slot_id: u64,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

#[derive(Default, Serialize)]
pub struct RoomItem {
    pub room_id: u64,
    pub room_name: String,
    pub image_path: String,
    pub slots: Vec<SlotItem>,
}

#[derive(Default, Serialize)]
pub struct RoomListResponse {
    pub success: bool,
    pub err: String,
    pub rooms: Vec<RoomItem>,
}

#[derive(Default, Serialize)]
pub struct BookingRequestItem {
    pub booking_id: u64,
    pub username: String,
    pub room_name: String,
    pub image_path: String,
    pub start_time: String,
    pub end_time: String,
    pub objective: String,
    pub date: String,
}

#[derive(Default, Serialize)]
pub struct BookingRequestsResponse {
    pub success: bool,
    pub err: String,
    pub bookings: Vec<BookingRequestItem>,
}

#[derive(Default, Serialize)]
pub struct HistoryItem {
    pub booking_id: u64,
    pub username: String,
    pub room_name: String,
    pub start_time: String,
    pub end_time: String,
    pub objective: String,
    pub status: String,
    pub date: String,
}

#[derive(Default, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub err: String,
    pub bookings: Vec<HistoryItem>,
}

crate::impl_err_response! {
    DashboardResponse,
    RoomListResponse,
    BookingRequestsResponse,
    HistoryResponse,
}
