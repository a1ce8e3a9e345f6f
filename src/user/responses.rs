use serde::Serialize;

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
pub struct BookingInfoResponse {
    pub success: bool,
    pub err: String,
    pub room_name: String,
    pub image_path: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Default, Serialize)]
pub struct BookingItem {
    pub booking_id: u64,
    pub room_name: String,
    pub start_time: String,
    pub end_time: String,
    pub objective: String,
    pub status: String,
    pub date: String,
}

#[derive(Default, Serialize)]
pub struct CheckingRequestsResponse {
    pub success: bool,
    pub err: String,
    pub bookings: Vec<BookingItem>,
}

#[derive(Default, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub err: String,
    pub bookings: Vec<BookingItem>,
}

crate::impl_err_response! {
    RoomListResponse,
    BookingInfoResponse,
    CheckingRequestsResponse,
    HistoryResponse,
}
