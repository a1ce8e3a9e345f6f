use serde::Deserialize;

#[derive(Deserialize)]
pub struct RoomListRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct BookingInfoRequest {
    pub login_token: String,
    pub room_id: u64,
    pub slot_id: u64,
}

#[derive(Deserialize)]
pub struct BookRequest {
    pub login_token: String,
    pub room_id: u64,
    pub slot_id: u64,
    #[serde(default)]
    pub objective: String,
}

#[derive(Deserialize)]
pub struct CheckingRequestsRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct HistoryRequest {
    pub login_token: String,
}
