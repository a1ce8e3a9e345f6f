use serde::Deserialize;

#[derive(Deserialize)]
pub struct DashboardRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct RoomListRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct BookingRequestsRequest {
    pub login_token: String,
}

#[derive(Deserialize)]
pub struct ResolveBookingRequest {
    pub login_token: String,
    pub booking_id: u64,
}

#[derive(Deserialize)]
pub struct HistoryRequest {
    pub login_token: String,
}
