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
pub struct SlotStatusRequest {
    pub login_token: String,
    pub slot_id: u64,
}

#[derive(Deserialize)]
pub struct NewSlotItem {
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

#[derive(Deserialize)]
pub struct AddRoomRequest {
    pub login_token: String,
    pub room_name: String,
    // filename produced by the upload handler
    pub image_path: String,
    pub slots: Vec<NewSlotItem>,
}

#[derive(Deserialize)]
pub struct EditRoomInfoRequest {
    pub login_token: String,
    pub room_id: u64,
}

#[derive(Deserialize)]
pub struct SlotUpdateItem {
    pub slot_id: u64,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

#[derive(Deserialize)]
pub struct EditRoomRequest {
    pub login_token: String,
    pub room_id: u64,
    pub room_name: String,
    pub image_path: Option<String>,
    pub slots: Vec<SlotUpdateItem>,
}

#[derive(Deserialize)]
pub struct AllHistoryRequest {
    pub login_token: String,
}
