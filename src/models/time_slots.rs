use crate::schema::time_slots;

#[derive(Queryable)]
pub struct SlotData {
    pub slot_id: u64,
    pub room_id: u64,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

#[derive(Insertable)]
#[table_name = "time_slots"]
pub struct NewSlot {
    pub room_id: u64,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
}

pub const SLOT_STATUS_FREE: &str = "free";
pub const SLOT_STATUS_PENDING: &str = "pending";
pub const SLOT_STATUS_RESERVED: &str = "reserved";
pub const SLOT_STATUS_DISABLED: &str = "disabled";
