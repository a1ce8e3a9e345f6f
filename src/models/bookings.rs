use crate::schema::bookings;
use chrono::NaiveDate;

#[derive(Queryable)]
pub struct Booking {
    pub id: u64,
    pub user_id: u64,
    pub room_id: u64,
    pub slot_id: u64,
    pub objective: String,
    pub status: String,
    pub action_by: u64,
    pub date: NaiveDate,
}

#[derive(Insertable)]
#[table_name = "bookings"]
pub struct NewBooking {
    pub user_id: u64,
    pub room_id: u64,
    pub slot_id: u64,
    pub objective: String,
    pub status: String,
    pub action_by: u64,
    pub date: NaiveDate,
}

pub const BOOKING_STATUS_PENDING: &str = "pending";
pub const BOOKING_STATUS_APPROVED: &str = "approved";
pub const BOOKING_STATUS_REJECTED: &str = "rejected";
