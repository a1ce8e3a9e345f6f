pub mod bookings;
pub mod rooms;
pub mod sessions;
pub mod time_slots;
pub mod users;
