use crate::schema::rooms;

#[derive(Queryable)]
pub struct RoomData {
    pub room_id: u64,
    pub room_name: String,
    pub image_path: String,
}

#[derive(Insertable)]
#[table_name = "rooms"]
pub struct NewRoom {
    pub room_name: String,
    pub image_path: String,
}
