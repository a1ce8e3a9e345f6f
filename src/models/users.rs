use crate::schema::users;

#[derive(Queryable)]
pub struct UserData {
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

pub const ROLE_USER: &str = "user";
pub const ROLE_LECTURER: &str = "lecturer";
pub const ROLE_STAFF: &str = "staff";
