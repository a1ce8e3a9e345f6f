use actix_web::web;

use crate::{
    database::session,
    models::users::{UserData, ROLE_LECTURER, ROLE_STAFF},
    DbPool,
};

pub async fn get_lecturer_from_token(
    token: String,
    pool: &web::Data<DbPool>,
) -> anyhow::Result<UserData> {
    session::require_role(token, pool, &[ROLE_LECTURER]).await
}

// staff may resolve bookings as well
pub async fn get_approver_from_token(
    token: String,
    pool: &web::Data<DbPool>,
) -> anyhow::Result<UserData> {
    session::require_role(token, pool, &[ROLE_LECTURER, ROLE_STAFF]).await
}
