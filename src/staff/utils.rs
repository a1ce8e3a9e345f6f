use actix_web::web;

use crate::{
    database::session,
    models::users::{UserData, ROLE_STAFF},
    DbPool,
};

pub async fn get_staff_from_token(
    token: String,
    pool: &web::Data<DbPool>,
) -> anyhow::Result<UserData> {
    session::require_role(token, pool, &[ROLE_STAFF]).await
}
