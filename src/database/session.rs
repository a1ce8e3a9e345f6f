use actix_web::web;
use anyhow::{bail, Context};
use chrono::Utc;
use diesel::prelude::*;

use crate::{
    database::get_db_conn,
    models::{sessions::SessionData, users::UserData},
    DbPool,
};

const SESSION_MAX_AGE_SECS: i64 = 3600;

pub async fn get_session_user(token: String, pool: &web::Data<DbPool>) -> anyhow::Result<UserData> {
    use crate::schema::{sessions, users};

    let conn = get_db_conn(pool)?;
    let data = web::block(move || {
        sessions::table
            .inner_join(users::table.on(sessions::user_id.eq(users::user_id)))
            .filter(sessions::token.eq(token))
            .order(sessions::login_time.desc())
            .limit(1)
            .get_result::<(SessionData, UserData)>(&conn)
            .optional()
    })
    .await
    .context("DB error")?;

    if let Some((session, user)) = data {
        let age = Utc::now().naive_utc().signed_duration_since(session.login_time);
        if age.num_seconds() <= SESSION_MAX_AGE_SECS {
            Ok(user)
        } else {
            bail!("Login has expired");
        }
    } else {
        bail!("Not signed in");
    }
}

// Single role gate shared by every protected handler; each role module
// wraps it with its allowed role set.
pub async fn require_role(
    token: String,
    pool: &web::Data<DbPool>,
    roles: &[&str],
) -> anyhow::Result<UserData> {
    let user = get_session_user(token, pool).await?;
    if !roles.contains(&user.role.as_str()) {
        bail!("Permission denied");
    }
    Ok(user)
}
