mod requests;
mod responses;

use crate::{
    database::{get_db_conn, session},
    models::{
        sessions::SessionData,
        users::{NewUser, UserData, ROLE_USER},
    },
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use blake2::{Blake2b, Digest};
use chrono::Utc;
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(signup)
        .service(signin)
        .service(logout)
        .service(view_info);
}

crate::post_funcs! {
    (signup, "/signup", SignupRequest, SimpleResponse),
    (signin, "/signin", SigninRequest, SigninResponse),
    (logout, "/logout", LogoutRequest, SimpleResponse),
    (view_info, "/view_info", ViewInfoRequest, ViewInfoResponse),
}

async fn signup_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SignupRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::users;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;

    web::block(move || {
        conn.transaction(|| {
            let res = users::table
                .filter(users::email.eq(&info.email))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res > 0 {
                bail!("Email already exists");
            }

            let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
            let data = NewUser {
                username: info.username,
                email: info.email,
                password: hashed_password,
                // signup never grants a privileged role
                role: ROLE_USER.to_string(),
            };
            diesel::insert_into(users::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn signin_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SigninRequest>,
) -> anyhow::Result<SigninResponse> {
    use crate::schema::{sessions, users};

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;

    let (login_token, role) = web::block(move || {
        conn.transaction(|| {
            let user = users::table
                .filter(users::email.eq(&info.email))
                .get_result::<UserData>(&conn)
                .optional()
                .context("DB error")?;
            let user = match user {
                Some(user) => user,
                None => bail!("User not found"),
            };

            let hashed_password = format!("{:x}", Blake2b::digest(info.password.as_bytes()));
            if user.password != hashed_password {
                bail!("Incorrect password");
            }

            let login_token = crate::utils::generate_login_token(user.user_id, &user.role);
            let data = SessionData {
                token: login_token.clone(),
                user_id: user.user_id,
                login_time: Utc::now().naive_utc(),
            };
            diesel::insert_into(sessions::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            Ok((login_token, user.role))
        })
    })
    .await?;

    Ok(SigninResponse {
        success: true,
        err: "".to_string(),
        login_token,
        role,
    })
}

async fn logout_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LogoutRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::sessions;

    let info = info.into_inner();
    let conn = get_db_conn(&pool)?;
    web::block(move || {
        diesel::delete(sessions::table.filter(sessions::token.eq(info.login_token)))
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}

async fn view_info_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewInfoRequest>,
) -> anyhow::Result<ViewInfoResponse> {
    let info = info.into_inner();
    let user = session::get_session_user(info.login_token, &pool).await?;

    Ok(ViewInfoResponse {
        success: true,
        err: "".to_string(),
        username: user.username,
        email: user.email,
        role: user.role,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use diesel::r2d2::ConnectionManager;
    use diesel::MysqlConnection;
    use std::time::Duration;

    // A pool pointing at a closed port; handlers must turn the
    // connection failure into an err response, not a panic or a 500.
    fn unreachable_pool() -> crate::DbPool {
        let manager = ConnectionManager::<MysqlConnection>::new("mysql://none@127.0.0.1:1/none");
        r2d2::Pool::builder()
            .connection_timeout(Duration::from_millis(100))
            .build_unchecked(manager)
    }

    #[actix_rt::test]
    async fn signin_failure_is_reported_as_json() {
        let mut app =
            test::init_service(App::new().data(unreachable_pool()).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/signin")
            .set_json(&serde_json::json!({"email": "a@b.c", "password": "pw"}))
            .to_request();
        let resp: serde_json::Value = test::read_response_json(&mut app, req).await;

        assert_eq!(resp["success"], false);
        assert!(!resp["err"].as_str().unwrap_or("").is_empty());
        assert_eq!(resp["login_token"], "");
    }

    #[actix_rt::test]
    async fn view_info_without_session_fails() {
        let mut app =
            test::init_service(App::new().data(unreachable_pool()).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/view_info")
            .set_json(&serde_json::json!({"login_token": "deadbeef"}))
            .to_request();
        let resp: serde_json::Value = test::read_response_json(&mut app, req).await;

        assert_eq!(resp["success"], false);
    }
}
