#[macro_use]
extern crate diesel;

mod auth;
mod database;
mod lecturer;
mod models;
mod protocol;
mod schema;
mod staff;
mod user;
mod utils;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let conn_url = std::env::var("DATABASE_URL").expect("DATABASE_URL not found");
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            // signup / signin / logout
            .configure(auth::config)
            // booking users
            .service(web::scope("/user").configure(user::config))
            // lecturers
            .service(web::scope("/lecturer").configure(lecturer::config))
            // staff
            .service(web::scope("/staff").configure(staff::config))
            // uploaded room images
            .service(Files::new("/img", "public/img"))
    })
    .bind(bind.as_str())?
    .run()
    .await
}
