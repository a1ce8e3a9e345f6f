pub mod assert;
pub mod session;

use crate::DbPool;
use actix_web::web;
use anyhow::Context;
use diesel::sql_types::{Bigint, Unsigned};
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use r2d2::PooledConnection;

no_arg_sql_function!(last_insert_id, Unsigned<Bigint>);

pub fn get_db_conn(
    pool: &web::Data<DbPool>,
) -> anyhow::Result<PooledConnection<ConnectionManager<MysqlConnection>>> {
    pool.get().context("DB connection")
}
