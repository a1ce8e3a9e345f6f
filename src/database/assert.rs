use actix_web::web;
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{database::get_db_conn, DbPool};

pub async fn assert_room(pool: &web::Data<DbPool>, room_id: u64) -> anyhow::Result<()> {
    use crate::schema::rooms;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        rooms::table
            .filter(rooms::room_id.eq(room_id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such room");
    }

    Ok(())
}

pub async fn assert_slot(pool: &web::Data<DbPool>, slot_id: u64) -> anyhow::Result<()> {
    use crate::schema::time_slots;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        time_slots::table
            .filter(time_slots::slot_id.eq(slot_id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such slot");
    }

    Ok(())
}

pub async fn assert_booking(pool: &web::Data<DbPool>, booking_id: u64) -> anyhow::Result<()> {
    use crate::schema::bookings;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        bookings::table
            .filter(bookings::id.eq(booking_id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such booking");
    }

    Ok(())
}
