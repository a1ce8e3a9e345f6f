mod requests;
mod responses;
mod utils;

use crate::{
    database::{assert, get_db_conn},
    models::{
        bookings::{Booking, NewBooking, BOOKING_STATUS_PENDING},
        rooms::RoomData,
        time_slots::{SlotData, SLOT_STATUS_PENDING},
    },
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use diesel::prelude::*;

use self::{requests::*, responses::*, utils::get_user_from_token};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(room_list)
        .service(booking_info)
        .service(book)
        .service(checking_requests)
        .service(history);
}

crate::post_funcs! {
    (room_list, "/room_list", RoomListRequest, RoomListResponse),
    (booking_info, "/booking_info", BookingInfoRequest, BookingInfoResponse),
    (book, "/book", BookRequest, SimpleResponse),
    (checking_requests, "/checking_requests", CheckingRequestsRequest, CheckingRequestsResponse),
    (history, "/history", HistoryRequest, HistoryResponse),
}

async fn room_list_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RoomListRequest>,
) -> anyhow::Result<RoomListResponse> {
    use crate::schema::{rooms, time_slots};

    let info = info.into_inner();
    get_user_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let (rooms, slots) = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let rooms = rooms::table
                .order(rooms::room_id.asc())
                .get_results::<RoomData>(&conn)
                .context("DB error")?;
            let slots = time_slots::table
                .order(time_slots::slot_id.asc())
                .get_results::<SlotData>(&conn)
                .context("DB error")?;
            Ok((rooms, slots))
        })
    })
    .await?;

    let rooms = rooms
        .into_iter()
        .map(|room| RoomItem {
            slots: slots
                .iter()
                .filter(|slot| slot.room_id == room.room_id)
                .map(|slot| SlotItem {
                    slot_id: slot.slot_id,
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                    status: slot.status.clone(),
                })
                .collect(),
            room_id: room.room_id,
            room_name: room.room_name,
            image_path: format!("/img/{}", room.image_path),
        })
        .collect();

    Ok(RoomListResponse {
        success: true,
        err: "".to_string(),
        rooms,
    })
}

async fn booking_info_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BookingInfoRequest>,
) -> anyhow::Result<BookingInfoResponse> {
    use crate::schema::{rooms, time_slots};

    let info = info.into_inner();
    get_user_from_token(info.login_token, &pool).await?;
    assert::assert_room(&pool, info.room_id).await?;
    assert::assert_slot(&pool, info.slot_id).await?;

    let conn = get_db_conn(&pool)?;
    let room_id = info.room_id;
    let slot_id = info.slot_id;
    let (room, slot) = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let room = rooms::table
                .filter(rooms::room_id.eq(room_id))
                .get_result::<RoomData>(&conn)
                .context("DB error")?;
            let slot = time_slots::table
                .filter(time_slots::slot_id.eq(slot_id))
                .get_result::<SlotData>(&conn)
                .context("DB error")?;
            Ok((room, slot))
        })
    })
    .await?;

    Ok(BookingInfoResponse {
        success: true,
        err: "".to_string(),
        room_name: room.room_name,
        image_path: format!("/img/{}", room.image_path),
        start_time: slot.start_time,
        end_time: slot.end_time,
    })
}

async fn book_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BookRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::{bookings, time_slots};

    let info = info.into_inner();
    let user = get_user_from_token(info.login_token.clone(), &pool).await?;

    let user_id = user.user_id;
    let today = crate::utils::current_date();
    let now = crate::utils::current_time_hhmm();

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            // the slot must still lie ahead of the wall clock today
            let slot = time_slots::table
                .filter(time_slots::slot_id.eq(info.slot_id))
                .filter(time_slots::start_time.gt(&now))
                .get_result::<SlotData>(&conn)
                .optional()
                .context("DB error")?;
            let slot = match slot {
                Some(slot) => slot,
                None => bail!("No available time slots for today"),
            };

            // one booking per user per day, whatever its status
            let res = bookings::table
                .filter(bookings::user_id.eq(user_id))
                .filter(bookings::date.eq(&today))
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            if res > 0 {
                bail!("Only one booking per day is allowed");
            }

            // booking row first, then the slot transition
            let data = NewBooking {
                user_id,
                room_id: info.room_id,
                slot_id: slot.slot_id,
                objective: info.objective,
                status: BOOKING_STATUS_PENDING.to_string(),
                action_by: user_id,
                date: today,
            };
            diesel::insert_into(bookings::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            diesel::update(time_slots::table.filter(time_slots::slot_id.eq(slot.slot_id)))
                .set(time_slots::status.eq(SLOT_STATUS_PENDING))
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn checking_requests_impl(
    pool: web::Data<DbPool>,
    info: web::Json<CheckingRequestsRequest>,
) -> anyhow::Result<CheckingRequestsResponse> {
    use crate::schema::{bookings, rooms, time_slots};

    let info = info.into_inner();
    let user = get_user_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let user_id = user.user_id;
    let rows = web::block(move || {
        bookings::table
            .filter(bookings::user_id.eq(user_id))
            .filter(bookings::status.eq(BOOKING_STATUS_PENDING))
            .inner_join(rooms::table.on(bookings::room_id.eq(rooms::room_id)))
            .inner_join(time_slots::table.on(bookings::slot_id.eq(time_slots::slot_id)))
            .order(bookings::date.desc())
            .get_results::<(Booking, RoomData, SlotData)>(&conn)
    })
    .await
    .context("DB error")?;

    let bookings = rows
        .into_iter()
        .map(|(booking, room, slot)| BookingItem {
            booking_id: booking.id,
            room_name: room.room_name,
            start_time: slot.start_time,
            end_time: slot.end_time,
            objective: booking.objective,
            status: booking.status,
            date: booking.date.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Ok(CheckingRequestsResponse {
        success: true,
        err: "".to_string(),
        bookings,
    })
}

async fn history_impl(
    pool: web::Data<DbPool>,
    info: web::Json<HistoryRequest>,
) -> anyhow::Result<HistoryResponse> {
    use crate::schema::{bookings, rooms, time_slots};

    let info = info.into_inner();
    let user = get_user_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let user_id = user.user_id;
    let rows = web::block(move || {
        bookings::table
            .filter(bookings::user_id.eq(user_id))
            .inner_join(rooms::table.on(bookings::room_id.eq(rooms::room_id)))
            .inner_join(time_slots::table.on(bookings::slot_id.eq(time_slots::slot_id)))
            .order(bookings::date.desc())
            .get_results::<(Booking, RoomData, SlotData)>(&conn)
    })
    .await
    .context("DB error")?;

    let bookings = rows
        .into_iter()
        .map(|(booking, room, slot)| BookingItem {
            booking_id: booking.id,
            room_name: room.room_name,
            start_time: slot.start_time,
            end_time: slot.end_time,
            objective: booking.objective,
            status: booking.status,
            date: booking.date.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Ok(HistoryResponse {
        success: true,
        err: "".to_string(),
        bookings,
    })
}
