mod requests;
mod responses;
mod utils;

use crate::{
    database::{assert, get_db_conn},
    models::{
        bookings::{Booking, BOOKING_STATUS_APPROVED, BOOKING_STATUS_PENDING, BOOKING_STATUS_REJECTED},
        rooms::RoomData,
        time_slots::{
            SlotData, SLOT_STATUS_DISABLED, SLOT_STATUS_FREE, SLOT_STATUS_PENDING,
            SLOT_STATUS_RESERVED,
        },
        users::UserData,
    },
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::Context;
use diesel::prelude::*;

use self::{
    requests::*,
    responses::*,
    utils::{get_approver_from_token, get_lecturer_from_token},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard)
        .service(room_list)
        .service(booking_requests)
        .service(approve_booking)
        .service(reject_booking)
        .service(history);
}

crate::post_funcs! {
    (dashboard, "/dashboard", DashboardRequest, DashboardResponse),
    (room_list, "/room_list", RoomListRequest, RoomListResponse),
    (booking_requests, "/booking_requests", BookingRequestsRequest, BookingRequestsResponse),
    (approve_booking, "/approve_booking", ResolveBookingRequest, SimpleResponse),
    (reject_booking, "/reject_booking", ResolveBookingRequest, SimpleResponse),
    (history, "/history", HistoryRequest, HistoryResponse),
}

async fn dashboard_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DashboardRequest>,
) -> anyhow::Result<DashboardResponse> {
    use crate::schema::time_slots;

    let info = info.into_inner();
    get_lecturer_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let (total, free, pending, reserved, disabled) = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let count_with = |status: &str| {
                time_slots::table
                    .filter(time_slots::status.eq(status))
                    .count()
                    .get_result::<i64>(&conn)
                    .context("DB error")
            };
            let total = time_slots::table
                .count()
                .get_result::<i64>(&conn)
                .context("DB error")?;
            Ok((
                total,
                count_with(SLOT_STATUS_FREE)?,
                count_with(SLOT_STATUS_PENDING)?,
                count_with(SLOT_STATUS_RESERVED)?,
                count_with(SLOT_STATUS_DISABLED)?,
            ))
        })
    })
    .await?;

    Ok(DashboardResponse {
        success: true,
        err: "".to_string(),
        total_slots: total,
        free_slots: free,
        pending_slots: pending,
        reserved_slots: reserved,
        disabled_slots: disabled,
    })
}

async fn room_list_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RoomListRequest>,
) -> anyhow::Result<RoomListResponse> {
    use crate::schema::{rooms, time_slots};

    let info = info.into_inner();
    get_lecturer_from_token(info.login_token, &pool).await?;

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

async fn booking_requests_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BookingRequestsRequest>,
) -> anyhow::Result<BookingRequestsResponse> {
    use crate::schema::{bookings, rooms, time_slots, users};

    let info = info.into_inner();
    get_lecturer_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        bookings::table
            .filter(bookings::status.eq(BOOKING_STATUS_PENDING))
            .inner_join(rooms::table.on(bookings::room_id.eq(rooms::room_id)))
            .inner_join(time_slots::table.on(bookings::slot_id.eq(time_slots::slot_id)))
            .inner_join(users::table.on(bookings::user_id.eq(users::user_id)))
            .order(bookings::date.asc())
            .get_results::<(Booking, RoomData, SlotData, UserData)>(&conn)
    })
    .await
    .context("DB error")?;

    let bookings = rows
        .into_iter()
        .map(|(booking, room, slot, user)| BookingRequestItem {
            booking_id: booking.id,
            username: user.username,
            room_name: room.room_name,
            image_path: format!("/img/{}", room.image_path),
            start_time: slot.start_time,
            end_time: slot.end_time,
            objective: booking.objective,
            date: booking.date.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Ok(BookingRequestsResponse {
        success: true,
        err: "".to_string(),
        bookings,
    })
}

async fn approve_booking_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ResolveBookingRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::{bookings, time_slots};

    let info = info.into_inner();
    let user = get_approver_from_token(info.login_token, &pool).await?;
    assert::assert_booking(&pool, info.booking_id).await?;

    let conn = get_db_conn(&pool)?;
    let approver_id = user.user_id;
    let booking_id = info.booking_id;
    web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let booking = bookings::table
                .filter(bookings::id.eq(booking_id))
                .get_result::<Booking>(&conn)
                .context("DB error")?;

            diesel::update(bookings::table.filter(bookings::id.eq(booking_id)))
                .set((
                    bookings::status.eq(BOOKING_STATUS_APPROVED),
                    bookings::action_by.eq(approver_id),
                ))
                .execute(&conn)
                .context("DB error")?;

            diesel::update(time_slots::table.filter(time_slots::slot_id.eq(booking.slot_id)))
                .set(time_slots::status.eq(SLOT_STATUS_RESERVED))
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn reject_booking_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ResolveBookingRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::{bookings, time_slots};

    let info = info.into_inner();
    let user = get_approver_from_token(info.login_token, &pool).await?;
    assert::assert_booking(&pool, info.booking_id).await?;

    let conn = get_db_conn(&pool)?;
    let rejecter_id = user.user_id;
    let booking_id = info.booking_id;
    web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let booking = bookings::table
                .filter(bookings::id.eq(booking_id))
                .get_result::<Booking>(&conn)
                .context("DB error")?;

            diesel::update(bookings::table.filter(bookings::id.eq(booking_id)))
                .set((
                    bookings::status.eq(BOOKING_STATUS_REJECTED),
                    bookings::action_by.eq(rejecter_id),
                ))
                .execute(&conn)
                .context("DB error")?;

            // a rejected slot goes back into circulation
            diesel::update(time_slots::table.filter(time_slots::slot_id.eq(booking.slot_id)))
                .set(time_slots::status.eq(SLOT_STATUS_FREE))
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn history_impl(
    pool: web::Data<DbPool>,
    info: web::Json<HistoryRequest>,
) -> anyhow::Result<HistoryResponse> {
    use crate::schema::{bookings, rooms, time_slots, users};

    let info = info.into_inner();
    let user = get_lecturer_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let lecturer_id = user.user_id;
    let rows = web::block(move || {
        bookings::table
            .filter(bookings::action_by.eq(lecturer_id))
            .inner_join(rooms::table.on(bookings::room_id.eq(rooms::room_id)))
            .inner_join(time_slots::table.on(bookings::slot_id.eq(time_slots::slot_id)))
            .inner_join(users::table.on(bookings::user_id.eq(users::user_id)))
            .order(bookings::date.desc())
            .get_results::<(Booking, RoomData, SlotData, UserData)>(&conn)
    })
    .await
    .context("DB error")?;

    let bookings = rows
        .into_iter()
        .map(|(booking, room, slot, user)| HistoryItem {
            booking_id: booking.id,
            username: user.username,
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
