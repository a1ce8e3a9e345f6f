mod requests;
mod responses;
mod utils;

use std::collections::HashMap;

use crate::{
    database::{assert, get_db_conn, last_insert_id},
    models::{
        bookings::{Booking, BOOKING_STATUS_PENDING},
        rooms::{NewRoom, RoomData},
        time_slots::{
            NewSlot, SlotData, SLOT_STATUS_DISABLED, SLOT_STATUS_FREE, SLOT_STATUS_PENDING,
            SLOT_STATUS_RESERVED,
        },
        users::UserData,
    },
    protocol::SimpleResponse,
    DbPool,
};
use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use diesel::prelude::*;

use self::{requests::*, responses::*, utils::get_staff_from_token};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard)
        .service(room_list)
        .service(disable_slot)
        .service(enable_slot)
        .service(add_room)
        .service(edit_room_info)
        .service(edit_room)
        .service(all_history);
}

crate::post_funcs! {
    (dashboard, "/dashboard", DashboardRequest, DashboardResponse),
    (room_list, "/room_list", RoomListRequest, RoomListResponse),
    (disable_slot, "/disable_slot", SlotStatusRequest, SimpleResponse),
    (enable_slot, "/enable_slot", SlotStatusRequest, SimpleResponse),
    (add_room, "/add_room", AddRoomRequest, AddRoomResponse),
    (edit_room_info, "/edit_room_info", EditRoomInfoRequest, EditRoomInfoResponse),
    (edit_room, "/edit_room", EditRoomRequest, SimpleResponse),
    (all_history, "/all_history", AllHistoryRequest, AllHistoryResponse),
}

async fn dashboard_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DashboardRequest>,
) -> anyhow::Result<DashboardResponse> {
    use crate::schema::time_slots;

    let info = info.into_inner();
    get_staff_from_token(info.login_token, &pool).await?;

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
    get_staff_from_token(info.login_token, &pool).await?;

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

async fn disable_slot_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SlotStatusRequest>,
) -> anyhow::Result<SimpleResponse> {
    set_slot_status(pool, info.into_inner(), SLOT_STATUS_DISABLED).await
}

async fn enable_slot_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SlotStatusRequest>,
) -> anyhow::Result<SimpleResponse> {
    set_slot_status(pool, info.into_inner(), SLOT_STATUS_FREE).await
}

// Forces the slot regardless of any in-flight booking; an approved
// booking keeps its status even when its slot gets disabled here.
async fn set_slot_status(
    pool: web::Data<DbPool>,
    info: SlotStatusRequest,
    status: &'static str,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::time_slots;

    get_staff_from_token(info.login_token, &pool).await?;
    assert::assert_slot(&pool, info.slot_id).await?;

    let conn = get_db_conn(&pool)?;
    let slot_id = info.slot_id;
    web::block(move || {
        diesel::update(time_slots::table.filter(time_slots::slot_id.eq(slot_id)))
            .set(time_slots::status.eq(status))
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}

async fn add_room_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddRoomRequest>,
) -> anyhow::Result<AddRoomResponse> {
    use crate::schema::{rooms, time_slots};

    let info = info.into_inner();
    get_staff_from_token(info.login_token.clone(), &pool).await?;

    for slot in &info.slots {
        crate::utils::assert_slot_time_pair(&slot.start_time, &slot.end_time)?;
        crate::utils::assert_slot_status_str(&slot.status)?;
    }

    let conn = get_db_conn(&pool)?;
    let room_id = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let data = NewRoom {
                room_name: info.room_name,
                image_path: info.image_path,
            };
            diesel::insert_into(rooms::table)
                .values(data)
                .execute(&conn)
                .context("DB error")?;

            let room_id = diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("DB error")?;

            for slot in info.slots {
                let data = NewSlot {
                    room_id,
                    start_time: slot.start_time,
                    end_time: slot.end_time,
                    status: slot.status,
                };
                diesel::insert_into(time_slots::table)
                    .values(data)
                    .execute(&conn)
                    .context("DB error")?;
            }

            Ok(room_id)
        })
    })
    .await?;

    Ok(AddRoomResponse {
        success: true,
        err: "".to_string(),
        room_id,
    })
}

async fn edit_room_info_impl(
    pool: web::Data<DbPool>,
    info: web::Json<EditRoomInfoRequest>,
) -> anyhow::Result<EditRoomInfoResponse> {
    use crate::schema::{rooms, time_slots};

    let info = info.into_inner();
    get_staff_from_token(info.login_token, &pool).await?;
    assert::assert_room(&pool, info.room_id).await?;

    let conn = get_db_conn(&pool)?;
    let room_id = info.room_id;
    let (room, slots) = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let room = rooms::table
                .filter(rooms::room_id.eq(room_id))
                .get_result::<RoomData>(&conn)
                .context("DB error")?;
            let slots = time_slots::table
                .filter(time_slots::room_id.eq(room_id))
                .order(time_slots::slot_id.asc())
                .get_results::<SlotData>(&conn)
                .context("DB error")?;
            Ok((room, slots))
        })
    })
    .await?;

    Ok(EditRoomInfoResponse {
        success: true,
        err: "".to_string(),
        room_name: room.room_name,
        image_path: format!("/img/{}", room.image_path),
        slots: slots
            .into_iter()
            .map(|slot| SlotItem {
                slot_id: slot.slot_id,
                start_time: slot.start_time,
                end_time: slot.end_time,
                status: slot.status,
            })
            .collect(),
    })
}

async fn edit_room_impl(
    pool: web::Data<DbPool>,
    info: web::Json<EditRoomRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::{rooms, time_slots};

    let info = info.into_inner();
    get_staff_from_token(info.login_token.clone(), &pool).await?;
    assert::assert_room(&pool, info.room_id).await?;

    for slot in &info.slots {
        crate::utils::assert_slot_time_pair(&slot.start_time, &slot.end_time)?;
        crate::utils::assert_slot_status_str(&slot.status)?;
    }

    let conn = get_db_conn(&pool)?;
    web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let room = rooms::table
                .filter(rooms::room_id.eq(info.room_id))
                .get_result::<RoomData>(&conn)
                .context("DB error")?;

            // keep the stored image when no new upload was supplied
            let image_path = info.image_path.unwrap_or(room.image_path);
            diesel::update(rooms::table.filter(rooms::room_id.eq(info.room_id)))
                .set((
                    rooms::room_name.eq(&info.room_name),
                    rooms::image_path.eq(&image_path),
                ))
                .execute(&conn)
                .context("DB error")?;

            for slot in info.slots {
                let res = time_slots::table
                    .filter(time_slots::slot_id.eq(slot.slot_id))
                    .filter(time_slots::room_id.eq(info.room_id))
                    .count()
                    .get_result::<i64>(&conn)
                    .context("DB error")?;
                if res == 0 {
                    bail!("No such slot");
                }

                diesel::update(time_slots::table.filter(time_slots::slot_id.eq(slot.slot_id)))
                    .set((
                        time_slots::start_time.eq(slot.start_time),
                        time_slots::end_time.eq(slot.end_time),
                        time_slots::status.eq(slot.status),
                    ))
                    .execute(&conn)
                    .context("DB error")?;
            }

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn all_history_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AllHistoryRequest>,
) -> anyhow::Result<AllHistoryResponse> {
    use crate::schema::{bookings, rooms, time_slots, users};

    let info = info.into_inner();
    get_staff_from_token(info.login_token, &pool).await?;

    let conn = get_db_conn(&pool)?;
    let (rows, resolvers) = web::block(move || {
        conn.transaction::<_, anyhow::Error, _>(|| {
            let rows = bookings::table
                .filter(bookings::status.ne(BOOKING_STATUS_PENDING))
                .inner_join(rooms::table.on(bookings::room_id.eq(rooms::room_id)))
                .inner_join(time_slots::table.on(bookings::slot_id.eq(time_slots::slot_id)))
                .inner_join(users::table.on(bookings::user_id.eq(users::user_id)))
                .order(bookings::date.desc())
                .get_results::<(Booking, RoomData, SlotData, UserData)>(&conn)
                .context("DB error")?;

            // second lookup instead of joining users twice
            let resolver_ids = rows
                .iter()
                .map(|(booking, _, _, _)| booking.action_by)
                .collect::<Vec<_>>();
            let resolvers = users::table
                .filter(users::user_id.eq_any(resolver_ids))
                .get_results::<UserData>(&conn)
                .context("DB error")?;

            Ok((rows, resolvers))
        })
    })
    .await?;

    let resolver_names = resolvers
        .into_iter()
        .map(|user| (user.user_id, user.username))
        .collect::<HashMap<_, _>>();

    let bookings = rows
        .into_iter()
        .map(|(booking, room, slot, requester)| AllHistoryItem {
            booking_id: booking.id,
            student_name: requester.username,
            lecturer_name: resolver_names
                .get(&booking.action_by)
                .cloned()
                .unwrap_or_default(),
            room_name: room.room_name,
            start_time: slot.start_time,
            end_time: slot.end_time,
            objective: booking.objective,
            status: booking.status,
            date: booking.date.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Ok(AllHistoryResponse {
        success: true,
        err: "".to_string(),
        bookings,
    })
}
