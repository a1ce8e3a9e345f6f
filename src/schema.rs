table! {
    bookings (id) {
        id -> Unsigned<Bigint>,
        user_id -> Unsigned<Bigint>,
        room_id -> Unsigned<Bigint>,
        slot_id -> Unsigned<Bigint>,
        objective -> Varchar,
        status -> Char,
        action_by -> Unsigned<Bigint>,
        date -> Date,
    }
}

table! {
    rooms (room_id) {
        room_id -> Unsigned<Bigint>,
        room_name -> Varchar,
        image_path -> Varchar,
    }
}

table! {
    sessions (token) {
        token -> Char,
        user_id -> Unsigned<Bigint>,
        login_time -> Datetime,
    }
}

table! {
    time_slots (slot_id) {
        slot_id -> Unsigned<Bigint>,
        room_id -> Unsigned<Bigint>,
        start_time -> Char,
        end_time -> Char,
        status -> Char,
    }
}

table! {
    users (user_id) {
        user_id -> Unsigned<Bigint>,
        username -> Varchar,
        email -> Varchar,
        password -> Char,
        role -> Char,
    }
}

allow_tables_to_appear_in_same_query!(
    bookings,
    rooms,
    sessions,
    time_slots,
    users,
);
