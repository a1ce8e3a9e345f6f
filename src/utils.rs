#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ident, $response:ident ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => {
                            log::warn!("{}: {}", $url, err);
                            $response::err(err.to_string())
                        }
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::{bail, Context};
use blake2::{Blake2b, Digest};
use chrono::{Local, NaiveDate, NaiveTime, Utc};

use crate::models::time_slots::{
    SLOT_STATUS_DISABLED, SLOT_STATUS_FREE, SLOT_STATUS_PENDING, SLOT_STATUS_RESERVED,
};

// Slot times are zero-padded "HH:MM" strings, so lexicographic order
// matches chronological order and the bookability check can compare
// them directly in SQL.
pub fn current_time_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

pub fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_hhmm(s: &str) -> anyhow::Result<NaiveTime> {
    if s.len() != 5 {
        bail!("Time must be formatted as HH:MM");
    }
    NaiveTime::parse_from_str(s, "%H:%M").context("Time must be formatted as HH:MM")
}

pub fn assert_slot_time_pair(start_time: &str, end_time: &str) -> anyhow::Result<()> {
    let start_time = parse_hhmm(start_time).context("Wrong format on 'start_time'")?;
    let end_time = parse_hhmm(end_time).context("Wrong format on 'end_time'")?;
    if start_time >= end_time {
        bail!("Invalid time interval");
    }
    Ok(())
}

pub fn assert_slot_status_str(status: &str) -> anyhow::Result<()> {
    match status {
        SLOT_STATUS_FREE | SLOT_STATUS_PENDING | SLOT_STATUS_RESERVED | SLOT_STATUS_DISABLED => {
            Ok(())
        }
        _ => bail!("Unknown slot status"),
    }
}

pub fn generate_login_token(user_id: u64, role: &str) -> String {
    let nonce = Utc::now().timestamp_nanos_opt().unwrap_or(0);
    let seed = format!("{}:{}:{}", user_id, role, nonce);
    format!("{:x}", Blake2b::digest(seed.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_time_is_zero_padded_hhmm() {
        let now = current_time_hhmm();
        assert_eq!(now.len(), 5);
        assert!(parse_hhmm(&now).is_ok());
    }

    #[test]
    fn hhmm_string_order_matches_time_order() {
        let pairs = [("08:00", "09:30"), ("09:59", "10:00"), ("13:05", "21:45")];
        for (earlier, later) in &pairs {
            assert!(earlier < later);
            assert!(parse_hhmm(earlier).unwrap() < parse_hhmm(later).unwrap());
        }
    }

    #[test]
    fn parse_hhmm_rejects_unpadded_and_garbage() {
        assert!(parse_hhmm("9:30").is_err());
        assert!(parse_hhmm("09:30:00").is_err());
        assert!(parse_hhmm("25:00").is_err());
        assert!(parse_hhmm("midday").is_err());
    }

    #[test]
    fn slot_time_pair_must_be_ordered() {
        assert!(assert_slot_time_pair("09:00", "11:00").is_ok());
        assert!(assert_slot_time_pair("11:00", "09:00").is_err());
        assert!(assert_slot_time_pair("09:00", "09:00").is_err());
        assert!(assert_slot_time_pair("nine", "11:00").is_err());
    }

    #[test]
    fn slot_status_validation() {
        for status in &["free", "pending", "reserved", "disabled"] {
            assert!(assert_slot_status_str(status).is_ok());
        }
        assert!(assert_slot_status_str("open").is_err());
        assert!(assert_slot_status_str("").is_err());
    }

    #[test]
    fn login_tokens_are_hex_and_user_specific() {
        let token = generate_login_token(1, "user");
        assert_eq!(token.len(), 128);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_login_token(2, "user"));
    }
}
