//! One-time code and opaque identifier generation.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::server::config::Config;

const OTP_LENGTH: usize = 6;
const ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random numeric OTP code.
pub fn generate_otp() -> String {
    let mut rng = rand::rng();
    (0..OTP_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10)))
        .collect()
}

/// Generates a unique registration session id, `REG-<timestamp>-<random>`.
pub fn generate_registration_id() -> String {
    format!(
        "REG-{}-{}",
        Utc::now().format("%Y%m%d%H%M%S"),
        random_suffix(8)
    )
}

/// Generates a unique event ticket code, `TKT-<timestamp>-<random>`.
pub fn generate_ticket_code() -> String {
    format!(
        "TKT-{}-{}",
        Utc::now().format("%Y%m%d%H%M"),
        random_suffix(10)
    )
}

fn random_suffix(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(ID_CHARSET[rng.random_range(0..ID_CHARSET.len())]))
        .collect()
}

/// OTP expiration instant per configuration.
pub fn otp_expiry(config: &Config) -> DateTime<Utc> {
    Utc::now() + Duration::minutes(config.otp_expiry_minutes)
}

/// Registration session expiration instant per configuration.
pub fn registration_expiry(config: &Config) -> DateTime<Utc> {
    Utc::now() + Duration::hours(config.registration_session_expiry_hours)
}

/// Whether an expiry instant has passed.
pub fn is_expired(expires_at: DateTime<Utc>) -> bool {
    Utc::now() > expires_at
}
