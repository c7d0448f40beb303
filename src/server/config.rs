use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 30;
const DEFAULT_REFRESH_TOKEN_EXPIRE_DAYS: i64 = 7;
const DEFAULT_OTP_EXPIRY_MINUTES: i64 = 10;
const DEFAULT_REGISTRATION_SESSION_EXPIRY_HOURS: i64 = 24;
const DEFAULT_CURRENCY: &str = "EUR";

/// Application configuration, read once from the environment at startup and
/// passed down through `AppState`. There is no global settings object.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,

    /// HS256 signing secret for access and refresh tokens.
    pub secret_key: String,
    pub access_token_expire_minutes: i64,
    pub refresh_token_expire_days: i64,
    pub otp_expiry_minutes: i64,
    pub registration_session_expiry_hours: i64,

    /// Comma-separated list of allowed CORS origins.
    pub allowed_origins: Vec<String>,

    /// Default currency for paid events.
    pub default_currency: String,

    // Outbound collaborators. Each is optional; an unconfigured collaborator
    // degrades instead of failing the caller's primary action.
    pub email_api_url: Option<String>,
    pub email_api_key: Option<String>,
    pub email_from_address: Option<String>,

    pub sms_api_url: Option<String>,
    pub sms_api_key: Option<String>,
    pub sms_sender_id: Option<String>,

    pub payment_api_url: Option<String>,
    pub payment_secret_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            database_url: require_env("DATABASE_URL")?,
            secret_key: require_env("SECRET_KEY")?,
            access_token_expire_minutes: env_i64(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            )?,
            refresh_token_expire_days: env_i64(
                "REFRESH_TOKEN_EXPIRE_DAYS",
                DEFAULT_REFRESH_TOKEN_EXPIRE_DAYS,
            )?,
            otp_expiry_minutes: env_i64("OTP_EXPIRY_MINUTES", DEFAULT_OTP_EXPIRY_MINUTES)?,
            registration_session_expiry_hours: env_i64(
                "REGISTRATION_SESSION_EXPIRY_HOURS",
                DEFAULT_REGISTRATION_SESSION_EXPIRY_HOURS,
            )?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            default_currency: env_or("DEFAULT_CURRENCY", DEFAULT_CURRENCY),
            email_api_url: optional_env("EMAIL_API_URL"),
            email_api_key: optional_env("EMAIL_API_KEY"),
            email_from_address: optional_env("EMAIL_FROM_ADDRESS"),
            sms_api_url: optional_env("SMS_API_URL"),
            sms_api_key: optional_env("SMS_API_KEY"),
            sms_sender_id: optional_env("SMS_SENDER_ID"),
            payment_api_url: optional_env("PAYMENT_API_URL"),
            payment_secret_key: optional_env("PAYMENT_SECRET_KEY"),
        })
    }
}

fn require_env(key: &str) -> Result<String, AppError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()).into())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_i64(key: &str, default: i64) -> Result<i64, AppError> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidEnvVar(key.to_string()).into()),
        Err(_) => Ok(default),
    }
}
