//! HS256 JWT issuance and verification.
//!
//! Tokens carry `{sub, exp, type}` with `type` distinguishing short-lived
//! access tokens from long-lived refresh tokens. Encoding uses base64url
//! without padding; verification checks the signature, the expiry, and the
//! expected type.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::server::{config::Config, error::AppError};

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: i32,
    /// Expiry as a Unix timestamp (seconds).
    pub exp: i64,
    /// Token kind (`access` or `refresh`).
    #[serde(rename = "type")]
    pub token_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JwtHeader {
    alg: String,
    typ: String,
}

/// An access/refresh token pair issued together.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Creates both access and refresh tokens for a user.
pub fn create_token_pair(user_id: i32, config: &Config) -> Result<TokenPair, AppError> {
    let now = Utc::now();

    let access_token = encode(
        &Claims {
            sub: user_id,
            exp: (now + Duration::minutes(config.access_token_expire_minutes)).timestamp(),
            token_type: TOKEN_TYPE_ACCESS.to_string(),
        },
        &config.secret_key,
    )?;

    let refresh_token = encode(
        &Claims {
            sub: user_id,
            exp: (now + Duration::days(config.refresh_token_expire_days)).timestamp(),
            token_type: TOKEN_TYPE_REFRESH.to_string(),
        },
        &config.secret_key,
    )?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

/// Encodes claims as an HS256-signed JWT.
pub fn encode(claims: &Claims, secret: &str) -> Result<String, AppError> {
    let header = JwtHeader {
        alg: "HS256".to_string(),
        typ: "JWT".to_string(),
    };

    let header_json = serde_json::to_vec(&header)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize JWT header: {e}")))?;
    let claims_json = serde_json::to_vec(claims)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize JWT claims: {e}")))?;

    let signing_input = format!(
        "{}.{}",
        URL_SAFE_NO_PAD.encode(header_json),
        URL_SAFE_NO_PAD.encode(claims_json)
    );

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::InternalError(format!("Invalid HMAC key: {e}")))?;
    mac.update(signing_input.as_bytes());
    let signature = mac.finalize().into_bytes();

    Ok(format!(
        "{signing_input}.{}",
        URL_SAFE_NO_PAD.encode(signature)
    ))
}

/// Decodes a JWT and verifies its signature. Returns `None` on any structural
/// or cryptographic failure; expiry and type are NOT checked here.
fn decode(token: &str, secret: &str) -> Option<Claims> {
    let mut parts = token.split('.');
    let header_b64 = parts.next()?;
    let claims_b64 = parts.next()?;
    let sig_b64 = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let header: JwtHeader =
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(header_b64).ok()?).ok()?;
    if header.alg != "HS256" {
        return None;
    }

    let signature = URL_SAFE_NO_PAD.decode(sig_b64).ok()?;
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(format!("{header_b64}.{claims_b64}").as_bytes());
    mac.verify_slice(&signature).ok()?;

    serde_json::from_slice(&URL_SAFE_NO_PAD.decode(claims_b64).ok()?).ok()
}

/// Verifies a JWT: signature, expiry, and expected token type.
///
/// Returns the claims when valid, `None` otherwise. Failures are logged at
/// debug level; callers map `None` to an authentication error.
pub fn verify_token(token: &str, token_type: &str, secret: &str) -> Option<Claims> {
    let claims = decode(token, secret)?;

    if claims.token_type != token_type {
        tracing::debug!(
            "Invalid token type. Expected {}, got {}",
            token_type,
            claims.token_type
        );
        return None;
    }

    if claims.exp < Utc::now().timestamp() {
        tracing::debug!("Token has expired");
        return None;
    }

    Some(claims)
}
