use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `X-Access-Token` header was supplied on a protected route.
    #[error("Missing authentication token")]
    MissingToken,

    /// Token failed signature, expiry, or type verification.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token verified but no matching user row exists.
    #[error("User not found for token subject {0}")]
    UserNotInDatabase(i32),

    /// Authenticated user has been deactivated.
    #[error("User account is inactive")]
    AccountInactive,

    /// Login failed; deliberately does not distinguish unknown email from
    /// wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Refresh token failed verification or has no active database row.
    #[error("Refresh token not found or revoked")]
    RefreshTokenInvalid,
}

/// Converts authentication errors into HTTP responses.
///
/// Credential and token failures map to 401 Unauthorized; a deactivated
/// account maps to 403 Forbidden. Messages stay generic to avoid account
/// enumeration.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Missing authentication token"),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            Self::UserNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "User not found"),
            Self::AccountInactive => (StatusCode::FORBIDDEN, "User account is inactive"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::RefreshTokenInvalid => {
                (StatusCode::UNAUTHORIZED, "Refresh token not found or revoked")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
