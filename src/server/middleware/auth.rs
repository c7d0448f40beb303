//! Request authentication.
//!
//! Clients authenticate with a JWT in the custom `X-Access-Token` header
//! (not `Authorization`). The [`CurrentUser`] extractor verifies the token
//! and loads the account, so protected handlers just take it as an argument.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    security::token,
    state::AppState,
};

pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// The authenticated user of the current request.
pub struct CurrentUser(pub entity::user::Model);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(raw_token) = parts
            .headers
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
        else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(claims) = token::verify_token(
            raw_token,
            token::TOKEN_TYPE_ACCESS,
            &state.config.secret_key,
        ) else {
            return Err(AuthError::InvalidToken.into());
        };

        let Some(user) = UserRepository::new(&state.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        if !user.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        Ok(CurrentUser(user))
    }
}
