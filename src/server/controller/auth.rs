use axum::{extract::State, Json};

use crate::{
    model::{
        api::AckDto,
        auth::{
            ChangePasswordRequest, LoginRequest, LoginResponseDto, OrganizationMembershipRequest,
            RefreshTokenRequest, RegisterCompleteRequest, RegisterResendRequest,
            RegisterStartRequest, RegisterStartResponseDto, RegisterVerifyEmailRequest,
            SendOtpRequest, SendResetCodeRequest, TokenResponseDto, ValidateMembershipDto,
            ValidateTokenDto, VerifyOtpRequest,
        },
    },
    server::{
        error::AppError,
        middleware::auth::CurrentUser,
        model::auth::OtpMethod,
        service::auth::AuthService,
        state::AppState,
    },
};

fn auth_service(state: &AppState) -> AuthService<'_> {
    AuthService::new(
        &state.db,
        state.mailer.as_ref(),
        state.sms.as_ref(),
        &state.config,
    )
}

/// Login with email and password.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, body = LoginResponseDto),
        (status = 401, description = "Invalid credentials"),
        (status = 403, description = "Account inactive"),
    ),
    tag = "auth",
)]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponseDto>, AppError> {
    let response = auth_service(&state).login(&body.email, &body.password).await?;

    Ok(Json(response))
}

/// Start registration: creates a registration session and sends a
/// verification code by email.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register-start",
    request_body = RegisterStartRequest,
    responses(
        (status = 200, body = RegisterStartResponseDto),
        (status = 400, description = "Email already registered"),
    ),
    tag = "auth",
)]
pub async fn register_start(
    State(state): State<AppState>,
    Json(body): Json<RegisterStartRequest>,
) -> Result<Json<RegisterStartResponseDto>, AppError> {
    let response = auth_service(&state)
        .register_start(&body.email, &body.password)
        .await?;

    Ok(Json(response))
}

/// Verify the registration email with an OTP code.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register-verify-email",
    request_body = RegisterVerifyEmailRequest,
    responses(
        (status = 200, body = AckDto),
        (status = 400, description = "Invalid or expired code/session"),
        (status = 404, description = "Unknown registration session"),
    ),
    tag = "auth",
)]
pub async fn register_verify_email(
    State(state): State<AppState>,
    Json(body): Json<RegisterVerifyEmailRequest>,
) -> Result<Json<AckDto>, AppError> {
    let response = auth_service(&state)
        .register_verify_email(&body.registration_id, &body.code)
        .await?;

    Ok(Json(response))
}

/// Complete registration: creates the user account and returns tokens.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register-complete",
    request_body = RegisterCompleteRequest,
    responses(
        (status = 200, body = TokenResponseDto),
        (status = 400, description = "Username already taken"),
        (status = 404, description = "Session missing or email unverified"),
    ),
    tag = "auth",
)]
pub async fn register_complete(
    State(state): State<AppState>,
    Json(body): Json<RegisterCompleteRequest>,
) -> Result<Json<TokenResponseDto>, AppError> {
    let response = auth_service(&state)
        .register_complete(&body.registration_id, &body.username, &body.name)
        .await?;

    Ok(Json(response))
}

/// Resend the registration verification code by email.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register-resend-email",
    request_body = RegisterResendRequest,
    responses((status = 200, body = AckDto), (status = 404, description = "Unknown session")),
    tag = "auth",
)]
pub async fn register_resend_email(
    State(state): State<AppState>,
    Json(body): Json<RegisterResendRequest>,
) -> Result<Json<AckDto>, AppError> {
    let response = auth_service(&state)
        .resend_registration_otp(&body.registration_id, OtpMethod::Email)
        .await?;

    Ok(Json(response))
}

/// Resend the registration verification code by SMS.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register-resend-sms",
    request_body = RegisterResendRequest,
    responses((status = 200, body = AckDto), (status = 404, description = "Unknown session")),
    tag = "auth",
)]
pub async fn register_resend_sms(
    State(state): State<AppState>,
    Json(body): Json<RegisterResendRequest>,
) -> Result<Json<AckDto>, AppError> {
    let response = auth_service(&state)
        .resend_registration_otp(&body.registration_id, OtpMethod::Sms)
        .await?;

    Ok(Json(response))
}

/// Send a login OTP via email or SMS.
#[utoipa::path(
    post,
    path = "/api/v1/auth/send-login-otp",
    request_body = SendOtpRequest,
    responses((status = 200, body = AckDto), (status = 400, description = "Bad method or no phone")),
    tag = "auth",
)]
pub async fn send_login_otp(
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Json<AckDto>, AppError> {
    let Some(method) = OtpMethod::parse(&body.method) else {
        return Err(AppError::BadRequest("Invalid delivery method".to_string()));
    };

    let response = auth_service(&state).send_otp(&body.email, method).await?;

    Ok(Json(response))
}

/// Verify a login OTP and return tokens.
#[utoipa::path(
    post,
    path = "/api/v1/auth/verify-otp",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, body = TokenResponseDto),
        (status = 400, description = "Invalid or expired code"),
        (status = 404, description = "Unknown user"),
    ),
    tag = "auth",
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<TokenResponseDto>, AppError> {
    let response = auth_service(&state).verify_otp(&body.email, &body.otp).await?;

    Ok(Json(response))
}

/// Change the authenticated user's password.
#[utoipa::path(
    post,
    path = "/api/v1/auth/change-password",
    request_body = ChangePasswordRequest,
    responses((status = 200, body = AckDto), (status = 400, description = "Wrong current password")),
    tag = "auth",
)]
pub async fn change_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<Json<AckDto>, AppError> {
    let response = auth_service(&state)
        .change_password(user.id, &body.current_password, &body.new_password)
        .await?;

    Ok(Json(response))
}

/// Send a password reset code. Always acknowledges.
#[utoipa::path(
    post,
    path = "/api/v1/auth/send-reset-code",
    request_body = SendResetCodeRequest,
    responses((status = 200, body = AckDto)),
    tag = "auth",
)]
pub async fn send_reset_code(
    State(state): State<AppState>,
    Json(body): Json<SendResetCodeRequest>,
) -> Result<Json<AckDto>, AppError> {
    let response = auth_service(&state).send_reset_code(&body.email).await?;

    Ok(Json(response))
}

/// Validate the presented access token.
#[utoipa::path(
    get,
    path = "/api/v1/auth/validate-token",
    responses((status = 200, body = ValidateTokenDto), (status = 401, description = "Invalid token")),
    tag = "auth",
)]
pub async fn validate_token(
    CurrentUser(user): CurrentUser,
) -> Result<Json<ValidateTokenDto>, AppError> {
    Ok(Json(ValidateTokenDto {
        valid: true,
        user_id: user.id,
    }))
}

/// Exchange a refresh token for a fresh token pair.
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, body = TokenResponseDto),
        (status = 401, description = "Refresh token invalid or revoked"),
    ),
    tag = "auth",
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(body): Json<RefreshTokenRequest>,
) -> Result<Json<TokenResponseDto>, AppError> {
    let response = auth_service(&state).refresh(&body.refresh_token).await?;

    Ok(Json(response))
}

/// Logout: revokes all of the user's refresh tokens.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses((status = 200, body = AckDto)),
    tag = "auth",
)]
pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<AckDto>, AppError> {
    let response = auth_service(&state).logout(user.id).await?;

    Ok(Json(response))
}

/// Check whether the authenticated user belongs to an organization.
#[utoipa::path(
    post,
    path = "/api/v1/auth/validate-user-organization",
    request_body = OrganizationMembershipRequest,
    responses((status = 200, body = ValidateMembershipDto)),
    tag = "auth",
)]
pub async fn validate_user_organization(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<OrganizationMembershipRequest>,
) -> Result<Json<ValidateMembershipDto>, AppError> {
    let response = auth_service(&state)
        .validate_user_organization(user.id, body.organization_id)
        .await?;

    Ok(Json(response))
}

/// Register the authenticated user to an organization.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register-user-organization",
    request_body = OrganizationMembershipRequest,
    responses((status = 200, body = AckDto), (status = 400, description = "Already a member")),
    tag = "auth",
)]
pub async fn register_user_organization(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<OrganizationMembershipRequest>,
) -> Result<Json<AckDto>, AppError> {
    let response = auth_service(&state)
        .register_user_organization(user.id, body.organization_id)
        .await?;

    Ok(Json(response))
}
