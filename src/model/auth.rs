use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Tokens plus the logged-in user, returned by password and OTP login.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginResponseDto {
    pub success: bool,
    pub token: String,
    pub refresh_token: String,
    pub user: UserSummaryDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterStartRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterStartResponseDto {
    pub success: bool,
    pub message: String,
    pub registration_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterVerifyEmailRequest {
    pub registration_id: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterCompleteRequest {
    pub registration_id: String,
    pub username: String,
    pub name: String,
}

/// Token pair without user payload, returned by registration completion,
/// OTP verification, and refresh.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TokenResponseDto {
    pub success: bool,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegisterResendRequest {
    pub registration_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SendOtpRequest {
    pub email: String,
    /// Delivery method: `email` or `sms`.
    pub method: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SendResetCodeRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ValidateTokenDto {
    pub valid: bool,
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrganizationMembershipRequest {
    pub organization_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ValidateMembershipDto {
    pub valid: bool,
    pub message: String,
}
