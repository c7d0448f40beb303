//! Registration, login, OTP, and token lifecycle.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::{
        api::AckDto,
        auth::{
            LoginResponseDto, RegisterStartResponseDto, TokenResponseDto, ValidateMembershipDto,
        },
        user::UserSummaryDto,
    },
    server::{
        config::Config,
        data::{
            organization::OrganizationRepository,
            otp::OtpRepository,
            registration::RegistrationSessionRepository,
            token::RefreshTokenRepository,
            user::{CreateUserParams, UserRepository},
        },
        error::{auth::AuthError, AppError},
        model::auth::{OtpMethod, OtpPurpose, RegistrationState},
        outbound::{email::Mailer, sms::SmsSender},
        security::{otp, password, token},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
    sms: &'a dyn SmsSender,
    config: &'a Config,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        mailer: &'a dyn Mailer,
        sms: &'a dyn SmsSender,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            mailer,
            sms,
            config,
        }
    }

    /// Logs a user in with email and password.
    ///
    /// Unknown email and wrong password produce the same 401 so the endpoint
    /// cannot be used to probe for accounts.
    pub async fn login(&self, email: &str, pass: &str) -> Result<LoginResponseDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(pass, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        user_repo.update_last_login(user.id).await?;

        let tokens = self.issue_tokens(user.id).await?;

        Ok(LoginResponseDto {
            success: true,
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: UserSummaryDto::from_entity(user),
        })
    }

    /// Starts registration: creates a session and mails a verification code.
    pub async fn register_start(
        &self,
        email: &str,
        pass: &str,
    ) -> Result<RegisterStartResponseDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(email).await? {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let registration_id = otp::generate_registration_id();
        let password_hash = password::hash_password(pass);

        RegistrationSessionRepository::new(self.db)
            .create(
                &registration_id,
                email,
                &password_hash,
                otp::registration_expiry(self.config),
            )
            .await?;

        let code = otp::generate_otp();
        OtpRepository::new(self.db)
            .create(
                email,
                &code,
                OtpMethod::Email,
                OtpPurpose::Register,
                otp::otp_expiry(self.config),
            )
            .await?;

        self.mailer
            .send_otp_email(email, &code, "registration")
            .await?
            .warn_if_degraded("register_start");

        Ok(RegisterStartResponseDto {
            success: true,
            message: "Verification code sent to your email".to_string(),
            registration_id,
        })
    }

    /// Verifies the email of an in-progress registration with an OTP code.
    ///
    /// Consuming the code and advancing the session are both conditional
    /// single-row updates, so neither can happen twice.
    pub async fn register_verify_email(
        &self,
        registration_id: &str,
        code: &str,
    ) -> Result<AckDto, AppError> {
        let session_repo = RegistrationSessionRepository::new(self.db);

        let Some(session) = session_repo.find_incomplete(registration_id).await? else {
            return Err(AppError::NotFound(
                "Registration session not found or already completed".to_string(),
            ));
        };

        if otp::is_expired(session.expires_at) {
            return Err(AppError::BadRequest(
                "Registration session expired".to_string(),
            ));
        }

        if RegistrationState::parse(&session.state) == Some(RegistrationState::EmailVerified) {
            return Err(AppError::BadRequest("Email already verified".to_string()));
        }

        let otp_repo = OtpRepository::new(self.db);

        let Some(otp_row) = otp_repo
            .find_unused(&session.email, code, Some(OtpPurpose::Register))
            .await?
        else {
            return Err(AppError::BadRequest(
                "Invalid verification code".to_string(),
            ));
        };

        if otp::is_expired(otp_row.expires_at) {
            return Err(AppError::BadRequest(
                "Verification code expired".to_string(),
            ));
        }

        if !otp_repo.consume(otp_row.id).await? {
            return Err(AppError::BadRequest(
                "Invalid verification code".to_string(),
            ));
        }

        session_repo
            .advance(
                registration_id,
                RegistrationState::Started,
                RegistrationState::EmailVerified,
            )
            .await?;

        Ok(AckDto::ok("Email verified successfully"))
    }

    /// Completes registration: claims the session, creates the user, and
    /// issues the first token pair.
    pub async fn register_complete(
        &self,
        registration_id: &str,
        username: &str,
        name: &str,
    ) -> Result<TokenResponseDto, AppError> {
        let session_repo = RegistrationSessionRepository::new(self.db);

        let Some(session) = session_repo
            .find_in_state(registration_id, RegistrationState::EmailVerified)
            .await?
        else {
            return Err(AppError::NotFound(
                "Registration session not found or email not verified".to_string(),
            ));
        };

        let user_repo = UserRepository::new(self.db);

        if user_repo.username_exists(username).await? {
            return Err(AppError::BadRequest("Username already taken".to_string()));
        }

        // Claim the session before creating the user; of two concurrent
        // completions only one can win this compare-and-swap.
        let claimed = session_repo
            .advance(
                registration_id,
                RegistrationState::EmailVerified,
                RegistrationState::Completed,
            )
            .await?;
        if !claimed {
            return Err(AppError::NotFound(
                "Registration session not found or email not verified".to_string(),
            ));
        }

        let user = user_repo
            .create(CreateUserParams {
                email: session.email.clone(),
                username: username.to_string(),
                password_hash: session.password_hash.clone(),
                name: name.to_string(),
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::BadRequest("Email or username already registered".to_string())
                }
                _ => AppError::from(err),
            })?;

        let tokens = self.issue_tokens(user.id).await?;

        self.mailer
            .send_welcome_email(&user.email, &user.username)
            .await?
            .warn_if_degraded("register_complete");

        Ok(TokenResponseDto {
            success: true,
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    /// Re-sends a verification code for an in-progress registration.
    ///
    /// The fresh code carries the `register` purpose so it is valid for the
    /// email-verification step. SMS delivery only works once an account with
    /// a phone exists, which is never the case mid-registration; it fails
    /// with the same "no phone" error as login OTP.
    pub async fn resend_registration_otp(
        &self,
        registration_id: &str,
        method: OtpMethod,
    ) -> Result<AckDto, AppError> {
        let Some(session) = RegistrationSessionRepository::new(self.db)
            .find_by_registration_id(registration_id)
            .await?
        else {
            return Err(AppError::NotFound(
                "Registration session not found".to_string(),
            ));
        };

        self.deliver_otp(&session.email, method, OtpPurpose::Register)
            .await
    }

    /// Creates and delivers a login OTP.
    pub async fn send_otp(&self, email: &str, method: OtpMethod) -> Result<AckDto, AppError> {
        self.deliver_otp(email, method, OtpPurpose::Login).await
    }

    /// Creates an OTP with the given purpose and delivers it by the chosen
    /// method.
    async fn deliver_otp(
        &self,
        email: &str,
        method: OtpMethod,
        purpose: OtpPurpose,
    ) -> Result<AckDto, AppError> {
        let code = otp::generate_otp();

        OtpRepository::new(self.db)
            .create(email, &code, method, purpose, otp::otp_expiry(self.config))
            .await?;

        let context = match purpose {
            OtpPurpose::Register => "registration",
            OtpPurpose::Login => "login",
            OtpPurpose::PasswordReset => "password reset",
        };

        match method {
            OtpMethod::Email => {
                self.mailer
                    .send_otp_email(email, &code, context)
                    .await?
                    .warn_if_degraded("send_otp");
            }
            OtpMethod::Sms => {
                let user = UserRepository::new(self.db).find_by_email(email).await?;
                let Some(phone) = user.and_then(|u| u.phone) else {
                    return Err(AppError::BadRequest(
                        "No phone number registered".to_string(),
                    ));
                };

                self.sms
                    .send_otp_sms(&phone, &code)
                    .await?
                    .warn_if_degraded("send_otp");
            }
        }

        Ok(AckDto::ok(format!(
            "Verification code sent via {}",
            method.as_str()
        )))
    }

    /// Verifies an OTP and logs the user in.
    ///
    /// Matching is by email + code + unused, without a purpose filter.
    pub async fn verify_otp(&self, email: &str, code: &str) -> Result<TokenResponseDto, AppError> {
        let otp_repo = OtpRepository::new(self.db);

        let Some(otp_row) = otp_repo.find_unused(email, code, None).await? else {
            return Err(AppError::BadRequest(
                "Invalid verification code".to_string(),
            ));
        };

        if otp::is_expired(otp_row.expires_at) {
            return Err(AppError::BadRequest(
                "Verification code expired".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !otp_repo.consume(otp_row.id).await? {
            return Err(AppError::BadRequest(
                "Invalid verification code".to_string(),
            ));
        }

        user_repo.update_last_login(user.id).await?;

        let tokens = self.issue_tokens(user.id).await?;

        Ok(TokenResponseDto {
            success: true,
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    /// Changes the password of an authenticated user.
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<AckDto, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !password::verify_password(current_password, &user.password_hash) {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        user_repo
            .update_password(user_id, &password::hash_password(new_password))
            .await?;

        Ok(AckDto::ok("Password changed successfully"))
    }

    /// Creates and mails a password reset code.
    ///
    /// Always acknowledges with the same message; a code is only created when
    /// the account exists, so the endpoint does not reveal which emails are
    /// registered.
    pub async fn send_reset_code(&self, email: &str) -> Result<AckDto, AppError> {
        const MESSAGE: &str = "If the email exists, a reset code has been sent";

        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Ok(AckDto::ok(MESSAGE));
        };

        let code = otp::generate_otp();
        OtpRepository::new(self.db)
            .create(
                &user.email,
                &code,
                OtpMethod::Email,
                OtpPurpose::PasswordReset,
                otp::otp_expiry(self.config),
            )
            .await?;

        self.mailer
            .send_password_reset_email(&user.email, &code)
            .await?
            .warn_if_degraded("send_reset_code");

        Ok(AckDto::ok(MESSAGE))
    }

    /// Exchanges a refresh token for a new token pair, rotating the
    /// persisted refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenResponseDto, AppError> {
        let Some(claims) = token::verify_token(
            refresh_token,
            token::TOKEN_TYPE_REFRESH,
            &self.config.secret_key,
        ) else {
            return Err(AuthError::RefreshTokenInvalid.into());
        };

        let token_repo = RefreshTokenRepository::new(self.db);

        let Some(record) = token_repo.find_active(refresh_token, claims.sub).await? else {
            return Err(AuthError::RefreshTokenInvalid.into());
        };

        // Supersede: flag the presented token revoked, persist the new one.
        token_repo.revoke(record.id).await?;
        let tokens = self.issue_tokens(claims.sub).await?;

        Ok(TokenResponseDto {
            success: true,
            token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        })
    }

    /// Revokes all outstanding refresh tokens of a user.
    pub async fn logout(&self, user_id: i32) -> Result<AckDto, AppError> {
        RefreshTokenRepository::new(self.db)
            .revoke_all_for_user(user_id)
            .await?;

        Ok(AckDto::ok("Logged out successfully"))
    }

    /// Checks whether a user belongs to an organization.
    pub async fn validate_user_organization(
        &self,
        user_id: i32,
        organization_id: i32,
    ) -> Result<ValidateMembershipDto, AppError> {
        let is_member = OrganizationRepository::new(self.db)
            .is_member(user_id, organization_id)
            .await?;

        Ok(if is_member {
            ValidateMembershipDto {
                valid: true,
                message: "User belongs to organization".to_string(),
            }
        } else {
            ValidateMembershipDto {
                valid: false,
                message: "User does not belong to organization".to_string(),
            }
        })
    }

    /// Adds the user to an organization.
    pub async fn register_user_organization(
        &self,
        user_id: i32,
        organization_id: i32,
    ) -> Result<AckDto, AppError> {
        let created = OrganizationRepository::new(self.db)
            .add_member(user_id, organization_id)
            .await?;

        if created.is_none() {
            return Err(AppError::BadRequest(
                "User already registered to this organization".to_string(),
            ));
        }

        Ok(AckDto::ok("User registered to organization"))
    }

    /// Issues a token pair and persists the refresh half.
    async fn issue_tokens(&self, user_id: i32) -> Result<token::TokenPair, AppError> {
        let tokens = token::create_token_pair(user_id, self.config)?;

        RefreshTokenRepository::new(self.db)
            .insert(
                user_id,
                &tokens.refresh_token,
                chrono::Utc::now() + chrono::Duration::days(self.config.refresh_token_expire_days),
            )
            .await?;

        Ok(tokens)
    }
}
