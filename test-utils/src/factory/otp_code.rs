//! OTP code factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct OtpCodeFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    code: String,
    method: String,
    purpose: String,
    is_used: bool,
    expires_at: DateTime<Utc>,
}

impl<'a> OtpCodeFactory<'a> {
    /// Defaults to an unused email login code expiring in ten minutes.
    pub fn new(db: &'a DatabaseConnection, email: impl Into<String>) -> Self {
        Self {
            db,
            email: email.into(),
            code: "123456".to_string(),
            method: "email".to_string(),
            purpose: "login".to_string(),
            is_used: false,
            expires_at: Utc::now() + Duration::minutes(10),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn used(mut self) -> Self {
        self.is_used = true;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::otp_code::Model, DbErr> {
        entity::otp_code::ActiveModel {
            email: ActiveValue::Set(self.email),
            code: ActiveValue::Set(self.code),
            method: ActiveValue::Set(self.method),
            purpose: ActiveValue::Set(self.purpose),
            is_used: ActiveValue::Set(self.is_used),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            used_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
