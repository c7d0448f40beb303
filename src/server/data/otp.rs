//! OTP code repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::auth::{OtpMethod, OtpPurpose};

pub struct OtpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a fresh code. Outstanding codes for the same email are left
    /// alone; several may be valid at once.
    pub async fn create(
        &self,
        email: &str,
        code: &str,
        method: OtpMethod,
        purpose: OtpPurpose,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::otp_code::Model, DbErr> {
        entity::otp_code::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            code: ActiveValue::Set(code.to_string()),
            method: ActiveValue::Set(method.as_str().to_string()),
            purpose: ActiveValue::Set(purpose.as_str().to_string()),
            is_used: ActiveValue::Set(false),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            used_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an unused code matching email + code, optionally narrowed to a
    /// purpose. Expiry is NOT checked here; the caller distinguishes "invalid
    /// code" from "expired code".
    pub async fn find_unused(
        &self,
        email: &str,
        code: &str,
        purpose: Option<OtpPurpose>,
    ) -> Result<Option<entity::otp_code::Model>, DbErr> {
        let mut query = entity::prelude::OtpCode::find()
            .filter(entity::otp_code::Column::Email.eq(email))
            .filter(entity::otp_code::Column::Code.eq(code))
            .filter(entity::otp_code::Column::IsUsed.eq(false));

        if let Some(purpose) = purpose {
            query = query.filter(entity::otp_code::Column::Purpose.eq(purpose.as_str()));
        }

        query.one(self.db).await
    }

    /// Consumes a code.
    ///
    /// Single-use is enforced here: the update is conditional on `is_used`
    /// still being false, so of two concurrent consumers exactly one wins.
    ///
    /// # Returns
    /// - `Ok(true)` - This call consumed the code
    /// - `Ok(false)` - The code was already used (or the id is unknown)
    pub async fn consume(&self, otp_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::OtpCode::update_many()
            .filter(entity::otp_code::Column::Id.eq(otp_id))
            .filter(entity::otp_code::Column::IsUsed.eq(false))
            .col_expr(
                entity::otp_code::Column::IsUsed,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::otp_code::Column::UsedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
