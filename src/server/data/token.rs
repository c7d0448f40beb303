//! Refresh token repository.
//!
//! Tokens are superseded, never deleted: revocation and rotation flip
//! `is_revoked` and insert replacements, leaving an audit trail.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RefreshTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RefreshTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a newly issued refresh token.
    pub async fn insert(
        &self,
        user_id: i32,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::refresh_token::Model, DbErr> {
        entity::refresh_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token.to_string()),
            expires_at: ActiveValue::Set(expires_at),
            is_revoked: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a non-revoked token row for (token, user).
    pub async fn find_active(
        &self,
        token: &str,
        user_id: i32,
    ) -> Result<Option<entity::refresh_token::Model>, DbErr> {
        entity::prelude::RefreshToken::find()
            .filter(entity::refresh_token::Column::Token.eq(token))
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .filter(entity::refresh_token::Column::IsRevoked.eq(false))
            .one(self.db)
            .await
    }

    /// Flags a single token revoked.
    pub async fn revoke(&self, token_id: i32) -> Result<(), DbErr> {
        entity::prelude::RefreshToken::update_many()
            .filter(entity::refresh_token::Column::Id.eq(token_id))
            .col_expr(
                entity::refresh_token::Column::IsRevoked,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Revokes every outstanding token of a user (logout-everywhere).
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tokens revoked
    pub async fn revoke_all_for_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::RefreshToken::update_many()
            .filter(entity::refresh_token::Column::UserId.eq(user_id))
            .filter(entity::refresh_token::Column::IsRevoked.eq(false))
            .col_expr(
                entity::refresh_token::Column::IsRevoked,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
