//! Discount code repository.
//!
//! Redemption is a single conditional increment bounded by `max_uses`, so the
//! usage counter cannot exceed the cap no matter how many redemptions race.

use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr,
};

use crate::server::model::event::CreateDiscountCodeParams;

pub struct DiscountCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscountCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a discount code for an event. Codes are stored uppercase.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Code created
    /// - `Ok(None)` - The event already has a code with this name
    pub async fn create(
        &self,
        event_id: i32,
        param: CreateDiscountCodeParams,
    ) -> Result<Option<entity::discount_code::Model>, DbErr> {
        let insert = entity::discount_code::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            code: ActiveValue::Set(param.code.to_uppercase()),
            discount_type: ActiveValue::Set(param.discount_type.as_str().to_string()),
            discount_value: ActiveValue::Set(param.discount_value),
            max_uses: ActiveValue::Set(param.max_uses),
            times_used: ActiveValue::Set(0),
            valid_until: ActiveValue::Set(param.valid_until),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match insert {
            Ok(model) => Ok(Some(model)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Looks up a code by its (case-insensitive) name.
    pub async fn find(
        &self,
        event_id: i32,
        code: &str,
    ) -> Result<Option<entity::discount_code::Model>, DbErr> {
        entity::prelude::DiscountCode::find()
            .filter(entity::discount_code::Column::EventId.eq(event_id))
            .filter(entity::discount_code::Column::Code.eq(code.to_uppercase()))
            .one(self.db)
            .await
    }

    /// Redeems a code: increments `times_used` if and only if the code is
    /// still under its usage cap and not expired.
    ///
    /// # Returns
    /// - `Ok(true)` - This call took one use
    /// - `Ok(false)` - Cap reached, code expired, or code unknown
    pub async fn redeem(&self, event_id: i32, code: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscountCode::update_many()
            .filter(entity::discount_code::Column::EventId.eq(event_id))
            .filter(entity::discount_code::Column::Code.eq(code.to_uppercase()))
            .filter(
                Condition::any()
                    .add(entity::discount_code::Column::MaxUses.is_null())
                    .add(
                        Expr::col(entity::discount_code::Column::TimesUsed)
                            .lt(Expr::col(entity::discount_code::Column::MaxUses)),
                    ),
            )
            .filter(
                Condition::any()
                    .add(entity::discount_code::Column::ValidUntil.is_null())
                    .add(entity::discount_code::Column::ValidUntil.gte(Utc::now())),
            )
            .col_expr(
                entity::discount_code::Column::TimesUsed,
                Expr::col(entity::discount_code::Column::TimesUsed).add(1),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
