//! Discount code factory.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct DiscountCodeFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    code: String,
    discount_type: String,
    discount_value: Decimal,
    max_uses: Option<i32>,
    times_used: i32,
    valid_until: Option<DateTime<Utc>>,
}

impl<'a> DiscountCodeFactory<'a> {
    /// Defaults to an uncapped, unexpired 10% code named `SAVE10`.
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        Self {
            db,
            event_id,
            code: "SAVE10".to_string(),
            discount_type: "percentage".to_string(),
            discount_value: Decimal::TEN,
            max_uses: None,
            times_used: 0,
            valid_until: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn fixed(mut self, value: Decimal) -> Self {
        self.discount_type = "fixed".to_string();
        self.discount_value = value;
        self
    }

    pub fn percentage(mut self, value: Decimal) -> Self {
        self.discount_type = "percentage".to_string();
        self.discount_value = value;
        self
    }

    pub fn max_uses(mut self, max_uses: i32) -> Self {
        self.max_uses = Some(max_uses);
        self
    }

    pub fn times_used(mut self, times_used: i32) -> Self {
        self.times_used = times_used;
        self
    }

    pub fn valid_until(mut self, valid_until: DateTime<Utc>) -> Self {
        self.valid_until = Some(valid_until);
        self
    }

    pub async fn build(self) -> Result<entity::discount_code::Model, DbErr> {
        entity::discount_code::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            code: ActiveValue::Set(self.code),
            discount_type: ActiveValue::Set(self.discount_type),
            discount_value: ActiveValue::Set(self.discount_value),
            max_uses: ActiveValue::Set(self.max_uses),
            times_used: ActiveValue::Set(self.times_used),
            valid_until: ActiveValue::Set(self.valid_until),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
