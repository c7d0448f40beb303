use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One-time verification code delivered by email or SMS.
///
/// Several outstanding codes per email are allowed; validation matches on the
/// exact code plus unused + unexpired. Consumption is a conditional update on
/// `is_used`, which is what makes the code single-use.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "otp_codes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub email: String,
    pub code: String,

    /// Delivery method (`email`, `sms`).
    pub method: String,
    /// What the code authorizes (`register`, `login`, `password_reset`).
    pub purpose: String,

    pub is_used: bool,

    pub expires_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub used_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
