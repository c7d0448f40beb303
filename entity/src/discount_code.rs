use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-event discount code.
///
/// Codes are stored uppercase and unique per event. `times_used` only moves
/// through a conditional increment bounded by `max_uses`, so the counter can
/// never exceed the cap even under concurrent redemption.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "discount_codes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub event_id: i32,
    pub code: String,

    /// Reduction kind (`percentage`, `fixed`).
    pub discount_type: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub discount_value: Decimal,

    pub max_uses: Option<i32>,
    pub times_used: i32,
    pub valid_until: Option<DateTimeUtc>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
