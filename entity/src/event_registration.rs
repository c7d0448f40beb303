use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A user's registration (ticket) for an event.
///
/// The unique (event_id, user_id) index is the at-most-one-registration
/// invariant; inserting a duplicate pair surfaces as a unique-constraint
/// violation which the repository maps to "already registered".
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event_registrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub event_id: i32,
    pub user_id: i32,

    #[sea_orm(unique)]
    pub ticket_code: String,

    /// Payment state (`pending`, `paid`, `not_required`).
    pub payment_status: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub payment_amount: Option<Decimal>,

    pub registered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
