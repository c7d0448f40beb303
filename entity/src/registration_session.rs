use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ephemeral signup-in-progress record.
///
/// `state` is a string-backed state machine (`started` → `email_verified` →
/// `completed`); transitions happen through compare-and-swap updates keyed on
/// the current state, so a session can never move backward. Expired sessions
/// are abandoned rather than purged.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub registration_id: String,

    pub email: String,
    pub password_hash: String,

    pub state: String,

    pub expires_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
