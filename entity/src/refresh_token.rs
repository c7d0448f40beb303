use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Long-lived refresh credential.
///
/// Rotation supersedes rather than deletes: the old row is flagged revoked
/// and a new row inserted, so a revoked token leaves an audit trail.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "refresh_tokens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    #[sea_orm(unique)]
    pub token: String,

    pub expires_at: DateTimeUtc,
    pub is_revoked: bool,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
