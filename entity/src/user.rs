use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Platform user account.
///
/// Created when a registration session completes; never hard-deleted in the
/// normal flow (deactivation flips `is_active`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub email: String,

    #[sea_orm(unique)]
    pub username: String,

    pub password_hash: String,

    pub name: String,
    pub phone: Option<String>,
    pub profile_image_url: Option<String>,

    /// Application role (`user`, `admin`).
    pub role: String,

    pub is_verified: bool,
    pub is_active: bool,

    pub last_login: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
