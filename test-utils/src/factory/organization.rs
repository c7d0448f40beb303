//! Organization factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an organization with a unique name.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::organization::Model, DbErr> {
    entity::organization::ActiveModel {
        name: ActiveValue::Set(format!("Organization {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a user to an organization directly (bypassing the repository).
pub async fn add_member(
    db: &DatabaseConnection,
    user_id: i32,
    organization_id: i32,
) -> Result<entity::user_organization::Model, DbErr> {
    entity::user_organization::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        organization_id: ActiveValue::Set(organization_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
