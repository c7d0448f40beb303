//! Organization membership repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};

pub struct OrganizationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user belongs to an organization.
    pub async fn is_member(&self, user_id: i32, organization_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserOrganization::find()
            .filter(entity::user_organization::Column::UserId.eq(user_id))
            .filter(entity::user_organization::Column::OrganizationId.eq(organization_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a user to an organization.
    ///
    /// The unique (user, organization) index carries the duplicate check: a
    /// violation means the membership already exists and maps to `None`, so
    /// there is no check-then-insert window.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Membership created
    /// - `Ok(None)` - User was already a member
    /// - `Err(DbErr)` - Other database error
    pub async fn add_member(
        &self,
        user_id: i32,
        organization_id: i32,
    ) -> Result<Option<entity::user_organization::Model>, DbErr> {
        let insert = entity::user_organization::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            organization_id: ActiveValue::Set(organization_id),
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
}
