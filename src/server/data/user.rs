//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Parameters for creating a user account at registration completion.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub name: String,
}

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user from a completed registration session.
    ///
    /// The account starts verified (email ownership was proven during
    /// registration), active, and with the default role.
    ///
    /// # Arguments
    /// - `param` - Identity and credentials carried over from the session
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on
    ///   email/username
    pub async fn create(&self, param: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            username: ActiveValue::Set(param.username),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            phone: ActiveValue::Set(None),
            profile_image_url: ActiveValue::Set(None),
            role: ActiveValue::Set("user".to_string()),
            is_verified: ActiveValue::Set(true),
            is_active: ActiveValue::Set(true),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether an email is already taken by an existing account.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a username is already taken by an existing account.
    pub async fn username_exists(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Stamps the user's last successful login.
    pub async fn update_last_login(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::LastLogin,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the user's password hash.
    pub async fn update_password(&self, user_id: i32, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
