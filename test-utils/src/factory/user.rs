//! User factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("alice@example.com")
///     .username("alice")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    username: String,
    password_hash: String,
    name: String,
    phone: Option<String>,
    is_active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a factory with unique email/username defaults and an inert
    /// password hash. Override `password_hash` for tests that need to log in
    /// with a real password.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{id}@example.com"),
            username: format!("user{id}"),
            password_hash: "unset".to_string(),
            name: format!("User {id}"),
            phone: None,
            is_active: true,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            profile_image_url: ActiveValue::Set(None),
            role: ActiveValue::Set("user".to_string()),
            is_verified: ActiveValue::Set(true),
            is_active: ActiveValue::Set(self.is_active),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
