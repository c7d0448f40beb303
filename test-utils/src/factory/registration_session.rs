//! Registration session factory.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct RegistrationSessionFactory<'a> {
    db: &'a DatabaseConnection,
    registration_id: String,
    email: String,
    password_hash: String,
    state: String,
    expires_at: DateTime<Utc>,
}

impl<'a> RegistrationSessionFactory<'a> {
    /// Defaults to a fresh `started` session expiring in a day.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            registration_id: format!("REG-TEST-{id}"),
            email: format!("pending{id}@example.com"),
            password_hash: "unset".to_string(),
            state: "started".to_string(),
            expires_at: Utc::now() + Duration::hours(24),
        }
    }

    pub fn registration_id(mut self, registration_id: impl Into<String>) -> Self {
        self.registration_id = registration_id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::registration_session::Model, DbErr> {
        entity::registration_session::ActiveModel {
            registration_id: ActiveValue::Set(self.registration_id),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            state: ActiveValue::Set(self.state),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
