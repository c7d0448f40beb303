//! Registration session repository.
//!
//! Sessions move through the [`RegistrationState`] machine exclusively via
//! [`RegistrationSessionRepository::advance`], a compare-and-swap on the
//! current state. There is no other write path for the `state` column, which
//! is what keeps transitions forward-only under concurrent requests.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::auth::RegistrationState;

pub struct RegistrationSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a session in the `started` state.
    ///
    /// # Arguments
    /// - `registration_id` - Generated opaque id handed back to the client
    /// - `email` - Address being registered
    /// - `password_hash` - Already-hashed password, carried into the user row
    ///   at completion
    /// - `expires_at` - Hard expiry after which the session is dead
    pub async fn create(
        &self,
        registration_id: &str,
        email: &str,
        password_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::registration_session::Model, DbErr> {
        entity::registration_session::ActiveModel {
            registration_id: ActiveValue::Set(registration_id.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            state: ActiveValue::Set(RegistrationState::Started.as_str().to_string()),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_registration_id(
        &self,
        registration_id: &str,
    ) -> Result<Option<entity::registration_session::Model>, DbErr> {
        entity::prelude::RegistrationSession::find()
            .filter(entity::registration_session::Column::RegistrationId.eq(registration_id))
            .one(self.db)
            .await
    }

    /// Looks up a session that has not completed yet, regardless of whether
    /// its email is verified.
    pub async fn find_incomplete(
        &self,
        registration_id: &str,
    ) -> Result<Option<entity::registration_session::Model>, DbErr> {
        entity::prelude::RegistrationSession::find()
            .filter(entity::registration_session::Column::RegistrationId.eq(registration_id))
            .filter(
                entity::registration_session::Column::State
                    .ne(RegistrationState::Completed.as_str()),
            )
            .one(self.db)
            .await
    }

    /// Looks up a session currently in the given state.
    pub async fn find_in_state(
        &self,
        registration_id: &str,
        state: RegistrationState,
    ) -> Result<Option<entity::registration_session::Model>, DbErr> {
        entity::prelude::RegistrationSession::find()
            .filter(entity::registration_session::Column::RegistrationId.eq(registration_id))
            .filter(entity::registration_session::Column::State.eq(state.as_str()))
            .one(self.db)
            .await
    }

    /// Advances a session from `from` to `to`.
    ///
    /// The transition table is consulted first; a forbidden edge never touches
    /// the database. A legal edge becomes a single conditional UPDATE keyed on
    /// the current state, so two concurrent advances can succeed at most once.
    /// Completing a session also stamps `completed_at`.
    ///
    /// # Returns
    /// - `Ok(true)` - The session existed in state `from` and now is in `to`
    /// - `Ok(false)` - Forbidden transition, unknown id, or the session was
    ///   not in `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn advance(
        &self,
        registration_id: &str,
        from: RegistrationState,
        to: RegistrationState,
    ) -> Result<bool, DbErr> {
        if !from.can_transition_to(to) {
            return Ok(false);
        }

        let mut update = entity::prelude::RegistrationSession::update_many()
            .filter(entity::registration_session::Column::RegistrationId.eq(registration_id))
            .filter(entity::registration_session::Column::State.eq(from.as_str()))
            .col_expr(
                entity::registration_session::Column::State,
                sea_orm::sea_query::Expr::value(to.as_str()),
            );

        if to == RegistrationState::Completed {
            update = update.col_expr(
                entity::registration_session::Column::CompletedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
