//! Event registration repository.
//!
//! The at-most-one-registration-per-(event, user) invariant lives in the
//! unique index on those columns; [`EventRegistrationRepository::register`]
//! inserts unconditionally and maps the violation, so there is no window
//! between an existence check and the insert.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};
use std::collections::HashMap;

use crate::server::model::event::PaymentStatus;

pub struct EventRegistrationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRegistrationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user for an event.
    ///
    /// # Arguments
    /// - `ticket_code` - Generated ticket code stored with the registration
    /// - `payment_status` - `Pending` for paid events, `NotRequired` otherwise
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Registration created
    /// - `Ok(None)` - A registration for this (event, user) already exists
    /// - `Err(DbErr)` - Other database error
    pub async fn register(
        &self,
        event_id: i32,
        user_id: i32,
        ticket_code: &str,
        payment_status: PaymentStatus,
    ) -> Result<Option<entity::event_registration::Model>, DbErr> {
        let insert = entity::event_registration::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            ticket_code: ActiveValue::Set(ticket_code.to_string()),
            payment_status: ActiveValue::Set(payment_status.as_str().to_string()),
            payment_amount: ActiveValue::Set(None),
            registered_at: ActiveValue::Set(Utc::now()),
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

    /// Cancels a user's registration.
    ///
    /// # Returns
    /// - `Ok(true)` - Registration deleted
    /// - `Ok(false)` - The user was not registered
    pub async fn cancel(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::EventRegistration::delete_many()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .filter(entity::event_registration::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::event_registration::Model>, DbErr> {
        entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .filter(entity::event_registration::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn is_registered(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        Ok(self.find(event_id, user_id).await?.is_some())
    }

    /// Pages through an event's registrations, newest first, with the
    /// registrant row attached where it still exists.
    pub async fn list_for_event(
        &self,
        event_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<
        (
            Vec<(
                entity::event_registration::Model,
                Option<entity::user::Model>,
            )>,
            u64,
        ),
        DbErr,
    > {
        let paginator = entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .order_by_desc(entity::event_registration::Column::RegisteredAt)
            .paginate(self.db, page_size.max(1));

        let total = paginator.num_items().await?;
        let registrations = paginator.fetch_page(page.saturating_sub(1)).await?;

        let user_ids: Vec<i32> = registrations.iter().map(|r| r.user_id).collect();
        let mut users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let rows = registrations
            .into_iter()
            .map(|r| {
                let user = users.remove(&r.user_id);
                (r, user)
            })
            .collect();

        Ok((rows, total))
    }

    /// All of a user's registrations, newest first, paired with their events.
    pub async fn list_for_user_with_events(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::event_registration::Model,
            Option<entity::event::Model>,
        )>,
        DbErr,
    > {
        let registrations = entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::UserId.eq(user_id))
            .order_by_desc(entity::event_registration::Column::RegisteredAt)
            .all(self.db)
            .await?;

        let event_ids: Vec<i32> = registrations.iter().map(|r| r.event_id).collect();
        let events: HashMap<i32, entity::event::Model> = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(event_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        Ok(registrations
            .into_iter()
            .map(|r| {
                let event = events.get(&r.event_id).cloned();
                (r, event)
            })
            .collect())
    }

    pub async fn count_for_event(&self, event_id: i32) -> Result<u64, DbErr> {
        entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_status(
        &self,
        event_id: i32,
        status: PaymentStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::EventRegistration::find()
            .filter(entity::event_registration::Column::EventId.eq(event_id))
            .filter(entity::event_registration::Column::PaymentStatus.eq(status.as_str()))
            .count(self.db)
            .await
    }

    /// Marks a registration paid with the amount actually charged.
    pub async fn mark_paid(&self, registration_id: i32, amount: Decimal) -> Result<(), DbErr> {
        entity::prelude::EventRegistration::update_many()
            .filter(entity::event_registration::Column::Id.eq(registration_id))
            .col_expr(
                entity::event_registration::Column::PaymentStatus,
                sea_orm::sea_query::Expr::value(PaymentStatus::Paid.as_str()),
            )
            .col_expr(
                entity::event_registration::Column::PaymentAmount,
                sea_orm::sea_query::Expr::value(amount),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
