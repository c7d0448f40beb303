//! Event factory.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test events. Defaults to a free event two days out
/// with no capacity limit and no registration deadline.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: i32,
    name: String,
    event_date: DateTime<Utc>,
    max_attendees: Option<i32>,
    registration_deadline: Option<DateTime<Utc>>,
    requires_payment: bool,
    price: Option<Decimal>,
    currency: String,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, channel_id: i32) -> Self {
        Self {
            db,
            channel_id,
            name: format!("Event {}", next_id()),
            event_date: Utc::now() + Duration::days(2),
            max_attendees: None,
            registration_deadline: None,
            requires_payment: false,
            price: None,
            currency: "EUR".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn event_date(mut self, event_date: DateTime<Utc>) -> Self {
        self.event_date = event_date;
        self
    }

    pub fn max_attendees(mut self, max_attendees: i32) -> Self {
        self.max_attendees = Some(max_attendees);
        self
    }

    pub fn registration_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.registration_deadline = Some(deadline);
        self
    }

    /// Makes the event paid with the given price.
    pub fn paid(mut self, price: Decimal) -> Self {
        self.requires_payment = true;
        self.price = Some(price);
        self
    }

    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            channel_id: ActiveValue::Set(self.channel_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            event_date: ActiveValue::Set(self.event_date),
            end_date: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            max_attendees: ActiveValue::Set(self.max_attendees),
            registration_deadline: ActiveValue::Set(self.registration_deadline),
            requires_payment: ActiveValue::Set(self.requires_payment),
            price: ActiveValue::Set(self.price),
            currency: ActiveValue::Set(self.currency),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a free event on a channel with defaults.
pub async fn create_event(
    db: &DatabaseConnection,
    channel_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, channel_id).build().await
}
