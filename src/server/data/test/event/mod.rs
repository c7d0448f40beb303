use crate::server::data::event::{EventFeedFilter, EventRepository};
use crate::server::model::event::{CreateEventParams, UpdateEventParams};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod alerts;
mod create;
mod delete;
mod update;

/// A minimal create parameter set for a free event two days out.
fn free_event_params(name: &str) -> CreateEventParams {
    CreateEventParams {
        name: name.to_string(),
        description: None,
        event_date: chrono::Utc::now() + chrono::Duration::days(2),
        end_date: None,
        location: None,
        image_url: None,
        max_attendees: None,
        registration_deadline: None,
        requires_payment: false,
        price: None,
        currency: None,
    }
}
