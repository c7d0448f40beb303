use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use test_utils::builder::TestBuilder;
use test_utils::factory;

use crate::server::{
    config::Config,
    data::event::EventFeedFilter,
    error::AppError,
    model::event::{CreateDiscountCodeParams, CreateEventParams, DiscountType},
    outbound::testing::FakePaymentGateway,
    service::event::EventService,
};

use super::test_config;

mod create;
mod payment;
mod stats;

/// Owns the payment gateway double and configuration an [`EventService`]
/// borrows.
struct TestEnv {
    payments: FakePaymentGateway,
    config: Config,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            payments: FakePaymentGateway::default(),
            config: test_config(),
        }
    }

    fn failing_payments() -> Self {
        Self {
            payments: FakePaymentGateway {
                fail: true,
                ..Default::default()
            },
            config: test_config(),
        }
    }

    fn service<'a>(&'a self, db: &'a DatabaseConnection) -> EventService<'a> {
        EventService::new(db, &self.payments, &self.config)
    }
}

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

fn paid_event_params(name: &str, price: Decimal) -> CreateEventParams {
    CreateEventParams {
        requires_payment: true,
        price: Some(price),
        ..free_event_params(name)
    }
}

/// Creates an owner, their channel, and a second plain user.
async fn channel_fixture(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::channel::Model,
        entity::user::Model,
    ),
    AppError,
> {
    let owner = factory::user::create_user(db).await?;
    let channel = factory::channel::create_channel(db, owner.id).await?;
    let attendee = factory::user::create_user(db).await?;
    Ok((owner, channel, attendee))
}

fn assert_bad_request(result: Result<impl std::fmt::Debug, AppError>) {
    match result {
        Err(AppError::BadRequest(_)) => {}
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

fn assert_forbidden(result: Result<impl std::fmt::Debug, AppError>) {
    match result {
        Err(AppError::Forbidden(_)) => {}
        other => panic!("expected Forbidden, got {other:?}"),
    }
}

fn assert_not_found(result: Result<impl std::fmt::Debug, AppError>) {
    match result {
        Err(AppError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}
