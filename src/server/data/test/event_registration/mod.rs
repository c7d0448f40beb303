use crate::server::data::event_registration::EventRegistrationRepository;
use crate::server::model::event::PaymentStatus;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod mark_paid;

/// Creates a user, a channel they own, and a free event on it.
async fn event_fixture(
    db: &sea_orm::DatabaseConnection,
) -> Result<(entity::user::Model, entity::event::Model), DbErr> {
    let user = factory::user::create_user(db).await?;
    let channel = factory::channel::create_channel(db, user.id).await?;
    let event = factory::event::create_event(db, channel.id).await?;
    Ok((user, event))
}
