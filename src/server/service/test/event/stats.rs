use super::*;

use crate::server::model::event::TransactionStatus;

/// Statistics aggregate registration counts, revenue, and remaining
/// capacity; only channel admins may read them.
#[tokio::test]
async fn aggregates_event_statistics() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (owner, channel, attendee) = channel_fixture(db).await.unwrap();
    let third = factory::user::create_user(db).await.unwrap();

    let event = factory::event::EventFactory::new(db, channel.id)
        .paid(Decimal::new(2000, 2))
        .max_attendees(10)
        .build()
        .await
        .unwrap();

    let paid_reg =
        factory::event_registration::create_registration(db, event.id, attendee.id, "paid")
            .await
            .unwrap();
    factory::event_registration::create_registration(db, event.id, third.id, "pending")
        .await
        .unwrap();

    // One completed transaction backs the paid registration.
    let transaction_repo = crate::server::data::transaction::EventTransactionRepository::new(db);
    let transaction = transaction_repo
        .create(
            event.id,
            attendee.id,
            paid_reg.id,
            Decimal::new(2000, 2),
            "EUR",
            "card",
            Some("pi_1"),
        )
        .await
        .unwrap();
    transaction_repo
        .update_status(transaction.id, TransactionStatus::Completed)
        .await
        .unwrap();

    let stats = service.get_event_stats(event.id, owner.id).await.unwrap();

    assert_eq!(stats.registered_count, 2);
    assert_eq!(stats.paid_count, 1);
    assert_eq!(stats.pending_payment_count, 1);
    assert_eq!(stats.total_revenue, Decimal::new(2000, 2));
    assert_eq!(stats.available_spots, Some(8));

    assert_forbidden(service.get_event_stats(event.id, attendee.id).await);
}

/// Alerts are admin-gated on create and listed newest first.
#[tokio::test]
async fn creates_and_lists_alerts() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (owner, channel, attendee) = channel_fixture(db).await.unwrap();
    let event = factory::event::create_event(db, channel.id).await.unwrap();

    assert_forbidden(
        service
            .create_event_alert(event.id, attendee.id, "Nope", "Not allowed")
            .await,
    );

    service
        .create_event_alert(event.id, owner.id, "Venue change", "New address")
        .await
        .unwrap();

    let listing = service.get_event_alerts(event.id, 1, 20).await.unwrap();
    assert_eq!(listing.total, 1);
    assert_eq!(listing.alerts[0].title, "Venue change");
    assert_eq!(listing.alerts[0].created_by, owner.id);
}
