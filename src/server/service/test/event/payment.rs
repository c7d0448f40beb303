use super::*;

/// The full payment-intent path: provider intent created, pending
/// transaction recorded with the provider id, amount equal to the price.
#[tokio::test]
async fn creates_intent_and_pending_transaction() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (_, channel, attendee) = channel_fixture(db).await.unwrap();
    let event = factory::event::EventFactory::new(db, channel.id)
        .paid(Decimal::new(2000, 2))
        .build()
        .await
        .unwrap();
    service.register_for_event(event.id, attendee.id).await.unwrap();

    let intent = service
        .create_payment_intent(event.id, attendee.id, None)
        .await
        .unwrap();

    assert_eq!(intent.amount, Decimal::new(2000, 2));
    assert_eq!(intent.currency, "EUR");
    assert!(!intent.client_secret.is_empty());

    let transaction = entity::prelude::EventTransaction::find()
        .filter(entity::event_transaction::Column::EventId.eq(event.id))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(transaction.status, "pending");
    assert_eq!(transaction.amount, Decimal::new(2000, 2));
    assert!(transaction.provider_intent_id.is_some());
}

/// Payment intents demand a paid event and a prior registration.
#[tokio::test]
async fn requires_paid_event_and_registration() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (_, channel, attendee) = channel_fixture(db).await.unwrap();

    let free = factory::event::create_event(db, channel.id).await.unwrap();
    assert_bad_request(service.create_payment_intent(free.id, attendee.id, None).await);

    let paid = factory::event::EventFactory::new(db, channel.id)
        .paid(Decimal::TEN)
        .build()
        .await
        .unwrap();
    assert_bad_request(service.create_payment_intent(paid.id, attendee.id, None).await);
}

/// A discount code reduces the charged amount and is redeemed exactly once.
#[tokio::test]
async fn applies_discount_to_intent() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (_, channel, attendee) = channel_fixture(db).await.unwrap();
    let event = factory::event::EventFactory::new(db, channel.id)
        .paid(Decimal::new(2000, 2))
        .build()
        .await
        .unwrap();
    factory::discount_code::DiscountCodeFactory::new(db, event.id)
        .code("QUARTER")
        .percentage(Decimal::new(2500, 2))
        .build()
        .await
        .unwrap();
    service.register_for_event(event.id, attendee.id).await.unwrap();

    let intent = service
        .create_payment_intent(event.id, attendee.id, Some("quarter"))
        .await
        .unwrap();

    assert_eq!(intent.amount, Decimal::new(1500, 2));

    let discount = entity::prelude::DiscountCode::find()
        .filter(entity::discount_code::Column::EventId.eq(event.id))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(discount.times_used, 1);
}

/// If the provider declines, no local transaction row is written.
#[tokio::test]
async fn provider_failure_leaves_no_transaction() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::failing_payments();
    let service = env.service(db);

    let (_, channel, attendee) = channel_fixture(db).await.unwrap();
    let event = factory::event::EventFactory::new(db, channel.id)
        .paid(Decimal::TEN)
        .build()
        .await
        .unwrap();
    service.register_for_event(event.id, attendee.id).await.unwrap();

    let result = service.create_payment_intent(event.id, attendee.id, None).await;
    assert!(matches!(result, Err(AppError::InternalError(_))));

    let transactions = entity::prelude::EventTransaction::find()
        .all(db)
        .await
        .unwrap();
    assert!(transactions.is_empty());
}

/// Confirming a provider intent completes the transaction and marks the
/// registration paid with the charged amount.
#[tokio::test]
async fn confirm_marks_registration_paid() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (_, channel, attendee) = channel_fixture(db).await.unwrap();
    let event = factory::event::EventFactory::new(db, channel.id)
        .paid(Decimal::new(2000, 2))
        .build()
        .await
        .unwrap();
    service.register_for_event(event.id, attendee.id).await.unwrap();
    service
        .create_payment_intent(event.id, attendee.id, None)
        .await
        .unwrap();

    let transaction = entity::prelude::EventTransaction::find()
        .one(db)
        .await
        .unwrap()
        .unwrap();
    let intent_id = transaction.provider_intent_id.clone().unwrap();

    service.confirm_payment(&intent_id).await.unwrap();

    let completed = entity::prelude::EventTransaction::find_by_id(transaction.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, "completed");

    let registration = entity::prelude::EventRegistration::find()
        .filter(entity::event_registration::Column::EventId.eq(event.id))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(registration.payment_status, "paid");
    assert_eq!(registration.payment_amount, Some(Decimal::new(2000, 2)));

    assert_not_found(service.confirm_payment("pi_unknown").await);
}
