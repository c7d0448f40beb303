use super::*;

/// Tests creating an event with the configured default currency.
///
/// Expected: Ok with fields persisted and EUR filled in
#[tokio::test]
async fn creates_event_with_default_currency() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let channel = factory::channel::create_channel(db, creator.id).await?;

    let repo = EventRepository::new(db);
    let event = repo
        .create(channel.id, free_event_params("Youth Conference"), "EUR")
        .await?;

    assert_eq!(event.channel_id, channel.id);
    assert_eq!(event.name, "Youth Conference");
    assert_eq!(event.currency, "EUR");
    assert!(!event.requires_payment);
    assert!(event.price.is_none());

    Ok(())
}

/// Tests that an explicit currency wins over the default.
///
/// Expected: Ok with the requested currency
#[tokio::test]
async fn honors_explicit_currency() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let channel = factory::channel::create_channel(db, creator.id).await?;

    let mut params = free_event_params("Retreat");
    params.currency = Some("USD".to_string());

    let event = EventRepository::new(db).create(channel.id, params, "EUR").await?;

    assert_eq!(event.currency, "USD");

    Ok(())
}
