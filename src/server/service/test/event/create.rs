use super::*;

/// The channel owner can create events; a plain user cannot.
#[tokio::test]
async fn only_admins_create_events() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (owner, channel, attendee) = channel_fixture(db).await.unwrap();

    let event = service
        .create_event(owner.id, channel.id, free_event_params("Retreat"))
        .await
        .unwrap();
    assert_eq!(event.name, "Retreat");
    assert_eq!(event.channel_id, channel.id);
    assert_eq!(event.registered_count, 0);

    assert_forbidden(
        service
            .create_event(attendee.id, channel.id, free_event_params("Nope"))
            .await,
    );
}

/// A paid event needs a positive price.
#[tokio::test]
async fn paid_event_requires_price() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (owner, channel, _) = channel_fixture(db).await.unwrap();

    let mut missing_price = free_event_params("Gala");
    missing_price.requires_payment = true;
    assert_bad_request(service.create_event(owner.id, channel.id, missing_price).await);

    let zero_price = paid_event_params("Gala", Decimal::ZERO);
    assert_bad_request(service.create_event(owner.id, channel.id, zero_price).await);

    service
        .create_event(owner.id, channel.id, paid_event_params("Gala", Decimal::TEN))
        .await
        .unwrap();
}

/// Fetching an event enriches it with the caller's registration status and
/// the channel summary.
#[tokio::test]
async fn get_event_enriches_for_caller() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (owner, channel, attendee) = channel_fixture(db).await.unwrap();
    let event = factory::event::create_event(db, channel.id).await.unwrap();
    factory::event_registration::create_registration(db, event.id, attendee.id, "paid")
        .await
        .unwrap();

    let for_attendee = service.get_event(event.id, attendee.id).await.unwrap();
    assert_eq!(for_attendee.registered_count, 1);
    assert!(for_attendee.is_registered);
    assert!(for_attendee.has_paid);
    assert_eq!(
        for_attendee.channel.as_ref().map(|c| c.id),
        Some(channel.id)
    );

    let for_owner = service.get_event(event.id, owner.id).await.unwrap();
    assert!(!for_owner.is_registered);
    assert!(!for_owner.has_paid);

    assert_not_found(service.get_event(event.id + 99, owner.id).await);
}

/// The feed service wraps the repository with enrichment and paging
/// metadata.
#[tokio::test]
async fn feed_reports_has_more() {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let (_, channel, attendee) = channel_fixture(db).await.unwrap();
    factory::channel::subscribe(db, channel.id, attendee.id).await.unwrap();
    for _ in 0..3 {
        factory::event::create_event(db, channel.id).await.unwrap();
    }

    let page = service
        .list_events(attendee.id, EventFeedFilter::default(), 1, 2)
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.events.len(), 2);
    assert!(page.has_more);

    let last = service
        .list_events(attendee.id, EventFeedFilter::default(), 2, 2)
        .await
        .unwrap();
    assert_eq!(last.events.len(), 1);
    assert!(!last.has_more);
}
