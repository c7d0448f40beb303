use super::*;

/// Tests that the update writes only provided fields.
///
/// Expected: name changed, other fields intact, updated_at bumped
#[tokio::test]
async fn patches_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let channel = factory::channel::create_channel(db, creator.id).await?;
    let event = factory::event::EventFactory::new(db, channel.id)
        .name("Original")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(
            event.id,
            UpdateEventParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.event_date, event.event_date);
    assert_eq!(updated.currency, event.currency);
    assert!(updated.updated_at >= event.updated_at);

    Ok(())
}

/// Tests updating a missing event.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let updated = repo.update(999, UpdateEventParams::default()).await?;

    assert!(updated.is_none());

    Ok(())
}
