use super::*;

/// Tests creating and listing alerts, newest first.
///
/// Expected: both alerts listed with the later one leading
#[tokio::test]
async fn lists_alerts_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let channel = factory::channel::create_channel(db, creator.id).await?;
    let event = factory::event::create_event(db, channel.id).await?;

    let repo = EventRepository::new(db);

    repo.create_alert(event.id, "First", "First message", creator.id)
        .await?;
    repo.create_alert(event.id, "Second", "Second message", creator.id)
        .await?;

    let (alerts, total) = repo.get_alerts(event.id, 1, 20).await?;

    assert_eq!(total, 2);
    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].created_at >= alerts[1].created_at);

    Ok(())
}
