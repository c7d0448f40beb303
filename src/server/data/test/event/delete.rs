use super::*;

/// Tests deleting an event.
///
/// Expected: true on first delete, false when already gone
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let channel = factory::channel::create_channel(db, creator.id).await?;
    let event = factory::event::create_event(db, channel.id).await?;

    let repo = EventRepository::new(db);

    assert!(repo.delete(event.id).await?);
    assert!(!repo.delete(event.id).await?);
    assert!(repo.find_by_id(event.id).await?.is_none());

    Ok(())
}
