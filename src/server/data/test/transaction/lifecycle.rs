use super::*;

/// Tests creating a pending transaction and completing it.
///
/// Expected: created pending with the provider id, then completed
#[tokio::test]
async fn creates_pending_and_completes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event, registration) = registration_fixture(db).await?;
    let repo = EventTransactionRepository::new(db);

    let transaction = repo
        .create(
            event.id,
            user.id,
            registration.id,
            Decimal::new(2000, 2),
            "EUR",
            "card",
            Some("pi_123"),
        )
        .await?;

    assert_eq!(transaction.status, "pending");
    assert_eq!(transaction.provider_intent_id.as_deref(), Some("pi_123"));

    let found = repo.find_by_intent("pi_123").await?;
    assert_eq!(found.map(|t| t.id), Some(transaction.id));

    let completed = repo
        .update_status(transaction.id, TransactionStatus::Completed)
        .await?
        .unwrap();
    assert_eq!(completed.status, "completed");

    Ok(())
}
