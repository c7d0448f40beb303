use super::*;

/// Tests the legal forward path through the state machine.
///
/// Expected: started → email_verified → completed, with completed_at stamped
#[tokio::test]
async fn advances_through_legal_transitions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let session = factory::registration_session::RegistrationSessionFactory::new(db)
        .build()
        .await?;

    let repo = RegistrationSessionRepository::new(db);

    assert!(
        repo.advance(
            &session.registration_id,
            RegistrationState::Started,
            RegistrationState::EmailVerified,
        )
        .await?
    );
    assert!(
        repo.advance(
            &session.registration_id,
            RegistrationState::EmailVerified,
            RegistrationState::Completed,
        )
        .await?
    );

    let reloaded = repo
        .find_by_registration_id(&session.registration_id)
        .await?
        .unwrap();
    assert_eq!(
        RegistrationState::parse(&reloaded.state),
        Some(RegistrationState::Completed)
    );
    assert!(reloaded.completed_at.is_some());

    Ok(())
}

/// Tests that forbidden edges never write.
///
/// A skip (started → completed) and every backward edge must leave the row
/// untouched.
///
/// Expected: Ok(false) for each, state unchanged
#[tokio::test]
async fn rejects_forbidden_transitions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let session = factory::registration_session::RegistrationSessionFactory::new(db)
        .state("completed")
        .build()
        .await?;

    let repo = RegistrationSessionRepository::new(db);

    assert!(
        !repo
            .advance(
                &session.registration_id,
                RegistrationState::Completed,
                RegistrationState::Started,
            )
            .await?
    );
    assert!(
        !repo
            .advance(
                &session.registration_id,
                RegistrationState::Completed,
                RegistrationState::EmailVerified,
            )
            .await?
    );
    assert!(
        !repo
            .advance(
                &session.registration_id,
                RegistrationState::Started,
                RegistrationState::Completed,
            )
            .await?
    );

    let reloaded = repo
        .find_by_registration_id(&session.registration_id)
        .await?
        .unwrap();
    assert_eq!(
        RegistrationState::parse(&reloaded.state),
        Some(RegistrationState::Completed)
    );

    Ok(())
}

/// Tests that the compare-and-swap claims a transition at most once.
///
/// A second identical advance finds the session no longer in the `from`
/// state and reports failure.
///
/// Expected: first Ok(true), second Ok(false)
#[tokio::test]
async fn claims_transition_at_most_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let session = factory::registration_session::RegistrationSessionFactory::new(db)
        .build()
        .await?;

    let repo = RegistrationSessionRepository::new(db);

    let first = repo
        .advance(
            &session.registration_id,
            RegistrationState::Started,
            RegistrationState::EmailVerified,
        )
        .await?;
    let second = repo
        .advance(
            &session.registration_id,
            RegistrationState::Started,
            RegistrationState::EmailVerified,
        )
        .await?;

    assert!(first);
    assert!(!second);

    Ok(())
}
