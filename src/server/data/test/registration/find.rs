use super::*;

/// Tests that `find_incomplete` excludes completed sessions.
///
/// Expected: Some before completion, None after
#[tokio::test]
async fn find_incomplete_excludes_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let started = factory::registration_session::RegistrationSessionFactory::new(db)
        .build()
        .await?;
    let completed = factory::registration_session::RegistrationSessionFactory::new(db)
        .state("completed")
        .build()
        .await?;

    let repo = RegistrationSessionRepository::new(db);

    assert!(repo
        .find_incomplete(&started.registration_id)
        .await?
        .is_some());
    assert!(repo
        .find_incomplete(&completed.registration_id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that `find_in_state` matches only the exact state.
///
/// Expected: Some for the matching state, None otherwise
#[tokio::test]
async fn find_in_state_matches_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let session = factory::registration_session::RegistrationSessionFactory::new(db)
        .state("email_verified")
        .build()
        .await?;

    let repo = RegistrationSessionRepository::new(db);

    assert!(repo
        .find_in_state(&session.registration_id, RegistrationState::EmailVerified)
        .await?
        .is_some());
    assert!(repo
        .find_in_state(&session.registration_id, RegistrationState::Started)
        .await?
        .is_none());

    Ok(())
}
