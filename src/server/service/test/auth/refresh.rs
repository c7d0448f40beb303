use super::*;

/// Refresh rotates: the old token is revoked, the new pair works.
#[tokio::test]
async fn refresh_rotates_token() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    factory::user::UserFactory::new(db)
        .email("a@b.com")
        .password_hash(password::hash_password("pw123abc"))
        .build()
        .await
        .unwrap();

    let login = service.login("a@b.com", "pw123abc").await.unwrap();

    let refreshed = service.refresh(&login.refresh_token).await.unwrap();
    assert_ne!(refreshed.refresh_token, login.refresh_token);

    // The presented token is now revoked and cannot be replayed.
    match service.refresh(&login.refresh_token).await {
        Err(AppError::AuthErr(AuthError::RefreshTokenInvalid)) => {}
        other => panic!("expected RefreshTokenInvalid, got {other:?}"),
    }

    // The rotated token still works.
    service.refresh(&refreshed.refresh_token).await.unwrap();
}

/// Tokens that never hit the database, or the wrong token type, are
/// rejected.
#[tokio::test]
async fn refresh_requires_known_refresh_token() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    factory::user::UserFactory::new(db)
        .email("a@b.com")
        .password_hash(password::hash_password("pw123abc"))
        .build()
        .await
        .unwrap();

    let login = service.login("a@b.com", "pw123abc").await.unwrap();

    // An access token is not a refresh token.
    assert!(service.refresh(&login.token).await.is_err());
    // Garbage is rejected outright.
    assert!(service.refresh("not-a-jwt").await.is_err());
}

/// Logout revokes every outstanding refresh token.
#[tokio::test]
async fn logout_revokes_outstanding_tokens() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let user = factory::user::UserFactory::new(db)
        .email("a@b.com")
        .password_hash(password::hash_password("pw123abc"))
        .build()
        .await
        .unwrap();

    let first = service.login("a@b.com", "pw123abc").await.unwrap();
    let second = service.login("a@b.com", "pw123abc").await.unwrap();

    service.logout(user.id).await.unwrap();

    assert!(service.refresh(&first.refresh_token).await.is_err());
    assert!(service.refresh(&second.refresh_token).await.is_err());
}
