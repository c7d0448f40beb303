use super::*;

/// Password login succeeds with the right password, stamps last_login, and
/// persists the refresh token.
#[tokio::test]
async fn logs_in_with_correct_password() {
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

    let response = service.login("a@b.com", "pw123abc").await.unwrap();

    assert!(response.success);
    assert_eq!(response.user.id, user.id);

    let claims = token::verify_token(
        &response.token,
        token::TOKEN_TYPE_ACCESS,
        &env.config.secret_key,
    )
    .unwrap();
    assert_eq!(claims.sub, user.id);

    let reloaded = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert!(reloaded.last_login.is_some());

    let stored = entity::prelude::RefreshToken::find()
        .filter(entity::refresh_token::Column::Token.eq(&response.refresh_token))
        .one(db)
        .await
        .unwrap();
    assert!(stored.is_some_and(|t| !t.is_revoked));
}

/// Unknown email and wrong password fail identically with 401.
#[tokio::test]
async fn rejects_bad_credentials_uniformly() {
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

    for attempt in [
        service.login("missing@b.com", "pw123abc").await,
        service.login("a@b.com", "wrong").await,
    ] {
        match attempt {
            Err(AppError::AuthErr(AuthError::InvalidCredentials)) => {}
            other => panic!("expected InvalidCredentials, got {other:?}"),
        }
    }
}

/// A deactivated account cannot log in even with the right password.
#[tokio::test]
async fn rejects_inactive_account() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    factory::user::UserFactory::new(db)
        .email("a@b.com")
        .password_hash(password::hash_password("pw123abc"))
        .inactive()
        .build()
        .await
        .unwrap();

    match service.login("a@b.com", "pw123abc").await {
        Err(AppError::AuthErr(AuthError::AccountInactive)) => {}
        other => panic!("expected AccountInactive, got {other:?}"),
    }
}
