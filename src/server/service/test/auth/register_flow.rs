use super::*;

/// Walks the whole happy path: start → verify → complete.
///
/// Along the way: the verification code arrives by mail, verifying a second
/// time with the consumed code fails, completion yields a working token pair
/// and a user row, and the welcome mail goes out.
#[tokio::test]
async fn full_registration_flow() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let started = service
        .register_start("a@b.com", "pw123abc")
        .await
        .unwrap();
    assert!(started.registration_id.starts_with("REG-"));

    // The OTP that was "mailed" is the latest code row for the address.
    let otp = latest_otp(db, "a@b.com").await.unwrap();
    assert_eq!(env.mailer.sent_kinds(), vec!["otp"]);

    let verified = service
        .register_verify_email(&started.registration_id, &otp.code)
        .await
        .unwrap();
    assert!(verified.success);

    // The code was consumed; replaying it fails.
    assert_bad_request(
        service
            .register_verify_email(&started.registration_id, &otp.code)
            .await,
    );

    let completed = service
        .register_complete(&started.registration_id, "alice", "Alice")
        .await
        .unwrap();

    let claims = token::verify_token(
        &completed.token,
        token::TOKEN_TYPE_ACCESS,
        &env.config.secret_key,
    )
    .unwrap();

    let user = entity::prelude::User::find_by_id(claims.sub)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.username, "alice");
    assert!(user.is_verified);
    assert!(password::verify_password("pw123abc", &user.password_hash));

    assert_eq!(env.mailer.sent_kinds(), vec!["otp", "welcome"]);

    // The session ended in the completed state.
    let session = entity::prelude::RegistrationSession::find()
        .filter(
            entity::registration_session::Column::RegistrationId.eq(&started.registration_id),
        )
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        RegistrationState::parse(&session.state),
        Some(RegistrationState::Completed)
    );
    assert!(session.completed_at.is_some());
}

/// Registering an email that already belongs to a user fails up front.
#[tokio::test]
async fn rejects_taken_email() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    factory::user::UserFactory::new(db)
        .email("taken@b.com")
        .build()
        .await
        .unwrap();

    assert_bad_request(service.register_start("taken@b.com", "pw123abc").await);
    assert!(env.mailer.sent_kinds().is_empty());
}

/// A completed session cannot be completed again.
#[tokio::test]
async fn completion_is_single_shot() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let started = service.register_start("a@b.com", "pw123abc").await.unwrap();
    let otp = latest_otp(db, "a@b.com").await.unwrap();
    service
        .register_verify_email(&started.registration_id, &otp.code)
        .await
        .unwrap();
    service
        .register_complete(&started.registration_id, "alice", "Alice")
        .await
        .unwrap();

    assert_not_found(
        service
            .register_complete(&started.registration_id, "alice2", "Alice")
            .await,
    );
}

/// A taken username blocks completion but leaves the session usable.
#[tokio::test]
async fn rejects_taken_username() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    factory::user::UserFactory::new(db)
        .username("alice")
        .build()
        .await
        .unwrap();

    let started = service.register_start("a@b.com", "pw123abc").await.unwrap();
    let otp = latest_otp(db, "a@b.com").await.unwrap();
    service
        .register_verify_email(&started.registration_id, &otp.code)
        .await
        .unwrap();

    assert_bad_request(
        service
            .register_complete(&started.registration_id, "alice", "Alice")
            .await,
    );

    // Retry with a free username succeeds.
    service
        .register_complete(&started.registration_id, "alice2", "Alice")
        .await
        .unwrap();
}
