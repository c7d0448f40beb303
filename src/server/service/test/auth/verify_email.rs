use super::*;

/// An expired session is rejected even with the right code.
#[tokio::test]
async fn rejects_expired_session() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let session = factory::registration_session::RegistrationSessionFactory::new(db)
        .email("a@b.com")
        .expires_at(chrono::Utc::now() - chrono::Duration::hours(1))
        .build()
        .await
        .unwrap();
    factory::otp_code::OtpCodeFactory::new(db, "a@b.com")
        .code("123456")
        .purpose("register")
        .build()
        .await
        .unwrap();

    assert_bad_request(
        service
            .register_verify_email(&session.registration_id, "123456")
            .await,
    );
}

/// An expired code is rejected even when it matches exactly.
#[tokio::test]
async fn rejects_expired_code() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let session = factory::registration_session::RegistrationSessionFactory::new(db)
        .email("a@b.com")
        .build()
        .await
        .unwrap();
    factory::otp_code::OtpCodeFactory::new(db, "a@b.com")
        .code("123456")
        .purpose("register")
        .expires_at(chrono::Utc::now() - chrono::Duration::minutes(1))
        .build()
        .await
        .unwrap();

    assert_bad_request(
        service
            .register_verify_email(&session.registration_id, "123456")
            .await,
    );
}

/// A wrong code is rejected; an unknown session is a 404.
#[tokio::test]
async fn rejects_wrong_code_and_unknown_session() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let session = factory::registration_session::RegistrationSessionFactory::new(db)
        .email("a@b.com")
        .build()
        .await
        .unwrap();

    assert_bad_request(
        service
            .register_verify_email(&session.registration_id, "000000")
            .await,
    );
    assert_not_found(service.register_verify_email("REG-UNKNOWN", "000000").await);
}

/// Completing a session whose email was never verified fails.
#[tokio::test]
async fn completion_requires_verified_email() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let started = service.register_start("a@b.com", "pw123abc").await.unwrap();

    assert_not_found(
        service
            .register_complete(&started.registration_id, "alice", "Alice")
            .await,
    );
}

/// Resending targets the session's email; unknown sessions are a 404.
#[tokio::test]
async fn resend_creates_fresh_code() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let started = service.register_start("a@b.com", "pw123abc").await.unwrap();
    let first = latest_otp(db, "a@b.com").await.unwrap();

    service
        .resend_registration_otp(&started.registration_id, OtpMethod::Email)
        .await
        .unwrap();

    let second = latest_otp(db, "a@b.com").await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(second.purpose, "register");
    assert_eq!(env.mailer.sent_kinds(), vec!["otp", "otp"]);

    // The resent code is accepted by the verify step.
    service
        .register_verify_email(&started.registration_id, &second.code)
        .await
        .unwrap();

    assert_not_found(
        service
            .resend_registration_otp("REG-UNKNOWN", OtpMethod::Email)
            .await,
    );
}
