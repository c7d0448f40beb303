use super::*;

/// Sending a login OTP by email creates a code row and mails it.
#[tokio::test]
async fn sends_login_code_by_email() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    service.send_otp("a@b.com", OtpMethod::Email).await.unwrap();

    let otp = latest_otp(db, "a@b.com").await.unwrap();
    assert_eq!(otp.purpose, "login");
    assert_eq!(otp.method, "email");
    assert_eq!(env.mailer.sent_kinds(), vec!["otp"]);
}

/// SMS delivery needs a phone number on file.
#[tokio::test]
async fn sms_requires_phone_on_file() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    factory::user::UserFactory::new(db)
        .email("nophone@b.com")
        .build()
        .await
        .unwrap();
    factory::user::UserFactory::new(db)
        .email("phone@b.com")
        .phone("+34600000000")
        .build()
        .await
        .unwrap();

    assert_bad_request(service.send_otp("nophone@b.com", OtpMethod::Sms).await);

    service.send_otp("phone@b.com", OtpMethod::Sms).await.unwrap();
    assert_eq!(
        env.sms.sent.lock().unwrap().as_slice(),
        ["+34600000000".to_string()]
    );
}

/// OTP login consumes the code; the same code cannot log in twice.
#[tokio::test]
async fn code_logs_in_exactly_once() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    let user = factory::user::UserFactory::new(db)
        .email("a@b.com")
        .build()
        .await
        .unwrap();

    service.send_otp("a@b.com", OtpMethod::Email).await.unwrap();
    let otp = latest_otp(db, "a@b.com").await.unwrap();

    let response = service.verify_otp("a@b.com", &otp.code).await.unwrap();
    let claims = token::verify_token(
        &response.token,
        token::TOKEN_TYPE_ACCESS,
        &env.config.secret_key,
    )
    .unwrap();
    assert_eq!(claims.sub, user.id);

    assert_bad_request(service.verify_otp("a@b.com", &otp.code).await);
}

/// Expired codes and unknown users are rejected.
#[tokio::test]
async fn rejects_expired_code_and_unknown_user() {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let env = TestEnv::new();
    let service = env.service(db);

    factory::user::UserFactory::new(db)
        .email("a@b.com")
        .build()
        .await
        .unwrap();
    factory::otp_code::OtpCodeFactory::new(db, "a@b.com")
        .code("111111")
        .expires_at(chrono::Utc::now() - chrono::Duration::minutes(1))
        .build()
        .await
        .unwrap();

    assert_bad_request(service.verify_otp("a@b.com", "111111").await);

    // Valid code but no matching account.
    factory::otp_code::OtpCodeFactory::new(db, "ghost@b.com")
        .code("222222")
        .build()
        .await
        .unwrap();

    assert_not_found(service.verify_otp("ghost@b.com", "222222").await);
}
