use super::*;

/// Tests creating an OTP code.
///
/// Expected: Ok with an unused code carrying method and purpose
#[tokio::test]
async fn creates_unused_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    let code = repo
        .create(
            "a@b.com",
            "654321",
            OtpMethod::Email,
            OtpPurpose::Register,
            chrono::Utc::now() + chrono::Duration::minutes(10),
        )
        .await?;

    assert_eq!(code.email, "a@b.com");
    assert_eq!(code.code, "654321");
    assert_eq!(code.method, "email");
    assert_eq!(code.purpose, "register");
    assert!(!code.is_used);
    assert!(code.used_at.is_none());

    Ok(())
}

/// Tests that several outstanding codes per email are allowed.
///
/// Expected: both inserts succeed
#[tokio::test]
async fn allows_multiple_outstanding_codes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OtpRepository::new(db);
    let expiry = chrono::Utc::now() + chrono::Duration::minutes(10);

    repo.create("a@b.com", "111111", OtpMethod::Email, OtpPurpose::Login, expiry)
        .await?;
    repo.create("a@b.com", "222222", OtpMethod::Email, OtpPurpose::Login, expiry)
        .await?;

    assert!(repo.find_unused("a@b.com", "111111", None).await?.is_some());
    assert!(repo.find_unused("a@b.com", "222222", None).await?.is_some());

    Ok(())
}
