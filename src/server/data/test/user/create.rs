use super::*;

/// Tests creating a user from registration data.
///
/// Verifies the account starts verified, active, and with the default role.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user_with_registration_data() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "a@b.com".to_string(),
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            name: "Alice".to_string(),
        })
        .await?;

    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.username, "alice");
    assert_eq!(user.role, "user");
    assert!(user.is_verified);
    assert!(user.is_active);
    assert!(user.last_login.is_none());

    Ok(())
}

/// Tests that the unique email column rejects a second account with the same
/// address.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        email: "a@b.com".to_string(),
        username: "alice".to_string(),
        password_hash: "hash".to_string(),
        name: "Alice".to_string(),
    })
    .await?;

    let duplicate = repo
        .create(CreateUserParams {
            email: "a@b.com".to_string(),
            username: "other".to_string(),
            password_hash: "hash".to_string(),
            name: "Other".to_string(),
        })
        .await;

    assert!(duplicate.is_err());

    Ok(())
}
