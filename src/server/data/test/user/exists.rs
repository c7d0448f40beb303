use super::*;

/// Tests the email/username existence checks used by registration.
///
/// Expected: true only for taken values
#[tokio::test]
async fn reports_taken_identifiers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .username("taken")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_exists("taken@example.com").await?);
    assert!(!repo.email_exists("free@example.com").await?);
    assert!(repo.username_exists("taken").await?);
    assert!(!repo.username_exists("free").await?);

    Ok(())
}
