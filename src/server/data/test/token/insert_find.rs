use super::*;

/// Tests persisting and finding an active refresh token.
///
/// Expected: found for the owning user, not for another user
#[tokio::test]
async fn finds_active_token_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);

    repo.insert(
        user.id,
        "token-abc",
        chrono::Utc::now() + chrono::Duration::days(7),
    )
    .await?;

    assert!(repo.find_active("token-abc", user.id).await?.is_some());
    assert!(repo.find_active("token-abc", user.id + 1).await?.is_none());
    assert!(repo.find_active("token-xyz", user.id).await?.is_none());

    Ok(())
}

/// Tests that a revoked token is no longer active but the row survives.
///
/// Expected: find_active None after revoke
#[tokio::test]
async fn revoked_token_is_not_active() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);

    let record = repo
        .insert(
            user.id,
            "token-abc",
            chrono::Utc::now() + chrono::Duration::days(7),
        )
        .await?;

    repo.revoke(record.id).await?;

    assert!(repo.find_active("token-abc", user.id).await?.is_none());

    Ok(())
}
