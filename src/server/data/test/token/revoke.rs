use super::*;

/// Tests revoking every outstanding token of a user.
///
/// Tokens of other users are untouched; already-revoked tokens are not
/// counted again.
///
/// Expected: count of freshly revoked tokens, other user's token still active
#[tokio::test]
async fn revokes_all_for_user_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let repo = RefreshTokenRepository::new(db);
    let expiry = chrono::Utc::now() + chrono::Duration::days(7);

    repo.insert(user.id, "token-1", expiry).await?;
    repo.insert(user.id, "token-2", expiry).await?;
    repo.insert(other.id, "token-3", expiry).await?;

    let revoked = repo.revoke_all_for_user(user.id).await?;
    assert_eq!(revoked, 2);

    assert!(repo.find_active("token-1", user.id).await?.is_none());
    assert!(repo.find_active("token-2", user.id).await?.is_none());
    assert!(repo.find_active("token-3", other.id).await?.is_some());

    // Nothing left to revoke.
    assert_eq!(repo.revoke_all_for_user(user.id).await?, 0);

    Ok(())
}
