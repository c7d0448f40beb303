use super::*;

/// Tests that redemption increments until the cap and then refuses.
///
/// The conditional increment is bounded by `max_uses`, so `times_used` can
/// never exceed the cap no matter how many redemptions are attempted.
///
/// Expected: two Ok(true), then Ok(false), times_used exactly 2
#[tokio::test]
async fn usage_never_exceeds_cap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = event_fixture(db).await?;
    factory::discount_code::DiscountCodeFactory::new(db, event.id)
        .code("LIMITED")
        .max_uses(2)
        .build()
        .await?;

    let repo = DiscountCodeRepository::new(db);

    assert!(repo.redeem(event.id, "LIMITED").await?);
    assert!(repo.redeem(event.id, "LIMITED").await?);
    assert!(!repo.redeem(event.id, "LIMITED").await?);
    assert!(!repo.redeem(event.id, "LIMITED").await?);

    let reloaded = repo.find(event.id, "LIMITED").await?.unwrap();
    assert_eq!(reloaded.times_used, 2);
    assert_eq!(reloaded.max_uses, Some(2));

    Ok(())
}

/// Tests that an uncapped code redeems freely.
///
/// Expected: every redemption succeeds and the counter tracks them
#[tokio::test]
async fn uncapped_code_redeems_freely() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = event_fixture(db).await?;
    factory::discount_code::DiscountCodeFactory::new(db, event.id)
        .code("OPEN")
        .build()
        .await?;

    let repo = DiscountCodeRepository::new(db);

    for _ in 0..3 {
        assert!(repo.redeem(event.id, "OPEN").await?);
    }

    let reloaded = repo.find(event.id, "OPEN").await?.unwrap();
    assert_eq!(reloaded.times_used, 3);

    Ok(())
}

/// Tests that an expired code does not redeem.
///
/// Expected: Ok(false), counter untouched
#[tokio::test]
async fn expired_code_does_not_redeem() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = event_fixture(db).await?;
    factory::discount_code::DiscountCodeFactory::new(db, event.id)
        .code("OLD")
        .valid_until(chrono::Utc::now() - chrono::Duration::days(1))
        .build()
        .await?;

    let repo = DiscountCodeRepository::new(db);

    assert!(!repo.redeem(event.id, "OLD").await?);

    let reloaded = repo.find(event.id, "OLD").await?.unwrap();
    assert_eq!(reloaded.times_used, 0);

    Ok(())
}
