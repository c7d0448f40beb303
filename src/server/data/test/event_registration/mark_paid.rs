use super::*;

use rust_decimal::Decimal;

/// Tests marking a registration paid with the charged amount.
///
/// Expected: payment_status `paid` and payment_amount set
#[tokio::test]
async fn marks_registration_paid() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, event) = event_fixture(db).await?;
    let registration =
        factory::event_registration::create_registration(db, event.id, user.id, "pending").await?;

    let repo = EventRegistrationRepository::new(db);
    repo.mark_paid(registration.id, Decimal::new(1500, 2)).await?;

    let reloaded = repo.find(event.id, user.id).await?.unwrap();
    assert_eq!(reloaded.payment_status, "paid");
    assert_eq!(reloaded.payment_amount, Some(Decimal::new(1500, 2)));

    Ok(())
}
