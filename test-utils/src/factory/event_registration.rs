//! Event registration factory.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Inserts a registration directly with the given payment status
/// (`pending`, `paid`, or `not_required`).
pub async fn create_registration(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
    payment_status: &str,
) -> Result<entity::event_registration::Model, DbErr> {
    create_registration_with_amount(db, event_id, user_id, payment_status, None).await
}

/// Inserts a registration with an explicit paid amount.
pub async fn create_registration_with_amount(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
    payment_status: &str,
    payment_amount: Option<Decimal>,
) -> Result<entity::event_registration::Model, DbErr> {
    entity::event_registration::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
        ticket_code: ActiveValue::Set(format!("TKT-TEST-{}", next_id())),
        payment_status: ActiveValue::Set(payment_status.to_string()),
        payment_amount: ActiveValue::Set(payment_amount),
        registered_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
