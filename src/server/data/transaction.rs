//! Event transaction repository.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::event::TransactionStatus;

pub struct EventTransactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventTransactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pending transaction for a payment intent just created with
    /// the provider.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
        registration_id: i32,
        amount: Decimal,
        currency: &str,
        payment_method: &str,
        provider_intent_id: Option<&str>,
    ) -> Result<entity::event_transaction::Model, DbErr> {
        entity::event_transaction::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            registration_id: ActiveValue::Set(registration_id),
            amount: ActiveValue::Set(amount),
            currency: ActiveValue::Set(currency.to_string()),
            payment_method: ActiveValue::Set(payment_method.to_string()),
            provider_intent_id: ActiveValue::Set(provider_intent_id.map(|s| s.to_string())),
            status: ActiveValue::Set(TransactionStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_intent(
        &self,
        provider_intent_id: &str,
    ) -> Result<Option<entity::event_transaction::Model>, DbErr> {
        entity::prelude::EventTransaction::find()
            .filter(entity::event_transaction::Column::ProviderIntentId.eq(provider_intent_id))
            .one(self.db)
            .await
    }

    /// Sets a transaction's status.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated transaction
    /// - `Ok(None)` - No transaction with that id
    pub async fn update_status(
        &self,
        transaction_id: i32,
        status: TransactionStatus,
    ) -> Result<Option<entity::event_transaction::Model>, DbErr> {
        let Some(transaction) = entity::prelude::EventTransaction::find_by_id(transaction_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::event_transaction::ActiveModel = transaction.into();
        active.status = ActiveValue::Set(status.as_str().to_string());

        Ok(Some(active.update(self.db).await?))
    }

    /// Total revenue of an event: the sum of its completed transactions.
    pub async fn total_revenue(&self, event_id: i32) -> Result<Decimal, DbErr> {
        let transactions = entity::prelude::EventTransaction::find()
            .filter(entity::event_transaction::Column::EventId.eq(event_id))
            .filter(
                entity::event_transaction::Column::Status
                    .eq(TransactionStatus::Completed.as_str()),
            )
            .all(self.db)
            .await?;

        Ok(transactions.into_iter().map(|t| t.amount).sum())
    }
}
