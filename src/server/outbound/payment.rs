use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::server::{config::Config, error::AppError};

/// A payment intent created with the hosted payment processor.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    /// Provider-side identifier, persisted locally for reconciliation.
    pub id: String,
    /// Secret the client uses to complete the payment.
    pub client_secret: String,
}

/// Hosted payment processor collaborator.
///
/// Unlike the messaging collaborators there is no degraded mode: a payment
/// intent either exists at the provider or the operation fails.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        amount: Decimal,
        currency: &str,
    ) -> Result<PaymentIntent, AppError>;
}

#[derive(Deserialize)]
struct PaymentIntentResponse {
    id: String,
    client_secret: String,
}

/// Gateway speaking a Stripe-style form-encoded payment-intents API.
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    api_url: Option<String>,
    secret_key: Option<String>,
}

impl HttpPaymentGateway {
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.payment_api_url.clone(),
            secret_key: config.payment_secret_key.clone(),
        }
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_payment_intent(
        &self,
        amount: Decimal,
        currency: &str,
    ) -> Result<PaymentIntent, AppError> {
        let (Some(api_url), Some(secret_key)) = (&self.api_url, &self.secret_key) else {
            return Err(AppError::InternalError(
                "Payment provider is not configured".to_string(),
            ));
        };

        // Providers take the amount in minor units (cents).
        let minor_units = (amount * Decimal::ONE_HUNDRED)
            .round()
            .to_i64()
            .ok_or_else(|| {
                AppError::InternalError(format!("Payment amount out of range: {amount}"))
            })?;

        let response = self
            .client
            .post(format!("{api_url}/v1/payment_intents"))
            .basic_auth(secret_key, None::<&str>)
            .form(&[
                ("amount", minor_units.to_string()),
                ("currency", currency.to_lowercase()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::InternalError(format!(
                "Payment provider returned {}",
                response.status()
            )));
        }

        let intent: PaymentIntentResponse = response.json().await?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}
