use async_trait::async_trait;
use serde::Serialize;

use crate::server::{config::Config, error::AppError, outbound::Delivery};

/// SMS delivery collaborator.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Sends a one-time verification code to a phone number.
    async fn send_otp_sms(&self, phone: &str, code: &str) -> Result<Delivery, AppError>;
}

#[derive(Serialize)]
struct SendSmsBody<'a> {
    sender: &'a str,
    to: &'a str,
    message: &'a str,
}

/// SMS sender backed by a JSON SMS API; degrades when unconfigured.
pub struct HttpSmsSender {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    sender_id: Option<String>,
}

impl HttpSmsSender {
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.sms_api_url.clone(),
            api_key: config.sms_api_key.clone(),
            sender_id: config.sms_sender_id.clone(),
        }
    }
}

#[async_trait]
impl SmsSender for HttpSmsSender {
    async fn send_otp_sms(&self, phone: &str, code: &str) -> Result<Delivery, AppError> {
        let (Some(api_url), Some(api_key), Some(sender)) =
            (&self.api_url, &self.api_key, &self.sender_id)
        else {
            return Ok(Delivery::Degraded(
                "SMS delivery is not configured".to_string(),
            ));
        };

        let message = format!("Your verification code is {code}");
        let body = SendSmsBody {
            sender,
            to: phone,
            message: &message,
        };

        let response = self
            .client
            .post(api_url)
            .header("api-key", api_key)
            .json(&body)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => Ok(Delivery::Delivered),
            Ok(response) => Ok(Delivery::Degraded(format!(
                "SMS provider returned {}",
                response.status()
            ))),
            Err(e) => Ok(Delivery::Degraded(format!("SMS provider unreachable: {e}"))),
        }
    }
}
