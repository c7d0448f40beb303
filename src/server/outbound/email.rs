use async_trait::async_trait;
use serde::Serialize;

use crate::server::{config::Config, error::AppError, outbound::Delivery};

/// Email delivery collaborator.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a one-time verification code.
    async fn send_otp_email(&self, to: &str, code: &str, context: &str)
        -> Result<Delivery, AppError>;

    /// Sends the post-registration welcome mail.
    async fn send_welcome_email(&self, to: &str, username: &str) -> Result<Delivery, AppError>;

    /// Sends a password reset code.
    async fn send_password_reset_email(&self, to: &str, code: &str) -> Result<Delivery, AppError>;
}

#[derive(Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Mailer backed by a JSON email API.
///
/// When the provider is not configured every send degrades instead of
/// erroring, so auth flows keep working in development environments.
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: Option<String>,
    api_key: Option<String>,
    from_address: Option<String>,
}

impl HttpMailer {
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.email_api_url.clone(),
            api_key: config.email_api_key.clone(),
            from_address: config.email_from_address.clone(),
        }
    }

    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<Delivery, AppError> {
        let (Some(api_url), Some(api_key), Some(from)) =
            (&self.api_url, &self.api_key, &self.from_address)
        else {
            return Ok(Delivery::Degraded(
                "email delivery is not configured".to_string(),
            ));
        };

        let body = SendEmailBody {
            from,
            to,
            subject,
            text,
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
                "email provider returned {}",
                response.status()
            ))),
            Err(e) => Ok(Delivery::Degraded(format!("email provider unreachable: {e}"))),
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send_otp_email(
        &self,
        to: &str,
        code: &str,
        context: &str,
    ) -> Result<Delivery, AppError> {
        self.send(
            to,
            &format!("Your verification code for {context}"),
            &format!("Your verification code is {code}. It expires shortly."),
        )
        .await
    }

    async fn send_welcome_email(&self, to: &str, username: &str) -> Result<Delivery, AppError> {
        self.send(
            to,
            "Welcome!",
            &format!("Hi {username}, your account is ready."),
        )
        .await
    }

    async fn send_password_reset_email(&self, to: &str, code: &str) -> Result<Delivery, AppError> {
        self.send(
            to,
            "Password reset code",
            &format!("Use code {code} to reset your password. It expires shortly."),
        )
        .await
    }
}
