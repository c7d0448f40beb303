//! In-memory collaborator doubles for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::server::{
    error::AppError,
    outbound::{
        email::Mailer,
        payment::{PaymentGateway, PaymentIntent},
        sms::SmsSender,
        Delivery,
    },
};

/// A mail captured by [`RecordingMailer`].
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub kind: &'static str,
    pub code: Option<String>,
}

/// Mailer that records every send for later assertions.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<SentMail>>,
}

impl RecordingMailer {
    fn record(&self, to: &str, kind: &'static str, code: Option<&str>) {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            kind,
            code: code.map(|c| c.to_string()),
        });
    }

    pub fn sent_kinds(&self) -> Vec<&'static str> {
        self.sent.lock().unwrap().iter().map(|m| m.kind).collect()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_otp_email(
        &self,
        to: &str,
        code: &str,
        _context: &str,
    ) -> Result<Delivery, AppError> {
        self.record(to, "otp", Some(code));
        Ok(Delivery::Delivered)
    }

    async fn send_welcome_email(&self, to: &str, _username: &str) -> Result<Delivery, AppError> {
        self.record(to, "welcome", None);
        Ok(Delivery::Delivered)
    }

    async fn send_password_reset_email(&self, to: &str, code: &str) -> Result<Delivery, AppError> {
        self.record(to, "password_reset", Some(code));
        Ok(Delivery::Delivered)
    }
}

/// SMS sender that records recipients.
#[derive(Default)]
pub struct RecordingSmsSender {
    pub sent: Mutex<Vec<String>>,
}

#[async_trait]
impl SmsSender for RecordingSmsSender {
    async fn send_otp_sms(&self, phone: &str, _code: &str) -> Result<Delivery, AppError> {
        self.sent.lock().unwrap().push(phone.to_string());
        Ok(Delivery::Delivered)
    }
}

/// Payment gateway double; succeeds with a deterministic intent unless told
/// to fail.
#[derive(Default)]
pub struct FakePaymentGateway {
    pub fail: bool,
    pub created: Mutex<Vec<(Decimal, String)>>,
}

#[async_trait]
impl PaymentGateway for FakePaymentGateway {
    async fn create_payment_intent(
        &self,
        amount: Decimal,
        currency: &str,
    ) -> Result<PaymentIntent, AppError> {
        if self.fail {
            return Err(AppError::InternalError(
                "Payment provider returned 500".to_string(),
            ));
        }

        let mut created = self.created.lock().unwrap();
        created.push((amount, currency.to_string()));
        let n = created.len();

        Ok(PaymentIntent {
            id: format!("pi_test_{n}"),
            client_secret: format!("pi_test_{n}_secret"),
        })
    }
}
