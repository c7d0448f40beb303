//! Application state shared across all request handlers.
//!
//! `AppState` holds the resources every request handler may need: the database
//! connection pool, the outbound HTTP client, the outbound collaborator
//! clients built from configuration, and the configuration itself. The state
//! is initialized once during startup and cloned cheaply per request through
//! Axum's state extraction (every field is a pool, an `Arc`, or wraps one).

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    outbound::{
        email::{HttpMailer, Mailer},
        payment::{HttpPaymentGateway, PaymentGateway},
        sms::{HttpSmsSender, SmsSender},
    },
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound API requests. Configured without redirects to
    /// prevent SSRF against the providers.
    pub http_client: reqwest::Client,

    /// Email delivery collaborator (OTP, welcome, password reset mail).
    pub mailer: Arc<dyn Mailer>,

    /// SMS delivery collaborator (OTP by phone).
    pub sms: Arc<dyn SmsSender>,

    /// Hosted payment processor collaborator.
    pub payments: Arc<dyn PaymentGateway>,

    /// Application configuration, injected rather than read from a global.
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the application state from its startup dependencies, wiring the
    /// outbound collaborators from configuration.
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: Config) -> Self {
        let config = Arc::new(config);

        let mailer = Arc::new(HttpMailer::from_config(http_client.clone(), &config));
        let sms = Arc::new(HttpSmsSender::from_config(http_client.clone(), &config));
        let payments = Arc::new(HttpPaymentGateway::from_config(
            http_client.clone(),
            &config,
        ));

        Self {
            db,
            http_client,
            mailer,
            sms,
            payments,
            config,
        }
    }
}
