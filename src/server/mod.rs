//! Server-side API backend and business logic.
//!
//! The backend follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Request authentication via the `X-Access-Token` header
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, outbound collaborators)
//! - **Startup** (`startup`) - Database connection and migration
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Security** (`security`) - Password hashing, JWT issuance, OTP generation
//! - **Outbound** (`outbound`) - Email, SMS, and payment provider clients
//!
//! A typical request flows router → middleware → controller → service →
//! data → entity, with the service layer returning domain models that the
//! controller converts to DTOs.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod outbound;
pub mod router;
pub mod security;
pub mod service;
pub mod startup;
pub mod state;
