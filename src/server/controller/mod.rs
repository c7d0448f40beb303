//! HTTP request handlers. Controllers bind request DTOs, resolve the current
//! user, delegate to services, and return response DTOs.

pub mod auth;
pub mod event;
pub mod ticket;
