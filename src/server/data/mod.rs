//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally; invariants that must hold under concurrency (single-use
//! OTP codes, forward-only registration state, at-most-one registration per
//! user and event, bounded discount redemption) are enforced here with
//! conditional single-statement updates and unique-index violation mapping
//! rather than check-then-act sequences.

pub mod channel;
pub mod discount;
pub mod event;
pub mod event_registration;
pub mod organization;
pub mod otp;
pub mod registration;
pub mod token;
pub mod transaction;
pub mod user;
