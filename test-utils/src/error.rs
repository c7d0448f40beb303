use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failure connecting to or preparing the in-memory test database.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
