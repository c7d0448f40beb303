use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Generic acknowledgement body for operations without a richer payload.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AckDto {
    pub success: bool,
    pub message: String,
}

impl AckDto {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
