use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Compact user representation embedded in other responses.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserSummaryDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub name: String,
    pub profile_image_url: Option<String>,
}

impl UserSummaryDto {
    pub fn from_entity(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            name: user.name,
            profile_image_url: user.profile_image_url,
        }
    }
}
