use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A ticket as shown in the user's ticket list: the registration plus the
/// event it admits to.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub event_id: i32,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub ticket_code: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketListDto {
    pub tickets: Vec<TicketDto>,
}
