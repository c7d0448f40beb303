use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

/// Compact channel representation embedded in event responses.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ChannelSummaryDto {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub channel_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub max_attendees: Option<i32>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub requires_payment: bool,
    pub price: Option<Decimal>,
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Number of registrations for this event.
    pub registered_count: u64,
    /// Whether the requesting user is registered.
    pub is_registered: bool,
    /// Whether the requesting user has paid.
    pub has_paid: bool,
    pub channel: Option<ChannelSummaryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventListDto {
    pub events: Vec<EventDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_more: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventRequest {
    pub channel_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub max_attendees: Option<i32>,
    pub registration_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub requires_payment: bool,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub max_attendees: Option<i32>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub requires_payment: Option<bool>,
    pub price: Option<Decimal>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventDeleteDto {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventRegistrationDto {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub ticket_code: String,
    pub registered_at: DateTime<Utc>,
    pub payment_status: String,
    pub payment_amount: Option<Decimal>,
    pub user: Option<UserSummaryDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegistrationActionDto {
    pub success: bool,
    pub message: String,
    pub registration: Option<EventRegistrationDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RegistrationListDto {
    pub registrations: Vec<EventRegistrationDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_more: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreatePaymentIntentRequest {
    pub discount_code: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ConfirmPaymentRequest {
    pub provider_intent_id: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaymentIntentDto {
    pub client_secret: String,
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDiscountCodeRequest {
    pub code: String,
    /// `percentage` or `fixed`.
    pub discount_type: String,
    pub discount_value: Decimal,
    pub max_uses: Option<i32>,
    pub valid_until: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DiscountCodeDto {
    pub id: i32,
    pub event_id: i32,
    pub code: String,
    pub discount_type: String,
    pub discount_value: Decimal,
    pub max_uses: Option<i32>,
    pub times_used: i32,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ApplyDiscountRequest {
    pub code: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ApplyDiscountDto {
    pub success: bool,
    pub message: String,
    pub original_price: Decimal,
    pub discount_amount: Decimal,
    pub final_price: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateEventAlertRequest {
    pub title: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventAlertDto {
    pub id: i32,
    pub event_id: i32,
    pub title: String,
    pub message: String,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
    pub sent_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventAlertListDto {
    pub alerts: Vec<EventAlertDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_more: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EventStatsDto {
    pub registered_count: u64,
    pub paid_count: u64,
    pub pending_payment_count: u64,
    pub total_revenue: Decimal,
    pub available_spots: Option<i64>,
}

/// Query parameters of the event feed.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct EventFeedQuery {
    pub channel_id: Option<i32>,
    pub upcoming_only: Option<bool>,
    pub registered_only: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}
