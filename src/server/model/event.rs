//! Event, payment, and discount domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Payment state of an event registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Paid event, payment outstanding.
    Pending,
    /// Payment completed.
    Paid,
    /// Free event.
    NotRequired,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::NotRequired => "not_required",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            "not_required" => Some(Self::NotRequired),
            _ => None,
        }
    }
}

/// State of a payment transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }
}

/// How a discount code reduces the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountType {
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "percentage" => Some(Self::Percentage),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }

    /// The raw reduction this discount takes off `price` (not yet clamped).
    pub fn discount_amount(self, price: Decimal, value: Decimal) -> Decimal {
        match self {
            Self::Percentage => price * value / Decimal::ONE_HUNDRED,
            Self::Fixed => value,
        }
    }
}

/// Price breakdown for a discount, clamped at zero.
///
/// This is a pure computation; quoting a discount never mutates anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountQuote {
    pub original_price: Decimal,
    pub discount_amount: Decimal,
    pub final_price: Decimal,
}

impl DiscountQuote {
    pub fn compute(price: Decimal, discount_type: DiscountType, value: Decimal) -> Self {
        let discount_amount = discount_type.discount_amount(price, value);
        let final_price = (price - discount_amount).max(Decimal::ZERO);

        Self {
            original_price: price,
            discount_amount,
            final_price,
        }
    }
}

/// Parameters for creating an event.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
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
    pub currency: Option<String>,
}

/// Partial update of an event; only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
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

/// Parameters for creating a discount code.
#[derive(Debug, Clone)]
pub struct CreateDiscountCodeParams {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub max_uses: Option<i32>,
    pub valid_until: Option<DateTime<Utc>>,
}
