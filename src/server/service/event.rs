//! Event CRUD, feed, registration, payment, discount, alert, and statistics
//! logic.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::AckDto,
        event::{
            ApplyDiscountDto, ChannelSummaryDto, DiscountCodeDto, EventAlertDto, EventAlertListDto,
            EventDeleteDto, EventDto, EventListDto, EventRegistrationDto, EventStatsDto,
            PaymentIntentDto, RegistrationActionDto, RegistrationListDto,
        },
        user::UserSummaryDto,
    },
    server::{
        config::Config,
        data::{
            channel::ChannelRepository,
            discount::DiscountCodeRepository,
            event::{EventFeedFilter, EventRepository},
            event_registration::EventRegistrationRepository,
            transaction::EventTransactionRepository,
        },
        error::AppError,
        model::event::{
            CreateDiscountCodeParams, CreateEventParams, DiscountQuote, DiscountType,
            PaymentStatus, TransactionStatus, UpdateEventParams,
        },
        outbound::payment::PaymentGateway,
        security::otp,
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    payments: &'a dyn PaymentGateway,
    config: &'a Config,
}

impl<'a> EventService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        payments: &'a dyn PaymentGateway,
        config: &'a Config,
    ) -> Self {
        Self {
            db,
            payments,
            config,
        }
    }

    /// Creates an event under a channel (channel admin only).
    pub async fn create_event(
        &self,
        user_id: i32,
        channel_id: i32,
        param: CreateEventParams,
    ) -> Result<EventDto, AppError> {
        self.require_channel_admin(user_id, channel_id, "Only channel admins can create events")
            .await?;

        if param.requires_payment && !param.price.is_some_and(|p| p > Decimal::ZERO) {
            return Err(AppError::BadRequest(
                "Price must be specified for paid events".to_string(),
            ));
        }

        let event = EventRepository::new(self.db)
            .create(channel_id, param, &self.config.default_currency)
            .await?;

        self.build_event_dto(event, user_id).await
    }

    /// Fetches a single event with per-user enrichment.
    pub async fn get_event(&self, event_id: i32, user_id: i32) -> Result<EventDto, AppError> {
        let event = self.find_event(event_id).await?;

        self.build_event_dto(event, user_id).await
    }

    /// The event feed: events from channels the user subscribes to.
    pub async fn list_events(
        &self,
        user_id: i32,
        filter: EventFeedFilter,
        page: u64,
        page_size: u64,
    ) -> Result<EventListDto, AppError> {
        let (events, total) = EventRepository::new(self.db)
            .get_from_subscribed_channels(user_id, filter, page, page_size)
            .await?;

        let mut event_dtos = Vec::with_capacity(events.len());
        for event in events {
            event_dtos.push(self.build_event_dto(event, user_id).await?);
        }

        Ok(EventListDto {
            events: event_dtos,
            total,
            page,
            page_size,
            has_more: page * page_size < total,
        })
    }

    /// Patches an event (channel admin only).
    pub async fn update_event(
        &self,
        event_id: i32,
        user_id: i32,
        param: UpdateEventParams,
    ) -> Result<EventDto, AppError> {
        let event = self.find_event(event_id).await?;

        self.require_channel_admin(
            user_id,
            event.channel_id,
            "Only channel admins can update events",
        )
        .await?;

        let updated = EventRepository::new(self.db)
            .update(event_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        self.build_event_dto(updated, user_id).await
    }

    /// Deletes an event (channel admin only).
    pub async fn delete_event(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<EventDeleteDto, AppError> {
        let event = self.find_event(event_id).await?;

        self.require_channel_admin(
            user_id,
            event.channel_id,
            "Only channel admins can delete events",
        )
        .await?;

        let success = EventRepository::new(self.db).delete(event_id).await?;

        Ok(EventDeleteDto {
            success,
            message: if success {
                "Event deleted successfully".to_string()
            } else {
                "Failed to delete event".to_string()
            },
        })
    }

    /// Registers the user for an event.
    ///
    /// Deadline and capacity are checked first; the insert itself carries the
    /// duplicate guard, so "already registered" is detected by the unique
    /// index rather than a prior existence check.
    pub async fn register_for_event(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<RegistrationActionDto, AppError> {
        let event = self.find_event(event_id).await?;

        if event
            .registration_deadline
            .is_some_and(|deadline| deadline < chrono::Utc::now())
        {
            return Err(AppError::BadRequest(
                "Registration deadline has passed".to_string(),
            ));
        }

        let registration_repo = EventRegistrationRepository::new(self.db);

        if let Some(max_attendees) = event.max_attendees {
            let registered = registration_repo.count_for_event(event_id).await?;
            if registered >= max_attendees.max(0) as u64 {
                return Err(AppError::BadRequest("Event is full".to_string()));
            }
        }

        let payment_status = if event.requires_payment {
            PaymentStatus::Pending
        } else {
            PaymentStatus::NotRequired
        };

        let Some(registration) = registration_repo
            .register(
                event_id,
                user_id,
                &otp::generate_ticket_code(),
                payment_status,
            )
            .await?
        else {
            return Err(AppError::BadRequest(
                "You are already registered for this event".to_string(),
            ));
        };

        let mut message = "Successfully registered for event".to_string();
        if event.requires_payment {
            message.push_str(". Please complete payment to confirm your registration.");
        }

        Ok(RegistrationActionDto {
            success: true,
            message,
            registration: Some(registration_dto(registration, None)),
        })
    }

    /// Cancels the user's registration.
    pub async fn cancel_registration(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<RegistrationActionDto, AppError> {
        let cancelled = EventRegistrationRepository::new(self.db)
            .cancel(event_id, user_id)
            .await?;

        if !cancelled {
            return Err(AppError::BadRequest(
                "You are not registered for this event".to_string(),
            ));
        }

        Ok(RegistrationActionDto {
            success: true,
            message: "Registration cancelled successfully".to_string(),
            registration: None,
        })
    }

    /// Lists an event's registrations (channel admin only).
    pub async fn get_event_registrations(
        &self,
        event_id: i32,
        user_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<RegistrationListDto, AppError> {
        let event = self.find_event(event_id).await?;

        self.require_channel_admin(
            user_id,
            event.channel_id,
            "Only channel admins can view registrations",
        )
        .await?;

        let (rows, total) = EventRegistrationRepository::new(self.db)
            .list_for_event(event_id, page, page_size)
            .await?;

        Ok(RegistrationListDto {
            registrations: rows
                .into_iter()
                .map(|(registration, user)| {
                    registration_dto(registration, user.map(UserSummaryDto::from_entity))
                })
                .collect(),
            total,
            page,
            page_size,
            has_more: page * page_size < total,
        })
    }

    /// Creates a payment intent for the user's registration, applying an
    /// optional discount code.
    ///
    /// The provider call comes first; only after it succeeds is the local
    /// transaction row written. A redeemed discount is taken atomically, so a
    /// concurrent redemption cannot push the code past its cap.
    pub async fn create_payment_intent(
        &self,
        event_id: i32,
        user_id: i32,
        discount_code: Option<&str>,
    ) -> Result<PaymentIntentDto, AppError> {
        let event = self.find_event(event_id).await?;

        if !event.requires_payment {
            return Err(AppError::BadRequest(
                "This event does not require payment".to_string(),
            ));
        }
        let price = event.price.ok_or_else(|| {
            AppError::InternalError(format!("Paid event {} has no price", event.id))
        })?;

        let registration_repo = EventRegistrationRepository::new(self.db);
        let Some(registration) = registration_repo.find(event_id, user_id).await? else {
            return Err(AppError::BadRequest(
                "You must register for the event first".to_string(),
            ));
        };

        let mut amount = price;

        if let Some(code) = discount_code {
            let (discount, discount_type) = self.validate_discount(event_id, code).await?;

            let quote = DiscountQuote::compute(price, discount_type, discount.discount_value);

            if !DiscountCodeRepository::new(self.db)
                .redeem(event_id, code)
                .await?
            {
                return Err(AppError::BadRequest(
                    "Discount code has reached maximum uses".to_string(),
                ));
            }

            amount = quote.final_price;
        }

        let intent = self
            .payments
            .create_payment_intent(amount, &event.currency)
            .await?;

        EventTransactionRepository::new(self.db)
            .create(
                event_id,
                user_id,
                registration.id,
                amount,
                &event.currency,
                "card",
                Some(&intent.id),
            )
            .await?;

        Ok(PaymentIntentDto {
            client_secret: intent.client_secret,
            amount,
            currency: event.currency,
        })
    }

    /// Marks a provider-confirmed payment as completed and the registration
    /// as paid.
    pub async fn confirm_payment(&self, provider_intent_id: &str) -> Result<AckDto, AppError> {
        let transaction_repo = EventTransactionRepository::new(self.db);

        let Some(transaction) = transaction_repo.find_by_intent(provider_intent_id).await? else {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        };

        transaction_repo
            .update_status(transaction.id, TransactionStatus::Completed)
            .await?;

        EventRegistrationRepository::new(self.db)
            .mark_paid(transaction.registration_id, transaction.amount)
            .await?;

        Ok(AckDto::ok("Payment confirmed"))
    }

    /// Creates a discount code (channel admin only).
    pub async fn create_discount_code(
        &self,
        event_id: i32,
        user_id: i32,
        param: CreateDiscountCodeParams,
    ) -> Result<DiscountCodeDto, AppError> {
        let event = self.find_event(event_id).await?;

        self.require_channel_admin(
            user_id,
            event.channel_id,
            "Only channel admins can create discount codes",
        )
        .await?;

        let Some(discount) = DiscountCodeRepository::new(self.db)
            .create(event_id, param)
            .await?
        else {
            return Err(AppError::BadRequest(
                "Discount code already exists for this event".to_string(),
            ));
        };

        Ok(discount_dto(discount))
    }

    /// Price preview for a discount code. Pure: validates and computes but
    /// never redeems.
    pub async fn apply_discount_code(
        &self,
        event_id: i32,
        code: &str,
    ) -> Result<ApplyDiscountDto, AppError> {
        let event = self.find_event(event_id).await?;

        if !event.requires_payment {
            return Err(AppError::BadRequest(
                "This event does not require payment".to_string(),
            ));
        }
        let price = event.price.ok_or_else(|| {
            AppError::InternalError(format!("Paid event {} has no price", event.id))
        })?;

        let (discount, discount_type) = self.validate_discount(event_id, code).await?;

        let quote = DiscountQuote::compute(price, discount_type, discount.discount_value);

        Ok(ApplyDiscountDto {
            success: true,
            message: "Discount code applied successfully".to_string(),
            original_price: quote.original_price,
            discount_amount: quote.discount_amount,
            final_price: quote.final_price,
        })
    }

    /// Creates an alert for an event (channel admin only).
    pub async fn create_event_alert(
        &self,
        event_id: i32,
        user_id: i32,
        title: &str,
        message: &str,
    ) -> Result<EventAlertDto, AppError> {
        let event = self.find_event(event_id).await?;

        self.require_channel_admin(
            user_id,
            event.channel_id,
            "Only channel admins can create alerts",
        )
        .await?;

        let alert = EventRepository::new(self.db)
            .create_alert(event_id, title, message, user_id)
            .await?;

        Ok(alert_dto(alert))
    }

    /// Lists an event's alerts, newest first.
    pub async fn get_event_alerts(
        &self,
        event_id: i32,
        page: u64,
        page_size: u64,
    ) -> Result<EventAlertListDto, AppError> {
        let (alerts, total) = EventRepository::new(self.db)
            .get_alerts(event_id, page, page_size)
            .await?;

        Ok(EventAlertListDto {
            alerts: alerts.into_iter().map(alert_dto).collect(),
            total,
            page,
            page_size,
            has_more: page * page_size < total,
        })
    }

    /// Registration and revenue statistics (channel admin only).
    pub async fn get_event_stats(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<EventStatsDto, AppError> {
        let event = self.find_event(event_id).await?;

        self.require_channel_admin(
            user_id,
            event.channel_id,
            "Only channel admins can view statistics",
        )
        .await?;

        let registration_repo = EventRegistrationRepository::new(self.db);

        let registered_count = registration_repo.count_for_event(event_id).await?;
        let paid_count = registration_repo
            .count_by_status(event_id, PaymentStatus::Paid)
            .await?;
        let pending_payment_count = registration_repo
            .count_by_status(event_id, PaymentStatus::Pending)
            .await?;
        let total_revenue = EventTransactionRepository::new(self.db)
            .total_revenue(event_id)
            .await?;

        let available_spots = event
            .max_attendees
            .map(|max| max as i64 - registered_count as i64);

        Ok(EventStatsDto {
            registered_count,
            paid_count,
            pending_payment_count,
            total_revenue,
            available_spots,
        })
    }

    async fn find_event(&self, event_id: i32) -> Result<entity::event::Model, AppError> {
        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    async fn require_channel_admin(
        &self,
        user_id: i32,
        channel_id: i32,
        denial: &str,
    ) -> Result<(), AppError> {
        let is_admin = ChannelRepository::new(self.db)
            .is_user_admin(user_id, channel_id)
            .await?;

        if !is_admin {
            return Err(AppError::Forbidden(denial.to_string()));
        }

        Ok(())
    }

    /// Validates a discount code for use: it must exist, be under its usage
    /// cap, and not be expired.
    async fn validate_discount(
        &self,
        event_id: i32,
        code: &str,
    ) -> Result<(entity::discount_code::Model, DiscountType), AppError> {
        let Some(discount) = DiscountCodeRepository::new(self.db)
            .find(event_id, code)
            .await?
        else {
            return Err(AppError::BadRequest("Invalid discount code".to_string()));
        };

        if discount
            .max_uses
            .is_some_and(|max| discount.times_used >= max)
        {
            return Err(AppError::BadRequest(
                "Discount code has reached maximum uses".to_string(),
            ));
        }

        if discount
            .valid_until
            .is_some_and(|until| until < chrono::Utc::now())
        {
            return Err(AppError::BadRequest(
                "Discount code has expired".to_string(),
            ));
        }

        let discount_type = DiscountType::parse(&discount.discount_type).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown discount type '{}' on code {}",
                discount.discount_type, discount.id
            ))
        })?;

        Ok((discount, discount_type))
    }

    async fn build_event_dto(
        &self,
        event: entity::event::Model,
        user_id: i32,
    ) -> Result<EventDto, AppError> {
        let registration_repo = EventRegistrationRepository::new(self.db);

        let registered_count = registration_repo.count_for_event(event.id).await?;
        let registration = registration_repo.find(event.id, user_id).await?;
        let is_registered = registration.is_some();
        let has_paid = registration
            .is_some_and(|r| r.payment_status == PaymentStatus::Paid.as_str());

        let channel = ChannelRepository::new(self.db)
            .find_by_id(event.channel_id)
            .await?
            .map(|channel| ChannelSummaryDto {
                id: channel.id,
                name: channel.name,
                image_url: channel.image_url,
            });

        Ok(EventDto {
            id: event.id,
            channel_id: event.channel_id,
            name: event.name,
            description: event.description,
            event_date: event.event_date,
            end_date: event.end_date,
            location: event.location,
            image_url: event.image_url,
            max_attendees: event.max_attendees,
            registration_deadline: event.registration_deadline,
            requires_payment: event.requires_payment,
            price: event.price,
            currency: event.currency,
            created_at: event.created_at,
            updated_at: event.updated_at,
            registered_count,
            is_registered,
            has_paid,
            channel,
        })
    }
}

fn registration_dto(
    registration: entity::event_registration::Model,
    user: Option<UserSummaryDto>,
) -> EventRegistrationDto {
    EventRegistrationDto {
        id: registration.id,
        event_id: registration.event_id,
        user_id: registration.user_id,
        ticket_code: registration.ticket_code,
        registered_at: registration.registered_at,
        payment_status: registration.payment_status,
        payment_amount: registration.payment_amount,
        user,
    }
}

fn discount_dto(discount: entity::discount_code::Model) -> DiscountCodeDto {
    DiscountCodeDto {
        id: discount.id,
        event_id: discount.event_id,
        code: discount.code,
        discount_type: discount.discount_type,
        discount_value: discount.discount_value,
        max_uses: discount.max_uses,
        times_used: discount.times_used,
        valid_until: discount.valid_until,
        created_at: discount.created_at,
    }
}

fn alert_dto(alert: entity::event_alert::Model) -> EventAlertDto {
    EventAlertDto {
        id: alert.id,
        event_id: alert.event_id,
        title: alert.title,
        message: alert.message,
        created_by: alert.created_by,
        created_at: alert.created_at,
        sent_at: alert.sent_at,
    }
}
