use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    model::{
        api::AckDto,
        event::{
            ApplyDiscountDto, ApplyDiscountRequest, ConfirmPaymentRequest,
            CreateDiscountCodeRequest, CreateEventAlertRequest, CreateEventRequest,
            CreatePaymentIntentRequest, DiscountCodeDto, EventAlertDto, EventAlertListDto,
            EventDeleteDto, EventDto, EventFeedQuery, EventListDto, EventStatsDto,
            PaymentIntentDto, RegistrationActionDto, RegistrationListDto, UpdateEventRequest,
        },
    },
    server::{
        data::event::EventFeedFilter,
        error::AppError,
        middleware::auth::CurrentUser,
        model::event::{
            CreateDiscountCodeParams, CreateEventParams, DiscountType, UpdateEventParams,
        },
        service::event::EventService,
        state::AppState,
    },
};

const DEFAULT_PAGE_SIZE: u64 = 20;

/// Pagination query parameters shared by the list endpoints.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl PageQuery {
    fn resolve(&self) -> (u64, u64) {
        (
            self.page.unwrap_or(1).max(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100),
        )
    }
}

fn event_service(state: &AppState) -> EventService<'_> {
    EventService::new(&state.db, state.payments.as_ref(), &state.config)
}

/// Create an event (channel admin only).
#[utoipa::path(
    post,
    path = "/api/v1/events",
    request_body = CreateEventRequest,
    responses(
        (status = 200, body = EventDto),
        (status = 400, description = "Paid event without a price"),
        (status = 403, description = "Not a channel admin"),
    ),
    tag = "events",
)]
pub async fn create_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<CreateEventRequest>,
) -> Result<Json<EventDto>, AppError> {
    let channel_id = body.channel_id;
    let response = event_service(&state)
        .create_event(user.id, channel_id, create_params(body))
        .await?;

    Ok(Json(response))
}

/// The event feed: events from subscribed channels, filtered and paginated.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    responses((status = 200, body = EventListDto)),
    tag = "events",
)]
pub async fn list_events(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<EventFeedQuery>,
) -> Result<Json<EventListDto>, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100);

    let filter = EventFeedFilter {
        channel_id: query.channel_id,
        upcoming_only: query.upcoming_only.unwrap_or(true),
        registered_only: query.registered_only.unwrap_or(false),
        search: query.search,
    };

    let response = event_service(&state)
        .list_events(user.id, filter, page, page_size)
        .await?;

    Ok(Json(response))
}

/// Fetch a single event.
#[utoipa::path(
    get,
    path = "/api/v1/events/{event_id}",
    responses((status = 200, body = EventDto), (status = 404, description = "Unknown event")),
    tag = "events",
)]
pub async fn get_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<Json<EventDto>, AppError> {
    let response = event_service(&state).get_event(event_id, user.id).await?;

    Ok(Json(response))
}

/// Update an event (channel admin only).
#[utoipa::path(
    put,
    path = "/api/v1/events/{event_id}",
    request_body = UpdateEventRequest,
    responses(
        (status = 200, body = EventDto),
        (status = 403, description = "Not a channel admin"),
        (status = 404, description = "Unknown event"),
    ),
    tag = "events",
)]
pub async fn update_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<Json<EventDto>, AppError> {
    let response = event_service(&state)
        .update_event(event_id, user.id, update_params(body))
        .await?;

    Ok(Json(response))
}

/// Delete an event (channel admin only).
#[utoipa::path(
    delete,
    path = "/api/v1/events/{event_id}",
    responses(
        (status = 200, body = EventDeleteDto),
        (status = 403, description = "Not a channel admin"),
        (status = 404, description = "Unknown event"),
    ),
    tag = "events",
)]
pub async fn delete_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<Json<EventDeleteDto>, AppError> {
    let response = event_service(&state).delete_event(event_id, user.id).await?;

    Ok(Json(response))
}

/// Register for an event.
#[utoipa::path(
    post,
    path = "/api/v1/events/{event_id}/register",
    responses(
        (status = 200, body = RegistrationActionDto),
        (status = 400, description = "Deadline passed, event full, or already registered"),
        (status = 404, description = "Unknown event"),
    ),
    tag = "events",
)]
pub async fn register_for_event(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<Json<RegistrationActionDto>, AppError> {
    let response = event_service(&state)
        .register_for_event(event_id, user.id)
        .await?;

    Ok(Json(response))
}

/// Cancel the user's registration.
#[utoipa::path(
    delete,
    path = "/api/v1/events/{event_id}/register",
    responses(
        (status = 200, body = RegistrationActionDto),
        (status = 400, description = "Not registered"),
    ),
    tag = "events",
)]
pub async fn cancel_registration(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<Json<RegistrationActionDto>, AppError> {
    let response = event_service(&state)
        .cancel_registration(event_id, user.id)
        .await?;

    Ok(Json(response))
}

/// List an event's registrations (channel admin only).
#[utoipa::path(
    get,
    path = "/api/v1/events/{event_id}/registrations",
    responses(
        (status = 200, body = RegistrationListDto),
        (status = 403, description = "Not a channel admin"),
    ),
    tag = "events",
)]
pub async fn get_event_registrations(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<RegistrationListDto>, AppError> {
    let (page, page_size) = query.resolve();

    let response = event_service(&state)
        .get_event_registrations(event_id, user.id, page, page_size)
        .await?;

    Ok(Json(response))
}

/// Create a payment intent for the user's registration.
#[utoipa::path(
    post,
    path = "/api/v1/events/{event_id}/payment-intent",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, body = PaymentIntentDto),
        (status = 400, description = "Free event, not registered, or bad discount code"),
        (status = 404, description = "Unknown event"),
    ),
    tag = "events",
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(body): Json<CreatePaymentIntentRequest>,
) -> Result<Json<PaymentIntentDto>, AppError> {
    let response = event_service(&state)
        .create_payment_intent(event_id, user.id, body.discount_code.as_deref())
        .await?;

    Ok(Json(response))
}

/// Confirm a provider-completed payment.
#[utoipa::path(
    post,
    path = "/api/v1/events/payments/confirm",
    request_body = ConfirmPaymentRequest,
    responses((status = 200, body = AckDto), (status = 404, description = "Unknown transaction")),
    tag = "events",
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Json(body): Json<ConfirmPaymentRequest>,
) -> Result<Json<AckDto>, AppError> {
    let response = event_service(&state)
        .confirm_payment(&body.provider_intent_id)
        .await?;

    Ok(Json(response))
}

/// Create a discount code (channel admin only).
#[utoipa::path(
    post,
    path = "/api/v1/events/{event_id}/discount-codes",
    request_body = CreateDiscountCodeRequest,
    responses(
        (status = 200, body = DiscountCodeDto),
        (status = 400, description = "Bad discount type or duplicate code"),
        (status = 403, description = "Not a channel admin"),
    ),
    tag = "events",
)]
pub async fn create_discount_code(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(body): Json<CreateDiscountCodeRequest>,
) -> Result<Json<DiscountCodeDto>, AppError> {
    let Some(discount_type) = DiscountType::parse(&body.discount_type) else {
        return Err(AppError::BadRequest("Invalid discount type".to_string()));
    };

    let response = event_service(&state)
        .create_discount_code(
            event_id,
            user.id,
            CreateDiscountCodeParams {
                code: body.code,
                discount_type,
                discount_value: body.discount_value,
                max_uses: body.max_uses,
                valid_until: body.valid_until,
            },
        )
        .await?;

    Ok(Json(response))
}

/// Preview a discount code against an event's price. Pure; never redeems.
#[utoipa::path(
    post,
    path = "/api/v1/events/{event_id}/apply-discount",
    request_body = ApplyDiscountRequest,
    responses(
        (status = 200, body = ApplyDiscountDto),
        (status = 400, description = "Invalid, exhausted, or expired code"),
    ),
    tag = "events",
)]
pub async fn apply_discount_code(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(body): Json<ApplyDiscountRequest>,
) -> Result<Json<ApplyDiscountDto>, AppError> {
    let response = event_service(&state)
        .apply_discount_code(event_id, &body.code)
        .await?;

    Ok(Json(response))
}

/// Create an event alert (channel admin only).
#[utoipa::path(
    post,
    path = "/api/v1/events/{event_id}/alerts",
    request_body = CreateEventAlertRequest,
    responses(
        (status = 200, body = EventAlertDto),
        (status = 403, description = "Not a channel admin"),
    ),
    tag = "events",
)]
pub async fn create_event_alert(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
    Json(body): Json<CreateEventAlertRequest>,
) -> Result<Json<EventAlertDto>, AppError> {
    let response = event_service(&state)
        .create_event_alert(event_id, user.id, &body.title, &body.message)
        .await?;

    Ok(Json(response))
}

/// List an event's alerts.
#[utoipa::path(
    get,
    path = "/api/v1/events/{event_id}/alerts",
    responses((status = 200, body = EventAlertListDto)),
    tag = "events",
)]
pub async fn get_event_alerts(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(event_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<EventAlertListDto>, AppError> {
    let (page, page_size) = query.resolve();

    let response = event_service(&state)
        .get_event_alerts(event_id, page, page_size)
        .await?;

    Ok(Json(response))
}

/// Event statistics (channel admin only).
#[utoipa::path(
    get,
    path = "/api/v1/events/{event_id}/stats",
    responses(
        (status = 200, body = EventStatsDto),
        (status = 403, description = "Not a channel admin"),
    ),
    tag = "events",
)]
pub async fn get_event_stats(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(event_id): Path<i32>,
) -> Result<Json<EventStatsDto>, AppError> {
    let response = event_service(&state)
        .get_event_stats(event_id, user.id)
        .await?;

    Ok(Json(response))
}

fn create_params(body: CreateEventRequest) -> CreateEventParams {
    CreateEventParams {
        name: body.name,
        description: body.description,
        event_date: body.event_date,
        end_date: body.end_date,
        location: body.location,
        image_url: body.image_url,
        max_attendees: body.max_attendees,
        registration_deadline: body.registration_deadline,
        requires_payment: body.requires_payment,
        price: body.price,
        currency: body.currency,
    }
}

fn update_params(body: UpdateEventRequest) -> UpdateEventParams {
    UpdateEventParams {
        name: body.name,
        description: body.description,
        event_date: body.event_date,
        end_date: body.end_date,
        location: body.location,
        image_url: body.image_url,
        max_attendees: body.max_attendees,
        registration_deadline: body.registration_deadline,
        requires_payment: body.requires_payment,
        price: body.price,
        currency: body.currency,
    }
}
