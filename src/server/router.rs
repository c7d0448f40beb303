use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{
        controller::{auth, event, ticket},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::register_start,
        auth::register_verify_email,
        auth::register_complete,
        auth::register_resend_email,
        auth::register_resend_sms,
        auth::send_login_otp,
        auth::verify_otp,
        auth::change_password,
        auth::send_reset_code,
        auth::validate_token,
        auth::refresh,
        auth::logout,
        auth::validate_user_organization,
        auth::register_user_organization,
        event::create_event,
        event::list_events,
        event::get_event,
        event::update_event,
        event::delete_event,
        event::register_for_event,
        event::cancel_registration,
        event::get_event_registrations,
        event::create_payment_intent,
        event::confirm_payment,
        event::create_discount_code,
        event::apply_discount_code,
        event::create_event_alert,
        event::get_event_alerts,
        event::get_event_stats,
        ticket::get_user_tickets,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::AckDto,
        model::user::UserSummaryDto,
        model::auth::LoginRequest,
        model::auth::LoginResponseDto,
        model::auth::RegisterStartRequest,
        model::auth::RegisterStartResponseDto,
        model::auth::RegisterVerifyEmailRequest,
        model::auth::RegisterCompleteRequest,
        model::auth::TokenResponseDto,
        model::auth::RegisterResendRequest,
        model::auth::SendOtpRequest,
        model::auth::VerifyOtpRequest,
        model::auth::ChangePasswordRequest,
        model::auth::SendResetCodeRequest,
        model::auth::RefreshTokenRequest,
        model::auth::ValidateTokenDto,
        model::auth::OrganizationMembershipRequest,
        model::auth::ValidateMembershipDto,
        model::event::ChannelSummaryDto,
        model::event::EventDto,
        model::event::EventListDto,
        model::event::CreateEventRequest,
        model::event::UpdateEventRequest,
        model::event::EventDeleteDto,
        model::event::EventRegistrationDto,
        model::event::RegistrationActionDto,
        model::event::RegistrationListDto,
        model::event::CreatePaymentIntentRequest,
        model::event::ConfirmPaymentRequest,
        model::event::PaymentIntentDto,
        model::event::CreateDiscountCodeRequest,
        model::event::DiscountCodeDto,
        model::event::ApplyDiscountRequest,
        model::event::ApplyDiscountDto,
        model::event::CreateEventAlertRequest,
        model::event::EventAlertDto,
        model::event::EventAlertListDto,
        model::event::EventStatsDto,
        model::ticket::TicketDto,
        model::ticket::TicketListDto,
    ))
)]
struct ApiDoc;

/// Builds the application router: the `/api/v1` surface, Swagger UI, and the
/// CORS/trace layers.
pub fn router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/register-start", post(auth::register_start))
        .route(
            "/api/v1/auth/register-verify-email",
            post(auth::register_verify_email),
        )
        .route(
            "/api/v1/auth/register-complete",
            post(auth::register_complete),
        )
        .route(
            "/api/v1/auth/register-resend-email",
            post(auth::register_resend_email),
        )
        .route(
            "/api/v1/auth/register-resend-sms",
            post(auth::register_resend_sms),
        )
        .route("/api/v1/auth/send-login-otp", post(auth::send_login_otp))
        .route("/api/v1/auth/verify-otp", post(auth::verify_otp))
        .route("/api/v1/auth/change-password", post(auth::change_password))
        .route("/api/v1/auth/send-reset-code", post(auth::send_reset_code))
        .route("/api/v1/auth/validate-token", get(auth::validate_token))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route(
            "/api/v1/auth/validate-user-organization",
            post(auth::validate_user_organization),
        )
        .route(
            "/api/v1/auth/register-user-organization",
            post(auth::register_user_organization),
        )
        .route(
            "/api/v1/events",
            post(event::create_event).get(event::list_events),
        )
        .route(
            "/api/v1/events/{event_id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/api/v1/events/{event_id}/register",
            post(event::register_for_event).delete(event::cancel_registration),
        )
        .route(
            "/api/v1/events/{event_id}/registrations",
            get(event::get_event_registrations),
        )
        .route(
            "/api/v1/events/{event_id}/payment-intent",
            post(event::create_payment_intent),
        )
        .route(
            "/api/v1/events/payments/confirm",
            post(event::confirm_payment),
        )
        .route(
            "/api/v1/events/{event_id}/discount-codes",
            post(event::create_discount_code),
        )
        .route(
            "/api/v1/events/{event_id}/apply-discount",
            post(event::apply_discount_code),
        )
        .route(
            "/api/v1/events/{event_id}/alerts",
            post(event::create_event_alert).get(event::get_event_alerts),
        )
        .route("/api/v1/events/{event_id}/stats", get(event::get_event_stats))
        .route("/api/v1/tickets", get(ticket::get_user_tickets))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(state))
}

/// CORS policy from configuration; permissive when no origins are configured
/// (development).
fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any)
    }
}
