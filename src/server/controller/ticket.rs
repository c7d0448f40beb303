use axum::{extract::State, Json};

use crate::{
    model::ticket::TicketListDto,
    server::{
        error::AppError, middleware::auth::CurrentUser, service::ticket::TicketService,
        state::AppState,
    },
};

/// All tickets of the authenticated user.
#[utoipa::path(
    get,
    path = "/api/v1/tickets",
    responses((status = 200, body = TicketListDto)),
    tag = "tickets",
)]
pub async fn get_user_tickets(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<TicketListDto>, AppError> {
    let response = TicketService::new(&state.db).list_tickets(user.id).await?;

    Ok(Json(response))
}
