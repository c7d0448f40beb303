//! Ticket listing for the authenticated user.

use sea_orm::DatabaseConnection;

use crate::{
    model::ticket::{TicketDto, TicketListDto},
    server::{data::event_registration::EventRegistrationRepository, error::AppError},
};

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All tickets of a user, newest registration first. Registrations whose
    /// event has been deleted are skipped.
    pub async fn list_tickets(&self, user_id: i32) -> Result<TicketListDto, AppError> {
        let rows = EventRegistrationRepository::new(self.db)
            .list_for_user_with_events(user_id)
            .await?;

        let tickets = rows
            .into_iter()
            .filter_map(|(registration, event)| {
                event.map(|event| TicketDto {
                    id: registration.id,
                    event_id: event.id,
                    event_name: event.name,
                    event_date: event.event_date,
                    ticket_code: registration.ticket_code,
                    status: registration.payment_status,
                })
            })
            .collect();

        Ok(TicketListDto { tickets })
    }
}
