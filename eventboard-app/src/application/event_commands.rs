use crate::domain::{EventItem, EventListFilter, VoteState};
use crate::infrastructure::db::{EventRepository, ReserveOutcome, TicketRepository, VoteRepository};
use eventboard_errors::AppError;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

/// Server side of the event service: every mutation answers with the
/// refreshed record as seen by the acting user.
#[derive(Clone)]
pub struct EventCommands {
    events: EventRepository,
    votes: VoteRepository,
    tickets: TicketRepository,
}

impl EventCommands {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            events: EventRepository::new(db.clone()),
            votes: VoteRepository::new(db.clone()),
            tickets: TicketRepository::new(db),
        }
    }

    pub async fn list(
        &self,
        filter: &EventListFilter,
        current_user_id: Option<Uuid>,
    ) -> Result<Vec<EventItem>, AppError> {
        self.events
            .list_with_details(filter, current_user_id)
            .await
            .map_err(db_error)
    }

    pub async fn vote(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        state: VoteState,
    ) -> Result<EventItem, AppError> {
        self.ensure_exists(event_id).await?;
        self.votes
            .set_value(user_id, event_id, state.value())
            .await
            .map_err(db_error)?;
        tracing::info!("User {} set vote {:?} on event {}", user_id, state, event_id);
        self.refreshed(event_id, user_id).await
    }

    pub async fn create_ticket(&self, user_id: Uuid, event_id: Uuid) -> Result<EventItem, AppError> {
        match self.tickets.reserve(user_id, event_id).await.map_err(db_error)? {
            ReserveOutcome::Reserved(ticket) => {
                tracing::info!("Issued ticket {} for event {}", ticket.id, event_id);
            }
            ReserveOutcome::AlreadyHeld(_) => {
                tracing::debug!("User {} already holds a ticket for {}", user_id, event_id);
            }
            ReserveOutcome::Full => return Err(AppError::CapacityExhausted),
            ReserveOutcome::EventMissing => return Err(AppError::EventNotFound),
        }
        self.refreshed(event_id, user_id).await
    }

    pub async fn delete_ticket(&self, user_id: Uuid, event_id: Uuid) -> Result<EventItem, AppError> {
        self.ensure_exists(event_id).await?;
        self.tickets
            .release(user_id, event_id)
            .await
            .map_err(db_error)?;
        tracing::info!("User {} released ticket for event {}", user_id, event_id);
        self.refreshed(event_id, user_id).await
    }

    async fn ensure_exists(&self, event_id: Uuid) -> Result<(), AppError> {
        match self.events.find_by_id(event_id).await.map_err(db_error)? {
            Some(_) => Ok(()),
            None => Err(AppError::EventNotFound),
        }
    }

    async fn refreshed(&self, event_id: Uuid, user_id: Uuid) -> Result<EventItem, AppError> {
        self.events
            .find_with_details(event_id, Some(user_id))
            .await
            .map_err(db_error)?
            .ok_or(AppError::EventNotFound)
    }
}

fn db_error(e: DbErr) -> AppError {
    tracing::error!("Database error: {}", e);
    AppError::Database(e.to_string())
}
