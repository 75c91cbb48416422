//! Contracts of the remote services the event list talks to.
//!
//! Every mutation returns the full, server-confirmed record so the caller
//! can reconcile it into its cached list.

use crate::domain::{EventItem, EventListFilter};
use eventboard_errors::AppError;

#[allow(async_fn_in_trait)]
pub trait EventService {
    async fn get_all_event_items(
        &self,
        filter: &EventListFilter,
    ) -> Result<Vec<EventItem>, AppError>;

    async fn upvote(&self, event: &EventItem) -> Result<EventItem, AppError>;

    async fn downvote(&self, event: &EventItem) -> Result<EventItem, AppError>;

    async fn novote(&self, event: &EventItem) -> Result<EventItem, AppError>;

    async fn create_ticket(&self, event: &EventItem) -> Result<EventItem, AppError>;

    async fn delete_ticket(&self, event: &EventItem) -> Result<EventItem, AppError>;
}

#[allow(async_fn_in_trait)]
pub trait UserService {
    /// Ends the current session. Navigation afterwards is up to the caller.
    async fn end_session(&self) -> Result<(), AppError>;
}
