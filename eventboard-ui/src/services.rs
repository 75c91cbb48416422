//! Browser-side implementations of the service contracts, backed by the
//! server functions.

use crate::pages::{events as api, perform_log_out};
use eventboard_app::domain::{EventItem, EventListFilter};
use eventboard_app::service::{EventService, UserService};
use eventboard_errors::AppError;
use server_fn::ServerFnError;
use uuid::Uuid;

fn into_app_error(err: ServerFnError) -> AppError {
    match err {
        ServerFnError::ServerError(message) => {
            message.parse().unwrap_or_else(|never| match never {})
        }
        other => AppError::Network(other.to_string()),
    }
}

fn event_id(event: &EventItem) -> Result<Uuid, AppError> {
    event.id.ok_or(AppError::EventNotFound)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServerEventService;

impl EventService for ServerEventService {
    async fn get_all_event_items(
        &self,
        filter: &EventListFilter,
    ) -> Result<Vec<EventItem>, AppError> {
        api::get_all_event_items(filter.host_user_id)
            .await
            .map_err(into_app_error)
    }

    async fn upvote(&self, event: &EventItem) -> Result<EventItem, AppError> {
        api::upvote(event_id(event)?).await.map_err(into_app_error)
    }

    async fn downvote(&self, event: &EventItem) -> Result<EventItem, AppError> {
        api::downvote(event_id(event)?).await.map_err(into_app_error)
    }

    async fn novote(&self, event: &EventItem) -> Result<EventItem, AppError> {
        api::novote(event_id(event)?).await.map_err(into_app_error)
    }

    async fn create_ticket(&self, event: &EventItem) -> Result<EventItem, AppError> {
        api::create_ticket(event_id(event)?)
            .await
            .map_err(into_app_error)
    }

    async fn delete_ticket(&self, event: &EventItem) -> Result<EventItem, AppError> {
        api::delete_ticket(event_id(event)?)
            .await
            .map_err(into_app_error)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ServerUserService;

impl UserService for ServerUserService {
    async fn end_session(&self) -> Result<(), AppError> {
        perform_log_out().await.map_err(into_app_error)
    }
}
