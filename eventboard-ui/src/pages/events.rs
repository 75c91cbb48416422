use crate::components::EventList;
use eventboard_app::domain::{EventItem, EventListFilter, UserItem};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use server_fn::ServerFnError;
use uuid::Uuid;

#[cfg(feature = "ssr")]
mod session {
    use eventboard_app::domain::{EventItem, VoteState};
    use eventboard_app::AppContext;
    use eventboard_errors::AppError;
    use leptos::prelude::expect_context;
    use server_fn::ServerFnError;
    use tower_sessions::Session;
    use uuid::Uuid;

    /// Session key the authentication layer stores the signed-in user under.
    pub const USER_ID_KEY: &str = "user_id";

    pub fn server_error(err: AppError) -> ServerFnError {
        ServerFnError::new(err.to_string())
    }

    pub async fn current_user_id() -> Option<Uuid> {
        let session = match leptos_axum::extract::<Session>().await {
            Ok(session) => session,
            Err(e) => {
                tracing::info!("No session on request: {}", e);
                return None;
            }
        };
        session.get::<Uuid>(USER_ID_KEY).await.ok().flatten()
    }

    /// Signed-in user allowed to mutate right now.
    async fn acting_user(ctx: &AppContext) -> Result<Uuid, AppError> {
        let user_id = current_user_id().await.ok_or(AppError::NotSignedIn)?;
        ctx.rate_limiter.check(user_id)?;
        Ok(user_id)
    }

    pub async fn set_vote(event_id: Uuid, state: VoteState) -> Result<EventItem, ServerFnError> {
        let ctx = expect_context::<AppContext>();
        let user_id = acting_user(&ctx).await.map_err(server_error)?;
        ctx.events
            .vote(user_id, event_id, state)
            .await
            .map_err(server_error)
    }

    pub async fn reserve(event_id: Uuid) -> Result<EventItem, ServerFnError> {
        let ctx = expect_context::<AppContext>();
        let user_id = acting_user(&ctx).await.map_err(server_error)?;
        ctx.events
            .create_ticket(user_id, event_id)
            .await
            .map_err(server_error)
    }

    pub async fn release(event_id: Uuid) -> Result<EventItem, ServerFnError> {
        let ctx = expect_context::<AppContext>();
        let user_id = acting_user(&ctx).await.map_err(server_error)?;
        ctx.events
            .delete_ticket(user_id, event_id)
            .await
            .map_err(server_error)
    }
}

#[server(GetCurrentUserFn, "/api", endpoint = "current_user")]
pub async fn get_current_user() -> Result<Option<UserItem>, ServerFnError> {
    use eventboard_app::AppContext;

    let Some(user_id) = session::current_user_id().await else {
        return Ok(None);
    };

    let ctx = expect_context::<AppContext>();
    let model = ctx
        .user_repo
        .find_by_id(user_id)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(model.map(UserItem::from))
}

#[server(GetAllEventItemsFn, "/api", endpoint = "events")]
pub async fn get_all_event_items(
    host_user_id: Option<Uuid>,
) -> Result<Vec<EventItem>, ServerFnError> {
    use eventboard_app::AppContext;

    let filter = EventListFilter { host_user_id };
    let ctx = expect_context::<AppContext>();
    let user_id = session::current_user_id().await;

    ctx.events
        .list(&filter, user_id)
        .await
        .map_err(session::server_error)
}

#[server(UpvoteFn, "/api", endpoint = "upvote")]
pub async fn upvote(event_id: Uuid) -> Result<EventItem, ServerFnError> {
    session::set_vote(event_id, eventboard_app::domain::VoteState::Upvoted).await
}

#[server(DownvoteFn, "/api", endpoint = "downvote")]
pub async fn downvote(event_id: Uuid) -> Result<EventItem, ServerFnError> {
    session::set_vote(event_id, eventboard_app::domain::VoteState::Downvoted).await
}

#[server(NovoteFn, "/api", endpoint = "novote")]
pub async fn novote(event_id: Uuid) -> Result<EventItem, ServerFnError> {
    session::set_vote(event_id, eventboard_app::domain::VoteState::NoVote).await
}

#[server(CreateTicketFn, "/api", endpoint = "create_ticket")]
pub async fn create_ticket(event_id: Uuid) -> Result<EventItem, ServerFnError> {
    session::reserve(event_id).await
}

#[server(DeleteTicketFn, "/api", endpoint = "delete_ticket")]
pub async fn delete_ticket(event_id: Uuid) -> Result<EventItem, ServerFnError> {
    session::release(event_id).await
}

/// Reads the host filter from the `host` query parameter. Anything that is
/// not a user id means no filter.
pub fn filter_from_query(host: Option<&str>) -> EventListFilter {
    host.and_then(|h| Uuid::parse_str(h.trim()).ok())
        .map(EventListFilter::by_host)
        .unwrap_or_default()
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let query = use_query_map();
    let filter = Memo::new(move |_| filter_from_query(query.with(|q| q.get("host")).as_deref()));

    view! {
        <div class="hero">
            <h1 class="hero__title">"Events"</h1>
            <p class="hero__subtitle">
                {move || if filter.with(|f| f.is_empty()) {
                    "Everything coming up. Vote on what looks good and grab a ticket."
                } else {
                    "Showing events from one host."
                }}
            </p>
        </div>
        <EventList filter=filter show_filter_button=true/>
    }
}
