use crate::services::ServerUserService;
use eventboard_app::service::UserService;
use leptos::prelude::*;
use leptos::task::spawn_local;
use server_fn::ServerFnError;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

#[server(LogOutFn, "/api", endpoint = "logout")]
pub async fn perform_log_out() -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session = leptos_axum::extract::<Session>().await?;
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    tracing::info!("Session ended");
    Ok(())
}

/// Full page navigation, so no client state survives the logout.
fn redirect_to_root() {
    if let Err(e) = window().location().set_href("/") {
        tracing::error!("Redirect after logout failed: {:?}", e);
    }
}

/// How long the page waits for the session call before leaving anyway.
const END_SESSION_TIMEOUT: Duration = Duration::from_secs(5);

/// Lets exactly one of the session call and the timeout navigate away.
#[derive(Clone, Default)]
struct RedirectOnce(Rc<Cell<bool>>);

impl RedirectOnce {
    fn run(&self, redirect: impl FnOnce()) -> bool {
        if self.0.replace(true) {
            return false;
        }
        redirect();
        true
    }
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    Effect::new(move |_| {
        let redirect = RedirectOnce::default();

        let on_timeout = redirect.clone();
        set_timeout(
            move || {
                if on_timeout.run(redirect_to_root) {
                    tracing::warn!("Ending the session timed out, redirecting anyway");
                }
            },
            END_SESSION_TIMEOUT,
        );

        spawn_local(async move {
            if let Err(e) = ServerUserService.end_session().await {
                tracing::error!("Error ending session: {}", e);
            }
            redirect.run(redirect_to_root);
        });
    });

    view! {
        <p class="logout">"Signing out..."</p>
    }
}
