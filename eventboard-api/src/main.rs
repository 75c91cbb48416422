#![recursion_limit = "256"]

use axum::{routing::post, Router};
use eventboard_app::AppContext;
use eventboard_ui::pages::{
    CreateTicketFn, DeleteTicketFn, DownvoteFn, GetAllEventItemsFn, GetCurrentUserFn, LogOutFn,
    NovoteFn, UpvoteFn,
};
use eventboard_ui::App;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

const SESSION_IDLE_DAYS: i64 = 7;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::from_env()
        .await
        .expect("Failed to initialise application context");

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<GetAllEventItemsFn>();
    server_fn::axum::register_explicit::<UpvoteFn>();
    server_fn::axum::register_explicit::<DownvoteFn>();
    server_fn::axum::register_explicit::<NovoteFn>();
    server_fn::axum::register_explicit::<CreateTicketFn>();
    server_fn::axum::register_explicit::<DeleteTicketFn>();
    server_fn::axum::register_explicit::<GetCurrentUserFn>();
    server_fn::axum::register_explicit::<LogOutFn>();
    tracing::info!("Registered server functions");

    let secure_cookies = std::env::var("SESSION_SECURE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(SESSION_IDLE_DAYS)));

    let app = Router::new()
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(session_layer),
        )
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos_meta::*;

    let css = r#"
        :root {
            --base: #faf4ed;
            --surface: #fffaf3;
            --overlay: #f2e9e1;
            --muted: #9893a5;
            --subtle: #797593;
            --text: #575279;
            --love: #b4637a;
            --gold: #ea9d34;
            --pine: #286983;
            --foam: #56949f;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Inter', -apple-system, sans-serif;
            background: var(--base);
            color: var(--text);
            min-height: 100vh;
        }
        .nav { display: flex; gap: 1rem; align-items: center; padding: 1rem 1.5rem; border-bottom: 1px solid var(--overlay); }
        .nav__brand { font-weight: 800; color: var(--love); text-decoration: none; margin-right: auto; }
        .nav__link { color: var(--subtle); text-decoration: none; }
        .container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
        .hero { text-align: center; padding: 2rem 0 1.5rem; }
        .hero__title { font-size: clamp(2rem, 5vw, 3rem); color: var(--love); font-weight: 800; margin-bottom: 0.5rem; }
        .hero__subtitle { color: var(--subtle); font-size: 1.1rem; }
        .filter-button { display: inline-block; margin-bottom: 1rem; padding: 0.5rem 1rem; border-radius: 8px; background: var(--pine); color: var(--base); text-decoration: none; }
        .loading { display: flex; justify-content: center; padding: 2rem; }
        .loading__spinner {
            width: 40px; height: 40px; border: 4px solid var(--overlay);
            border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
        }
        @keyframes spin { to { transform: rotate(360deg); } }
        .event-list { display: flex; flex-direction: column; gap: 1rem; }
        .event-card { display: flex; gap: 1rem; background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1rem; }
        .event-card--expanded { border-color: var(--foam); }
        .event-card__votes { display: flex; flex-direction: column; align-items: center; gap: 0.25rem; }
        .vote { background: none; border: none; color: var(--muted); cursor: pointer; font-size: 1.1rem; }
        .vote--active.vote--up { color: var(--pine); }
        .vote--active.vote--down { color: var(--love); }
        .vote__count { font-weight: 700; }
        .event-card__body { flex: 1; }
        .event-card__header { display: flex; gap: 0.75rem; align-items: baseline; cursor: pointer; }
        .event-card__title { font-size: 1.2rem; color: var(--text); }
        .event-card__category { color: var(--foam); font-size: 0.9rem; }
        .event-card__badge { color: var(--gold); font-size: 0.8rem; font-weight: 700; }
        .event-card__meta, .event-card__capacity { color: var(--subtle); font-size: 0.95rem; margin-top: 0.25rem; }
        .event-card__details { margin-top: 0.75rem; line-height: 1.6; }
        .event-card__reviews { display: grid; grid-template-columns: auto auto; gap: 0.25rem 1rem; margin-top: 0.5rem; }
        .event-card__actions { display: flex; gap: 0.5rem; margin-top: 0.75rem; }
        .event-card__attend, .event-card__rate, .rate-form__submit, .filter-form__button {
            padding: 0.5rem 1rem; border: none; border-radius: 8px; font-weight: 600; cursor: pointer;
            background: var(--pine); color: var(--base);
        }
        .event-card__attend--active { background: var(--foam); }
        .event-card__attend:disabled { background: var(--muted); cursor: not-allowed; }
        .event-card__rate { background: var(--gold); }
        .modal-backdrop { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.35); }
        .modal {
            position: fixed; top: 15vh; left: 50%; transform: translateX(-50%);
            width: min(90vw, 480px); background: var(--surface); border-radius: 12px; padding: 1.5rem;
        }
        .modal__header { display: flex; justify-content: space-between; align-items: center; }
        .modal__title { color: var(--love); font-size: 1.3rem; }
        .modal__close { background: none; border: none; font-size: 1.5rem; cursor: pointer; color: var(--subtle); }
        .modal__subtitle { color: var(--subtle); margin: 0.5rem 0 1rem; }
        .rate-form { display: flex; flex-direction: column; gap: 1rem; }
        .rate-form__field { display: flex; flex-direction: column; gap: 0.25rem; }
        .rate-form__field--inline { flex-direction: row; align-items: center; gap: 0.5rem; }
        .filter-form { display: flex; flex-direction: column; gap: 1rem; margin-top: 1.5rem; }
        .filter-form__field { display: flex; flex-direction: column; gap: 0.25rem; }
        .filter-form__input, .rate-form__select {
            padding: 0.75rem 1rem; border: 2px solid var(--overlay); border-radius: 8px;
            background: var(--surface); color: var(--text); font-size: 1rem;
        }
        .filter-form__clear { color: var(--subtle); }
        .error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 1rem 0; }
        .error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
        .error__message { color: #8b3d4d; }
        .error__retry { margin-top: 1rem; padding: 0.5rem 1rem; background: var(--love); color: var(--base); border: none; border-radius: 4px; cursor: pointer; }
        .logout { text-align: center; color: var(--subtle); padding: 3rem 0; }
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <style>{css}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
