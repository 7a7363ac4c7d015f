//! Senti Web Server
//!
//! Axum-based gateway exposing `POST /analyze`.

pub mod routes;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, Method},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use senti_core::{Dispatcher, SentimentClient};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use state::{AppState, FailureStatus, ServerConfig, DEFAULT_PORT};

/// Create the application router.
///
/// When `static_dir` is given, every path other than `/analyze` is served
/// from it.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let mut router = Router::new().route(
        "/analyze",
        post(routes::analyze::analyze).fallback(routes::analyze::method_not_allowed),
    );

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(reject_bare_options))
        .with_state(state)
}

/// `CorsLayer` answers every OPTIONS itself. Only real preflights may reach
/// it; a plain OPTIONS on `/analyze` is a wrong method like any other.
async fn reject_bare_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS
        && request.uri().path() == "/analyze"
        && !request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
    {
        return routes::analyze::method_not_allowed().await.into_response();
    }
    next.run(request).await
}

/// Run the web server.
///
/// The client is built by the caller before this point, so a missing
/// credential never reaches the listener.
pub async fn run_server(
    client: Arc<dyn SentimentClient>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(client).with_timeout(config.timeout);
    let state = AppState::new(dispatcher).with_failure_status(config.failure_status);
    let app = create_router(state, config.static_dir.as_deref());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        timeout = ?config.timeout,
        failure_status = ?config.failure_status,
        "Web server listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
