//! Sentiment analysis route handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use senti_core::{AnalysisRequest, AnalysisResult};
use tracing::debug;

use crate::state::{AppState, FailureStatus};

/// `POST /analyze`.
///
/// The body is decoded as JSON whatever its `Content-Type`. Decode failures
/// are the only non-200 outcome by default; classification failures travel
/// in the JSON body.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AnalysisResult>), (StatusCode, String)> {
    // Parser text goes back verbatim. Fine for an internal tool, leaks
    // decoder internals at a public boundary.
    let req: AnalysisRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "Rejecting undecodable analyze body");
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    debug!(len = req.text.len(), "Dispatching classification");
    let result = state.dispatcher.dispatch(req.text).await;

    let status = match (result.is_failure(), state.failure_status) {
        (true, FailureStatus::BadGateway) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };

    Ok((status, Json(result)))
}

/// Any method other than POST on `/analyze`.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        "method not allowed",
    )
}
