use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use skim_core::{AnalysisItemResult, AnalyzeRequest, Error};

use crate::AppState;

/// Maps pipeline errors onto the HTTP surface: bad input is the caller's
/// fault, anything else reaching the handler top level is ours. Per-item
/// failures never surface here; they ride inside the 200 response body.
pub struct ApiError(pub Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::Input(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Vec<AnalysisItemResult>>, ApiError> {
    let Json(request) = payload
        .map_err(|rejection| ApiError(Error::Input(format!("Invalid JSON input: {}", rejection))))?;

    if request.urls.is_empty() {
        return Err(ApiError(Error::Input("No URLs provided".to_string())));
    }

    tracing::info!("analyzing {} urls", request.urls.len());
    let results = state.manager.analyze_urls(&request.urls).await;
    Ok(Json(results))
}
