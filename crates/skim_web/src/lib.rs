use axum::{routing::post, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/analyze", post(handlers::analyze))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use skim_core::{AnalysisItemResult, AnalyzeRequest, Error, Result};
}
