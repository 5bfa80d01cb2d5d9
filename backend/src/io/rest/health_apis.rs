use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Json, routing::get, Router};
use tracing::{error, info};

use crate::io::rest::error::ApiError;
use crate::AppState;
use shared::PingResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/ping-db", get(ping_db))
}

/// Confirm the database answers; a failure carries the driver's error text
pub async fn ping_db(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /ping-db");

    match state.allocation_service.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(PingResponse {
                status: "Connected to database!".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Database ping failed: {}", e);
            ApiError::from(e).into_response()
        }
    }
}
