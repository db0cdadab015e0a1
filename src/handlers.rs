use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::relay::{ProcessRequest, ProcessResult, RelayError};
use crate::state::AppState;

pub async fn process_text(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<ProcessResult>, RelayError> {
    let Json(request) = payload.map_err(|e| {
        debug!("Rejected request body: {}", e);
        RelayError::InvalidRequest
    })?;

    match state.relay.process(request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            warn!("Error processing text: {}", e);
            Err(e)
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "upstream_configured": state.relay.is_configured()
    }))
}
