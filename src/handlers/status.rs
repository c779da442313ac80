use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::database;
use crate::state::AppState;

/// GET /api - liveness check for the frontend
///
/// Always replies 200; the `database` field reflects an actual ping so the
/// body does not claim a connection that is not there.
pub async fn status(State(state): State<AppState>) -> Json<Value> {
    let database = match database::ping(&state.pool).await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!("status ping failed: {}", e);
            "unreachable"
        }
    };

    Json(json!({
        "status": "online",
        "database": database,
    }))
}
