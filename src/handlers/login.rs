use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use super::require;
use crate::auth;
use crate::database::models::{User, UserProfile};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub national_id: Option<String>,
    pub password: Option<String>,
}

/// POST /api/login - authenticate by cedula and password
///
/// Looks up the user by national_id and verifies the plaintext against the
/// stored bcrypt hash. The two failure messages are distinct on purpose:
/// the existing frontend tells the user which one happened.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<Value>> {
    let national_id = require(payload.national_id.as_deref(), "national_id")?;
    let password = require(payload.password.as_deref(), "password")?;

    let user = sqlx::query_as::<_, User>(
        "SELECT id, national_id, name, password_hash FROM users WHERE national_id = $1",
    )
    .bind(&national_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| ApiError::unauthorized("user not found"))?;

    let matches = auth::verify_password(password, user.password_hash.clone()).await?;
    if !matches {
        return Err(ApiError::unauthorized("incorrect password"));
    }

    tracing::info!(user_id = user.id, "login ok");

    // Project down to the safe columns; the hash stays out of the body.
    let user = UserProfile::from(user);

    Ok(Json(json!({
        "user": user,
        "msg": "welcome",
    })))
}
