use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::require;
use crate::auth;
use crate::database::models::UserProfile;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub national_id: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// POST /api/users - register a system user
///
/// The plaintext is hashed before the insert and never stored. There is no
/// pre-check on national_id; a duplicate surfaces only if the store enforces
/// its unique constraint.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserProfile>)> {
    let national_id = require(payload.national_id.as_deref(), "national_id")?;
    let name = require(payload.name.as_deref(), "name")?;
    let password = require(payload.password.as_deref(), "password")?;

    let hash = auth::hash_password(password).await?;

    let created = sqlx::query_as::<_, UserProfile>(
        "INSERT INTO users (national_id, name, password_hash) VALUES ($1, $2, $3) \
         RETURNING id, national_id, name",
    )
    .bind(&national_id)
    .bind(&name)
    .bind(&hash)
    .fetch_one(&state.pool)
    .await?;

    tracing::info!(user_id = created.id, "user registered");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/users - list users, hash excluded
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<UserProfile>>> {
    let users = sqlx::query_as::<_, UserProfile>(
        "SELECT id, national_id, name FROM users ORDER BY id ASC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(users))
}

/// DELETE /api/users/:id - blind delete, missing ids succeed silently
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Value>> {
    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    Ok(Json(json!({ "msg": "user deleted" })))
}
