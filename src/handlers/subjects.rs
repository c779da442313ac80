use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::require;
use crate::database::models::Subject;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SubjectPayload {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// GET /api/subjects
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Subject>>> {
    let subjects =
        sqlx::query_as::<_, Subject>("SELECT id, code, name FROM subjects ORDER BY id ASC")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(subjects))
}

/// POST /api/subjects
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SubjectPayload>,
) -> ApiResult<(StatusCode, Json<Subject>)> {
    let code = require(payload.code.as_deref(), "code")?;
    let name = require(payload.name.as_deref(), "name")?;

    let created = sqlx::query_as::<_, Subject>(
        "INSERT INTO subjects (code, name) VALUES ($1, $2) RETURNING id, code, name",
    )
    .bind(&code)
    .bind(&name)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/subjects/:id - blind update, missing ids succeed as a no-op
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SubjectPayload>,
) -> ApiResult<Json<Value>> {
    let code = require(payload.code.as_deref(), "code")?;
    let name = require(payload.name.as_deref(), "name")?;

    sqlx::query("UPDATE subjects SET code = $1, name = $2 WHERE id = $3")
        .bind(&code)
        .bind(&name)
        .bind(id)
        .execute(&state.pool)
        .await?;

    Ok(Json(json!({ "msg": "subject updated" })))
}

/// DELETE /api/subjects/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Value>> {
    sqlx::query("DELETE FROM subjects WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    Ok(Json(json!({ "msg": "subject deleted" })))
}
