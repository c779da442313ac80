use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::require;
use crate::database::models::Student;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StudentPayload {
    pub national_id: Option<String>,
    pub name: Option<String>,
}

/// GET /api/students
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    let students = sqlx::query_as::<_, Student>(
        "SELECT id, national_id, name FROM students ORDER BY id ASC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(students))
}

/// POST /api/students
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<StudentPayload>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let national_id = require(payload.national_id.as_deref(), "national_id")?;
    let name = require(payload.name.as_deref(), "name")?;

    let created = sqlx::query_as::<_, Student>(
        "INSERT INTO students (national_id, name) VALUES ($1, $2) \
         RETURNING id, national_id, name",
    )
    .bind(&national_id)
    .bind(&name)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/students/:id - blind update, missing ids succeed as a no-op
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentPayload>,
) -> ApiResult<Json<Value>> {
    let national_id = require(payload.national_id.as_deref(), "national_id")?;
    let name = require(payload.name.as_deref(), "name")?;

    sqlx::query("UPDATE students SET national_id = $1, name = $2 WHERE id = $3")
        .bind(&national_id)
        .bind(&name)
        .bind(id)
        .execute(&state.pool)
        .await?;

    Ok(Json(json!({ "msg": "student updated" })))
}

/// DELETE /api/students/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Value>> {
    sqlx::query("DELETE FROM students WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    Ok(Json(json!({ "msg": "student deleted" })))
}
