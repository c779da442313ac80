use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::models::{Grade, GradeReport};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGradeRequest {
    pub student_id: Option<i32>,
    pub subject_id: Option<i32>,
    pub score: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGradeRequest {
    pub score: Option<Decimal>,
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(format!("{field} is required")))
}

/// GET /api/grades - denormalized listing
///
/// Replaces the two foreign keys with the referenced names so the frontend
/// table renders without extra lookups.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<GradeReport>>> {
    let grades = sqlx::query_as::<_, GradeReport>(
        "SELECT g.id, s.name AS student, m.name AS subject, g.score \
         FROM grades g \
         JOIN students s ON g.student_id = s.id \
         JOIN subjects m ON g.subject_id = m.id \
         ORDER BY g.id ASC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(grades))
}

/// POST /api/grades
///
/// Referential integrity is the store's job; an unknown student_id or
/// subject_id comes back as a constraint fault, not a 400.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateGradeRequest>,
) -> ApiResult<(StatusCode, Json<Grade>)> {
    let student_id = required(payload.student_id, "student_id")?;
    let subject_id = required(payload.subject_id, "subject_id")?;
    let score = required(payload.score, "score")?;

    let created = sqlx::query_as::<_, Grade>(
        "INSERT INTO grades (student_id, subject_id, score) VALUES ($1, $2, $3) \
         RETURNING id, student_id, subject_id, score",
    )
    .bind(student_id)
    .bind(subject_id)
    .bind(score)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/grades/:id - score only, blind update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGradeRequest>,
) -> ApiResult<Json<Value>> {
    let score = required(payload.score, "score")?;

    sqlx::query("UPDATE grades SET score = $1 WHERE id = $2")
        .bind(score)
        .bind(id)
        .execute(&state.pool)
        .await?;

    Ok(Json(json!({ "msg": "grade updated" })))
}

/// DELETE /api/grades/:id
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Value>> {
    sqlx::query("DELETE FROM grades WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    Ok(Json(json!({ "msg": "grade deleted" })))
}
