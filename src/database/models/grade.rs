use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Raw grade row as stored. Returned from creates, where the caller already
/// knows which student and subject it sent.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Grade {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    pub score: Decimal,
}

/// Denormalized listing row: student and subject resolved to their names.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GradeReport {
    pub id: i32,
    pub student: String,
    pub subject: String,
    pub score: Decimal,
}
