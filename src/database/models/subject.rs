use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Subject {
    pub id: i32,
    pub code: String,
    pub name: String,
}
