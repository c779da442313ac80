use serde::Serialize;
use sqlx::FromRow;

/// Full user row, including the stored bcrypt hash. Fetched only by the
/// login path; deliberately not Serialize so the hash can never reach the
/// wire.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub national_id: String,
    pub name: String,
    pub password_hash: String,
}

/// User columns safe to return to clients.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserProfile {
    pub id: i32,
    pub national_id: String,
    pub name: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            national_id: user.national_id,
            name: user.name,
        }
    }
}
