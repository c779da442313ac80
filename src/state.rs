use sqlx::PgPool;

/// Shared handler state. Built once in `main` and injected through the
/// router; the pool is the only shared mutable resource in the system.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
