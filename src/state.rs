use sqlx::PgPool;

/// Shared by every handler. The pool is the only process-wide resource;
/// cloning the state clones the pool handle, not the connections.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
