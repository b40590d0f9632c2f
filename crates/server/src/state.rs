use sea_orm::DatabaseConnection;

/// Router state. The pool is built once at startup and cloned into each
/// request; clones share the same underlying pool.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
