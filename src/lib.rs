use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
pub type DbPool = Pool<SqliteConnectionManager>;

/// Shared handler state. `pool` is `None` when no `DATABASE_PATH` was configured.
#[derive(Clone)]
pub struct AppState {
    pub pool: Option<DbPool>,
}

pub mod config;
pub mod helper;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod setup;
