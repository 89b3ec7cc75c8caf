use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;

/// Shared per-process context handed to every handler.
///
/// The connection pool is the only shared resource; handlers open one scoped
/// transaction on it per mutating request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
