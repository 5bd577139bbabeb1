use crate::config::Config;
use sea_orm::DatabaseConnection;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    /// When this state was built, used for the uptime metric.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config,
            started_at: Instant::now(),
        }
    }
}
