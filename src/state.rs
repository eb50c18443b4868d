use crate::config::DashboardConfig;
use crate::db::{DbPool, OrmConn};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
    pub dashboard: DashboardConfig,
}
