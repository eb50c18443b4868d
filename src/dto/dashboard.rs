use serde::Serialize;
use utoipa::ToSchema;

use crate::config::DashboardConfig;

/// Payload behind the session-gated home view.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardHome {
    pub greeting: String,
    pub user: String,
    pub navigation: DashboardConfig,
}
