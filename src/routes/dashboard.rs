use axum::{Json, Router, extract::State, routing::get};

use crate::{
    config::DashboardConfig,
    dto::dashboard::DashboardHome,
    error::AppResult,
    middleware::session::SessionUser,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/navigation", get(navigation))
        .route("/home", get(home))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/navigation",
    responses(
        (status = 200, description = "Navigation tree for the sidebar", body = ApiResponse<DashboardConfig>)
    ),
    tag = "Dashboard"
)]
pub async fn navigation(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardConfig>>> {
    Ok(Json(ApiResponse::success(
        "Navigation",
        state.dashboard.clone(),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/home",
    responses(
        (status = 200, description = "Session-gated home view", body = ApiResponse<DashboardHome>),
        (status = 403, description = "Missing or invalid session token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn home(
    State(state): State<AppState>,
    session: SessionUser,
) -> AppResult<Json<ApiResponse<DashboardHome>>> {
    let data = DashboardHome {
        greeting: format!("Welcome back, {}", session.name),
        user: session.subject,
        navigation: state.dashboard.clone(),
    };

    Ok(Json(ApiResponse::success(
        "Home",
        data,
        Some(Meta::empty()),
    )))
}
