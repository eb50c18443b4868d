use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, put},
};

use crate::{
    dto::seasons::{CreateSeasonRequest, SeasonList, UpdateSeasonRequest},
    error::AppResult,
    models::Season,
    response::ApiResponse,
    routes::params::SeasonListQuery,
    services::season_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_seasons).post(create_season))
        .route("/{id}", get(get_season))
        .route("/{id}", put(update_season))
        .route("/{id}", delete(delete_season))
}

#[utoipa::path(
    get,
    path = "/api/seasons",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("company_id" = Option<String>, Query, description = "Filter by company"),
    ),
    responses(
        (status = 200, description = "List seasons", body = ApiResponse<SeasonList>)
    ),
    tag = "Seasons"
)]
pub async fn list_seasons(
    State(state): State<AppState>,
    Query(query): Query<SeasonListQuery>,
) -> AppResult<Json<ApiResponse<SeasonList>>> {
    let resp = season_service::list_seasons(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/seasons/{id}",
    params(
        ("id" = String, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Get season", body = ApiResponse<Season>),
        (status = 404, description = "Season not found"),
    ),
    tag = "Seasons"
)]
pub async fn get_season(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Season>>> {
    let resp = season_service::get_season(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/seasons",
    request_body = CreateSeasonRequest,
    responses(
        (status = 200, description = "Create season", body = ApiResponse<Season>),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Company not found"),
    ),
    tag = "Seasons"
)]
pub async fn create_season(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeasonRequest>,
) -> AppResult<Json<ApiResponse<Season>>> {
    let resp = season_service::create_season(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/seasons/{id}",
    params(
        ("id" = String, Path, description = "Season ID")
    ),
    request_body = UpdateSeasonRequest,
    responses(
        (status = 200, description = "Update season", body = ApiResponse<Season>),
        (status = 400, description = "Invalid date range"),
        (status = 404, description = "Season not found"),
    ),
    tag = "Seasons"
)]
pub async fn update_season(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSeasonRequest>,
) -> AppResult<Json<ApiResponse<Season>>> {
    let resp = season_service::update_season(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/seasons/{id}",
    params(
        ("id" = String, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Delete season"),
        (status = 404, description = "Season not found"),
    ),
    tag = "Seasons"
)]
pub async fn delete_season(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = season_service::delete_season(&state, &id).await?;
    Ok(Json(resp))
}
