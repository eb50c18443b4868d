use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, put},
};

use crate::{
    dto::rates::{CreateRoomRateRequest, RateQuote, RoomRateList, UpdateRoomRateRequest},
    error::AppResult,
    models::RoomRate,
    response::ApiResponse,
    routes::params::{RateListQuery, RateResolveQuery},
    services::rate_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rates).post(create_rate))
        .route("/resolve", get(resolve_rate))
        .route("/{id}", get(get_rate))
        .route("/{id}", put(update_rate))
        .route("/{id}", delete(delete_rate))
}

#[utoipa::path(
    get,
    path = "/api/rates",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("hotel_id" = Option<String>, Query, description = "Filter by hotel"),
        ("room_type_id" = Option<String>, Query, description = "Filter by room type"),
        ("active_only" = Option<bool>, Query, description = "Only active rates"),
    ),
    responses(
        (status = 200, description = "List room rates", body = ApiResponse<RoomRateList>)
    ),
    tag = "Rates"
)]
pub async fn list_rates(
    State(state): State<AppState>,
    Query(query): Query<RateListQuery>,
) -> AppResult<Json<ApiResponse<RoomRateList>>> {
    let resp = rate_service::list_rates(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/rates/resolve",
    params(
        ("room_type_id" = String, Query, description = "Room type ID"),
        ("date" = String, Query, description = "Stay date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "Resolved nightly rate", body = ApiResponse<RateQuote>),
        (status = 404, description = "No applicable rate"),
        (status = 409, description = "Multiple rates with equal specificity"),
    ),
    tag = "Rates"
)]
pub async fn resolve_rate(
    State(state): State<AppState>,
    Query(query): Query<RateResolveQuery>,
) -> AppResult<Json<ApiResponse<RateQuote>>> {
    let resp = rate_service::resolve_rate(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/rates/{id}",
    params(
        ("id" = String, Path, description = "Room rate ID")
    ),
    responses(
        (status = 200, description = "Get room rate", body = ApiResponse<RoomRate>),
        (status = 404, description = "Rate not found"),
    ),
    tag = "Rates"
)]
pub async fn get_rate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<RoomRate>>> {
    let resp = rate_service::get_rate(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/rates",
    request_body = CreateRoomRateRequest,
    responses(
        (status = 200, description = "Create room rate; the final rate is computed server side", body = ApiResponse<RoomRate>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Room type or season not found"),
    ),
    tag = "Rates"
)]
pub async fn create_rate(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoomRateRequest>,
) -> AppResult<Json<ApiResponse<RoomRate>>> {
    let resp = rate_service::create_rate(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/rates/{id}",
    params(
        ("id" = String, Path, description = "Room rate ID")
    ),
    request_body = UpdateRoomRateRequest,
    responses(
        (status = 200, description = "Update room rate; the final rate is recomputed", body = ApiResponse<RoomRate>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Rate not found"),
    ),
    tag = "Rates"
)]
pub async fn update_rate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRoomRateRequest>,
) -> AppResult<Json<ApiResponse<RoomRate>>> {
    let resp = rate_service::update_rate(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/rates/{id}",
    params(
        ("id" = String, Path, description = "Room rate ID")
    ),
    responses(
        (status = 200, description = "Delete room rate"),
        (status = 404, description = "Rate not found"),
    ),
    tag = "Rates"
)]
pub async fn delete_rate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = rate_service::delete_rate(&state, &id).await?;
    Ok(Json(resp))
}
