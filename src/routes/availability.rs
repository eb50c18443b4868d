use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, post},
};

use crate::{
    dto::availability::{
        AdjustAvailableRoomsRequest, AvailabilityList, BlockDateRequest, BookRoomsRequest,
        CreateAvailabilityRequest, ReleaseRoomsRequest,
    },
    error::AppResult,
    models::Availability,
    response::ApiResponse,
    routes::params::AvailabilityListQuery,
    services::availability_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_availability).post(create_availability))
        .route("/{id}", get(get_availability))
        .route("/{id}", patch(adjust_available_rooms))
        .route("/{id}/book", post(book_rooms))
        .route("/{id}/release", post(release_rooms))
        .route("/{id}/block", post(block_date))
        .route("/{id}/unblock", post(unblock_date))
}

#[utoipa::path(
    get,
    path = "/api/availability",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("room_type_id" = Option<String>, Query, description = "Filter by room type"),
        ("hotel_id" = Option<String>, Query, description = "Filter by hotel"),
        ("from" = Option<String>, Query, description = "First date, YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Last date, YYYY-MM-DD"),
    ),
    responses(
        (status = 200, description = "List availability rows", body = ApiResponse<AvailabilityList>)
    ),
    tag = "Availability"
)]
pub async fn list_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityListQuery>,
) -> AppResult<Json<ApiResponse<AvailabilityList>>> {
    let resp = availability_service::list_availability(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/availability/{id}",
    params(
        ("id" = String, Path, description = "Availability ID")
    ),
    responses(
        (status = 200, description = "Get availability row", body = ApiResponse<Availability>),
        (status = 404, description = "Row not found"),
    ),
    tag = "Availability"
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Availability>>> {
    let resp = availability_service::get_availability(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/availability",
    request_body = CreateAvailabilityRequest,
    responses(
        (status = 200, description = "Create availability row", body = ApiResponse<Availability>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Room type not found"),
        (status = 409, description = "Row already exists for this room type and date"),
    ),
    tag = "Availability"
)]
pub async fn create_availability(
    State(state): State<AppState>,
    Json(payload): Json<CreateAvailabilityRequest>,
) -> AppResult<Json<ApiResponse<Availability>>> {
    let resp = availability_service::create_availability(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/availability/{id}",
    params(
        ("id" = String, Path, description = "Availability ID")
    ),
    request_body = AdjustAvailableRoomsRequest,
    responses(
        (status = 200, description = "Adjust the night's capacity", body = ApiResponse<Availability>),
        (status = 404, description = "Row not found"),
        (status = 409, description = "Capacity below booked rooms"),
    ),
    tag = "Availability"
)]
pub async fn adjust_available_rooms(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AdjustAvailableRoomsRequest>,
) -> AppResult<Json<ApiResponse<Availability>>> {
    let resp = availability_service::adjust_available_rooms(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/availability/{id}/book",
    params(
        ("id" = String, Path, description = "Availability ID")
    ),
    request_body = BookRoomsRequest,
    responses(
        (status = 200, description = "Book rooms for the night", body = ApiResponse<Availability>),
        (status = 404, description = "Row not found"),
        (status = 409, description = "Capacity exceeded"),
        (status = 423, description = "Date is blocked"),
    ),
    tag = "Availability"
)]
pub async fn book_rooms(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BookRoomsRequest>,
) -> AppResult<Json<ApiResponse<Availability>>> {
    let resp = availability_service::book_rooms(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/availability/{id}/release",
    params(
        ("id" = String, Path, description = "Availability ID")
    ),
    request_body = ReleaseRoomsRequest,
    responses(
        (status = 200, description = "Release booked rooms, flooring at zero", body = ApiResponse<Availability>),
        (status = 404, description = "Row not found"),
    ),
    tag = "Availability"
)]
pub async fn release_rooms(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ReleaseRoomsRequest>,
) -> AppResult<Json<ApiResponse<Availability>>> {
    let resp = availability_service::release_rooms(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/availability/{id}/block",
    params(
        ("id" = String, Path, description = "Availability ID")
    ),
    request_body = BlockDateRequest,
    responses(
        (status = 200, description = "Block the date", body = ApiResponse<Availability>),
        (status = 400, description = "Missing block reason"),
        (status = 404, description = "Row not found"),
    ),
    tag = "Availability"
)]
pub async fn block_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BlockDateRequest>,
) -> AppResult<Json<ApiResponse<Availability>>> {
    let resp = availability_service::block_date(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/availability/{id}/unblock",
    params(
        ("id" = String, Path, description = "Availability ID")
    ),
    responses(
        (status = 200, description = "Unblock the date", body = ApiResponse<Availability>),
        (status = 404, description = "Row not found"),
    ),
    tag = "Availability"
)]
pub async fn unblock_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Availability>>> {
    let resp = availability_service::unblock_date(&state, &id).await?;
    Ok(Json(resp))
}
