use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, put},
};

use crate::{
    dto::room_types::{CreateRoomTypeRequest, RoomTypeList, UpdateRoomTypeRequest},
    error::AppResult,
    models::RoomType,
    response::ApiResponse,
    routes::params::RoomTypeListQuery,
    services::room_type_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_room_types).post(create_room_type))
        .route("/{id}", get(get_room_type))
        .route("/{id}", put(update_room_type))
        .route("/{id}", delete(delete_room_type))
}

#[utoipa::path(
    get,
    path = "/api/room-types",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("hotel_id" = Option<String>, Query, description = "Filter by hotel"),
        ("active_only" = Option<bool>, Query, description = "Only active room types"),
    ),
    responses(
        (status = 200, description = "List room types", body = ApiResponse<RoomTypeList>)
    ),
    tag = "Room Types"
)]
pub async fn list_room_types(
    State(state): State<AppState>,
    Query(query): Query<RoomTypeListQuery>,
) -> AppResult<Json<ApiResponse<RoomTypeList>>> {
    let resp = room_type_service::list_room_types(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/room-types/{id}",
    params(
        ("id" = String, Path, description = "Room type ID")
    ),
    responses(
        (status = 200, description = "Get room type", body = ApiResponse<RoomType>),
        (status = 404, description = "Room type not found"),
    ),
    tag = "Room Types"
)]
pub async fn get_room_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<RoomType>>> {
    let resp = room_type_service::get_room_type(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/room-types",
    request_body = CreateRoomTypeRequest,
    responses(
        (status = 200, description = "Create room type", body = ApiResponse<RoomType>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Hotel not found"),
    ),
    tag = "Room Types"
)]
pub async fn create_room_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoomTypeRequest>,
) -> AppResult<Json<ApiResponse<RoomType>>> {
    let resp = room_type_service::create_room_type(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/room-types/{id}",
    params(
        ("id" = String, Path, description = "Room type ID")
    ),
    request_body = UpdateRoomTypeRequest,
    responses(
        (status = 200, description = "Update room type", body = ApiResponse<RoomType>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Room type not found"),
    ),
    tag = "Room Types"
)]
pub async fn update_room_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRoomTypeRequest>,
) -> AppResult<Json<ApiResponse<RoomType>>> {
    let resp = room_type_service::update_room_type(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/room-types/{id}",
    params(
        ("id" = String, Path, description = "Room type ID")
    ),
    responses(
        (status = 200, description = "Delete room type and its rates and availability"),
        (status = 404, description = "Room type not found"),
    ),
    tag = "Room Types"
)]
pub async fn delete_room_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = room_type_service::delete_room_type(&state, &id).await?;
    Ok(Json(resp))
}
