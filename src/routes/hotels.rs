use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, put},
};

use crate::{
    dto::hotels::{
        AddHotelImageRequest, CancellationPolicyList, CreateCancellationPolicyRequest,
        CreateHotelRequest, HotelDetail, HotelImageList, HotelList, UpdateCancellationPolicyRequest,
        UpdateHotelImageRequest, UpdateHotelRequest,
    },
    error::AppResult,
    models::{CancellationPolicy, Hotel, HotelImage},
    response::ApiResponse,
    routes::params::HotelQuery,
    services::hotel_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_hotels).post(create_hotel))
        .route("/{id}", get(get_hotel).put(update_hotel).delete(delete_hotel))
        .route("/{id}/images", get(list_images).post(add_image))
        .route(
            "/{id}/images/{image_id}",
            put(update_image).delete(delete_image),
        )
        .route("/{id}/policies", get(list_policies).post(add_policy))
        .route(
            "/{id}/policies/{policy_id}",
            put(update_policy).delete(delete_policy),
        )
}

#[utoipa::path(
    get,
    path = "/api/hotels",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("q" = Option<String>, Query, description = "Search over name, city, country"),
        ("company_id" = Option<String>, Query, description = "Filter by company"),
        ("city" = Option<String>, Query, description = "Filter by city"),
        ("country" = Option<String>, Query, description = "Filter by country"),
        ("min_star_rating" = Option<i32>, Query, description = "Minimum star rating"),
        ("active_only" = Option<bool>, Query, description = "Only active hotels"),
        ("sort_by" = Option<String>, Query, description = "Sort by: created_at, name, star_rating"),
        ("sort_order" = Option<String>, Query, description = "Sort order: asc, desc"),
    ),
    responses(
        (status = 200, description = "List hotels", body = ApiResponse<HotelList>)
    ),
    tag = "Hotels"
)]
pub async fn list_hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelQuery>,
) -> AppResult<Json<ApiResponse<HotelList>>> {
    let resp = hotel_service::list_hotels(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}",
    params(
        ("id" = String, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Hotel with images and policies", body = ApiResponse<HotelDetail>),
        (status = 404, description = "Hotel not found"),
    ),
    tag = "Hotels"
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<HotelDetail>>> {
    let resp = hotel_service::get_hotel(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/hotels",
    request_body = CreateHotelRequest,
    responses(
        (status = 200, description = "Create hotel", body = ApiResponse<Hotel>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Company not found"),
    ),
    tag = "Hotels"
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    Json(payload): Json<CreateHotelRequest>,
) -> AppResult<Json<ApiResponse<Hotel>>> {
    let resp = hotel_service::create_hotel(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/hotels/{id}",
    params(
        ("id" = String, Path, description = "Hotel ID")
    ),
    request_body = UpdateHotelRequest,
    responses(
        (status = 200, description = "Update hotel", body = ApiResponse<Hotel>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Hotel not found"),
    ),
    tag = "Hotels"
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateHotelRequest>,
) -> AppResult<Json<ApiResponse<Hotel>>> {
    let resp = hotel_service::update_hotel(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/hotels/{id}",
    params(
        ("id" = String, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Delete hotel and every dependent row"),
        (status = 404, description = "Hotel not found"),
    ),
    tag = "Hotels"
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = hotel_service::delete_hotel(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}/images",
    params(
        ("id" = String, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "List hotel images", body = ApiResponse<HotelImageList>),
        (status = 404, description = "Hotel not found"),
    ),
    tag = "Hotels"
)]
pub async fn list_images(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<HotelImageList>>> {
    let resp = hotel_service::list_images(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/hotels/{id}/images",
    params(
        ("id" = String, Path, description = "Hotel ID")
    ),
    request_body = AddHotelImageRequest,
    responses(
        (status = 200, description = "Add hotel image", body = ApiResponse<HotelImage>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Hotel not found"),
    ),
    tag = "Hotels"
)]
pub async fn add_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AddHotelImageRequest>,
) -> AppResult<Json<ApiResponse<HotelImage>>> {
    let resp = hotel_service::add_image(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/hotels/{id}/images/{image_id}",
    params(
        ("id" = String, Path, description = "Hotel ID"),
        ("image_id" = String, Path, description = "Image ID"),
    ),
    request_body = UpdateHotelImageRequest,
    responses(
        (status = 200, description = "Update hotel image", body = ApiResponse<HotelImage>),
        (status = 404, description = "Image not found"),
    ),
    tag = "Hotels"
)]
pub async fn update_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(String, String)>,
    Json(payload): Json<UpdateHotelImageRequest>,
) -> AppResult<Json<ApiResponse<HotelImage>>> {
    let resp = hotel_service::update_image(&state, &id, &image_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/hotels/{id}/images/{image_id}",
    params(
        ("id" = String, Path, description = "Hotel ID"),
        ("image_id" = String, Path, description = "Image ID"),
    ),
    responses(
        (status = 200, description = "Delete hotel image"),
        (status = 404, description = "Image not found"),
    ),
    tag = "Hotels"
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(String, String)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = hotel_service::delete_image(&state, &id, &image_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}/policies",
    params(
        ("id" = String, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "List cancellation policies", body = ApiResponse<CancellationPolicyList>),
        (status = 404, description = "Hotel not found"),
    ),
    tag = "Hotels"
)]
pub async fn list_policies(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<CancellationPolicyList>>> {
    let resp = hotel_service::list_policies(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/hotels/{id}/policies",
    params(
        ("id" = String, Path, description = "Hotel ID")
    ),
    request_body = CreateCancellationPolicyRequest,
    responses(
        (status = 200, description = "Add cancellation policy", body = ApiResponse<CancellationPolicy>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Hotel not found"),
    ),
    tag = "Hotels"
)]
pub async fn add_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateCancellationPolicyRequest>,
) -> AppResult<Json<ApiResponse<CancellationPolicy>>> {
    let resp = hotel_service::add_policy(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/hotels/{id}/policies/{policy_id}",
    params(
        ("id" = String, Path, description = "Hotel ID"),
        ("policy_id" = String, Path, description = "Policy ID"),
    ),
    request_body = UpdateCancellationPolicyRequest,
    responses(
        (status = 200, description = "Update cancellation policy", body = ApiResponse<CancellationPolicy>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Policy not found"),
    ),
    tag = "Hotels"
)]
pub async fn update_policy(
    State(state): State<AppState>,
    Path((id, policy_id)): Path<(String, String)>,
    Json(payload): Json<UpdateCancellationPolicyRequest>,
) -> AppResult<Json<ApiResponse<CancellationPolicy>>> {
    let resp = hotel_service::update_policy(&state, &id, &policy_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/hotels/{id}/policies/{policy_id}",
    params(
        ("id" = String, Path, description = "Hotel ID"),
        ("policy_id" = String, Path, description = "Policy ID"),
    ),
    responses(
        (status = 200, description = "Delete cancellation policy"),
        (status = 404, description = "Policy not found"),
    ),
    tag = "Hotels"
)]
pub async fn delete_policy(
    State(state): State<AppState>,
    Path((id, policy_id)): Path<(String, String)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = hotel_service::delete_policy(&state, &id, &policy_id).await?;
    Ok(Json(resp))
}
