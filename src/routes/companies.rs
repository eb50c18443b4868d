use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get},
};

use crate::{
    dto::companies::{CompanyList, CreateCompanyRequest},
    error::AppResult,
    models::Company,
    response::ApiResponse,
    routes::params::Pagination,
    services::company_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route("/{id}", get(get_company))
        .route("/{id}", delete(delete_company))
}

#[utoipa::path(
    get,
    path = "/api/companies",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "List companies", body = ApiResponse<CompanyList>)
    ),
    tag = "Companies"
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<CompanyList>>> {
    let resp = company_service::list_companies(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(
        ("id" = String, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Get company", body = ApiResponse<Company>),
        (status = 404, description = "Company not found"),
    ),
    tag = "Companies"
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Company>>> {
    let resp = company_service::get_company(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 200, description = "Create company", body = ApiResponse<Company>),
        (status = 400, description = "Validation failed"),
    ),
    tag = "Companies"
)]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyRequest>,
) -> AppResult<Json<ApiResponse<Company>>> {
    let resp = company_service::create_company(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    params(
        ("id" = String, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Delete company and every dependent row"),
        (status = 404, description = "Company not found"),
    ),
    tag = "Companies"
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = company_service::delete_company(&state, &id).await?;
    Ok(Json(resp))
}
