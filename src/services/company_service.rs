use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::companies::{CompanyList, CreateCompanyRequest},
    entity::companies::{ActiveModel, Column, Entity as Companies, Model as CompanyModel},
    error::{AppError, AppResult},
    models::Company,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_companies(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<CompanyList>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = Companies::find().order_by_asc(Column::Name);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(company_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Companies", CompanyList { items }, Some(meta)))
}

pub async fn get_company(state: &AppState, id: &str) -> AppResult<ApiResponse<Company>> {
    let company = Companies::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(company_from_entity);
    let company = match company {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Company", company, None))
}

pub async fn create_company(
    state: &AppState,
    payload: CreateCompanyRequest,
) -> AppResult<ApiResponse<Company>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("company name must not be empty".into()));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(payload.name),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let company = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Company created",
        company_from_entity(company),
        Some(Meta::empty()),
    ))
}

/// Deleting a company cascades through seasons, hotels and everything below
/// them. Destructive and non-recoverable, so it is audit logged.
pub async fn delete_company(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Companies::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "company_delete",
        Some("companies"),
        Some(serde_json::json!({ "company_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

fn company_from_entity(model: CompanyModel) -> Company {
    Company {
        id: model.id,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
