use chrono::{NaiveDate, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::seasons::{CreateSeasonRequest, SeasonList, UpdateSeasonRequest},
    entity::{
        companies::Entity as Companies,
        seasons::{ActiveModel, Column, Entity as Seasons, Model as SeasonModel},
    },
    error::{AppError, AppResult},
    models::Season,
    response::{ApiResponse, Meta},
    routes::params::SeasonListQuery,
    state::AppState,
};

pub async fn list_seasons(
    state: &AppState,
    query: SeasonListQuery,
) -> AppResult<ApiResponse<SeasonList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut finder = Seasons::find().order_by_asc(Column::StartDate);
    if let Some(company_id) = query.company_id.as_ref().filter(|c| !c.is_empty()) {
        finder = finder.filter(Column::CompanyId.eq(company_id.clone()));
    }

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(season_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Seasons", SeasonList { items }, Some(meta)))
}

pub async fn get_season(state: &AppState, id: &str) -> AppResult<ApiResponse<Season>> {
    let season = Seasons::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(season_from_entity);
    let season = match season {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Season", season, None))
}

pub async fn create_season(
    state: &AppState,
    payload: CreateSeasonRequest,
) -> AppResult<ApiResponse<Season>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("season name must not be empty".into()));
    }
    validate_dates(payload.start_date, payload.end_date)?;

    if Companies::find_by_id(&payload.company_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound);
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        company_id: Set(payload.company_id),
        name: Set(payload.name),
        description: Set(payload.description),
        start_date: Set(payload.start_date),
        end_date: Set(payload.end_date),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let season = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Season created",
        season_from_entity(season),
        Some(Meta::empty()),
    ))
}

pub async fn update_season(
    state: &AppState,
    id: &str,
    payload: UpdateSeasonRequest,
) -> AppResult<ApiResponse<Season>> {
    let existing = Seasons::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(s) => s,
        None => return Err(AppError::NotFound),
    };

    let start_date = payload.start_date.unwrap_or(existing.start_date);
    let end_date = payload.end_date.unwrap_or(existing.end_date);
    validate_dates(start_date, end_date)?;
    if let Some(name) = payload.name.as_ref() {
        if name.trim().is_empty() {
            return Err(AppError::Validation("season name must not be empty".into()));
        }
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    active.start_date = Set(start_date);
    active.end_date = Set(end_date);
    active.updated_at = Set(Utc::now().into());

    let season = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        season_from_entity(season),
        Some(Meta::empty()),
    ))
}

pub async fn delete_season(state: &AppState, id: &str) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Seasons::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

// The schema does not constrain the date range, so every write path goes
// through this check.
fn validate_dates(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if start > end {
        return Err(AppError::Validation(format!(
            "start_date {start} is after end_date {end}"
        )));
    }
    Ok(())
}

fn season_from_entity(model: SeasonModel) -> Season {
    Season {
        id: model.id,
        company_id: model.company_id,
        name: model.name,
        description: model.description,
        start_date: model.start_date,
        end_date: model.end_date,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn accepts_ordered_and_single_day_ranges() {
        assert!(validate_dates(date(2026, 6, 1), date(2026, 8, 31)).is_ok());
        assert!(validate_dates(date(2026, 6, 1), date(2026, 6, 1)).is_ok());
    }

    #[test]
    fn rejects_inverted_range() {
        let err = validate_dates(date(2026, 9, 1), date(2026, 6, 1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
