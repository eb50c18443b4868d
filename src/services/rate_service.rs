use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::rates::{CreateRoomRateRequest, RateQuote, RoomRateList, UpdateRoomRateRequest},
    entity::{
        hotels::Entity as Hotels,
        room_rates::{ActiveModel, Column, Entity as RoomRates, Model as RateModel},
        room_types::Entity as RoomTypes,
        seasons::{Column as SeasonCol, Entity as Seasons},
    },
    error::{AppError, AppResult},
    models::RoomRate,
    response::{ApiResponse, Meta},
    routes::params::{RateListQuery, RateResolveQuery},
    state::AppState,
};

pub async fn list_rates(
    state: &AppState,
    query: RateListQuery,
) -> AppResult<ApiResponse<RoomRateList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();
    if let Some(hotel_id) = query.hotel_id.as_ref().filter(|h| !h.is_empty()) {
        condition = condition.add(Column::HotelId.eq(hotel_id.clone()));
    }
    if let Some(room_type_id) = query.room_type_id.as_ref().filter(|r| !r.is_empty()) {
        condition = condition.add(Column::RoomTypeId.eq(room_type_id.clone()));
    }
    if query.active_only.unwrap_or(false) {
        condition = condition.add(Column::IsActive.eq(true));
    }

    let finder = RoomRates::find()
        .filter(condition)
        .order_by_asc(Column::ValidFrom);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(rate_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Room rates", RoomRateList { items }, Some(meta)))
}

pub async fn get_rate(state: &AppState, id: &str) -> AppResult<ApiResponse<RoomRate>> {
    let rate = RoomRates::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(rate_from_entity);
    let rate = match rate {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Room rate", rate, None))
}

pub async fn create_rate(
    state: &AppState,
    payload: CreateRoomRateRequest,
) -> AppResult<ApiResponse<RoomRate>> {
    let multiplier = payload.season_multiplier.unwrap_or(Decimal::ONE);
    let currency = payload.currency.unwrap_or_else(|| "USD".to_string());
    validate_rate_fields(
        payload.base_rate_per_night,
        multiplier,
        payload.valid_from,
        payload.valid_to,
        &currency,
    )?;

    let room_type = RoomTypes::find_by_id(&payload.room_type_id)
        .one(&state.orm)
        .await?;
    let room_type = match room_type {
        Some(rt) => rt,
        None => return Err(AppError::NotFound),
    };
    if room_type.hotel_id != payload.hotel_id {
        return Err(AppError::Validation(format!(
            "room type {} does not belong to hotel {}",
            payload.room_type_id, payload.hotel_id
        )));
    }

    if let Some(season_id) = payload.season_id.as_ref() {
        let season = Seasons::find_by_id(season_id).one(&state.orm).await?;
        let season = match season {
            Some(s) => s,
            None => return Err(AppError::NotFound),
        };
        let hotel = Hotels::find_by_id(&payload.hotel_id).one(&state.orm).await?;
        let hotel = match hotel {
            Some(h) => h,
            None => return Err(AppError::NotFound),
        };
        if season.company_id != hotel.company_id {
            return Err(AppError::Validation(format!(
                "season {} belongs to another company",
                season_id
            )));
        }
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        hotel_id: Set(payload.hotel_id),
        room_type_id: Set(payload.room_type_id),
        season_id: Set(payload.season_id),
        base_rate_per_night: Set(payload.base_rate_per_night),
        season_multiplier: Set(multiplier),
        final_rate_per_night: Set(final_rate(payload.base_rate_per_night, multiplier)),
        currency: Set(currency),
        is_active: Set(true),
        valid_from: Set(payload.valid_from),
        valid_to: Set(payload.valid_to),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let rate = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Room rate created",
        rate_from_entity(rate),
        Some(Meta::empty()),
    ))
}

pub async fn update_rate(
    state: &AppState,
    id: &str,
    payload: UpdateRoomRateRequest,
) -> AppResult<ApiResponse<RoomRate>> {
    let existing = RoomRates::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };

    let base = payload
        .base_rate_per_night
        .unwrap_or(existing.base_rate_per_night);
    let multiplier = payload
        .season_multiplier
        .unwrap_or(existing.season_multiplier);
    let valid_from = payload.valid_from.unwrap_or(existing.valid_from);
    let valid_to = payload.valid_to.unwrap_or(existing.valid_to);
    let currency = payload.currency.unwrap_or_else(|| existing.currency.clone());
    validate_rate_fields(base, multiplier, valid_from, valid_to, &currency)?;

    let mut active: ActiveModel = existing.into();
    active.base_rate_per_night = Set(base);
    active.season_multiplier = Set(multiplier);
    // the stored final rate is never trusted across a write
    active.final_rate_per_night = Set(final_rate(base, multiplier));
    active.currency = Set(currency);
    active.valid_from = Set(valid_from);
    active.valid_to = Set(valid_to);
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(Utc::now().into());

    let rate = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        rate_from_entity(rate),
        Some(Meta::empty()),
    ))
}

pub async fn delete_rate(state: &AppState, id: &str) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = RoomRates::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Applicable nightly rate for a room type on a date. Pure read.
pub async fn resolve_rate(
    state: &AppState,
    query: RateResolveQuery,
) -> AppResult<ApiResponse<RateQuote>> {
    let date = query.date;
    let candidates = RoomRates::find()
        .filter(
            Condition::all()
                .add(Column::RoomTypeId.eq(query.room_type_id.clone()))
                .add(Column::IsActive.eq(true))
                .add(Column::ValidFrom.lte(date))
                .add(Column::ValidTo.gte(date)),
        )
        .all(&state.orm)
        .await?;

    let season_ids: Vec<String> = candidates
        .iter()
        .filter_map(|r| r.season_id.clone())
        .collect();
    let seasons_in_range: HashSet<String> = if season_ids.is_empty() {
        HashSet::new()
    } else {
        Seasons::find()
            .filter(SeasonCol::Id.is_in(season_ids))
            .all(&state.orm)
            .await?
            .into_iter()
            .filter(|s| s.start_date <= date && date <= s.end_date)
            .map(|s| s.id)
            .collect()
    };

    let winner = select_rate(&candidates, &seasons_in_range, date)?;

    Ok(ApiResponse::success(
        "Rate resolved",
        RateQuote {
            room_rate_id: winner.id.clone(),
            room_type_id: winner.room_type_id.clone(),
            hotel_id: winner.hotel_id.clone(),
            season_id: winner.season_id.clone(),
            date,
            final_rate_per_night: winner.final_rate_per_night,
            currency: winner.currency.clone(),
        },
        Some(Meta::empty()),
    ))
}

pub(crate) fn final_rate(base: Decimal, multiplier: Decimal) -> Decimal {
    (base * multiplier).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn validate_rate_fields(
    base: Decimal,
    multiplier: Decimal,
    valid_from: NaiveDate,
    valid_to: NaiveDate,
    currency: &str,
) -> AppResult<()> {
    if base < Decimal::ZERO {
        return Err(AppError::Validation(format!(
            "base_rate_per_night must not be negative, got {base}"
        )));
    }
    if multiplier <= Decimal::ZERO {
        return Err(AppError::Validation(format!(
            "season_multiplier must be positive, got {multiplier}"
        )));
    }
    if valid_from > valid_to {
        return Err(AppError::Validation(format!(
            "valid_from {valid_from} is after valid_to {valid_to}"
        )));
    }
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(AppError::Validation(format!(
            "currency must be a 3-letter uppercase code, got {currency:?}"
        )));
    }
    Ok(())
}

// A rate bound to a season only applies when the season covers the date.
// Season-scoped candidates beat season-less ones; within the winning pool the
// narrowest validity window wins, and a surviving tie is a data conflict the
// caller has to resolve.
fn select_rate<'a>(
    candidates: &'a [RateModel],
    seasons_in_range: &HashSet<String>,
    date: NaiveDate,
) -> Result<&'a RateModel, AppError> {
    let seasonal: Vec<&RateModel> = candidates
        .iter()
        .filter(|r| {
            r.season_id
                .as_ref()
                .is_some_and(|id| seasons_in_range.contains(id))
        })
        .collect();
    let seasonless: Vec<&RateModel> = candidates
        .iter()
        .filter(|r| r.season_id.is_none())
        .collect();

    let pool = if seasonal.is_empty() { seasonless } else { seasonal };
    if pool.is_empty() {
        return Err(AppError::NotFound);
    }

    let window = |r: &RateModel| (r.valid_to - r.valid_from).num_days();
    let min_width = pool.iter().map(|r| window(r)).min().unwrap_or(0);
    let narrowest: Vec<&RateModel> = pool.into_iter().filter(|r| window(r) == min_width).collect();

    if narrowest.len() > 1 {
        return Err(AppError::Ambiguous(format!(
            "{} rates with equal specificity apply on {date}",
            narrowest.len()
        )));
    }

    Ok(narrowest[0])
}

fn rate_from_entity(model: RateModel) -> RoomRate {
    RoomRate {
        id: model.id,
        hotel_id: model.hotel_id,
        room_type_id: model.room_type_id,
        season_id: model.season_id,
        base_rate_per_night: model.base_rate_per_night,
        season_multiplier: model.season_multiplier,
        final_rate_per_night: model.final_rate_per_night,
        currency: model.currency,
        is_active: model.is_active,
        valid_from: model.valid_from,
        valid_to: model.valid_to,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::prelude::DateTimeWithTimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn ts() -> DateTimeWithTimeZone {
        DateTimeWithTimeZone::parse_from_rfc3339("2026-01-01T00:00:00+00:00").unwrap()
    }

    fn rate(
        id: &str,
        season_id: Option<&str>,
        valid_from: NaiveDate,
        valid_to: NaiveDate,
        final_rate: &str,
    ) -> RateModel {
        RateModel {
            id: id.to_string(),
            hotel_id: "h1".to_string(),
            room_type_id: "rt1".to_string(),
            season_id: season_id.map(str::to_string),
            base_rate_per_night: dec(final_rate),
            season_multiplier: Decimal::ONE,
            final_rate_per_night: dec(final_rate),
            currency: "USD".to_string(),
            is_active: true,
            valid_from,
            valid_to,
            created_at: ts(),
            updated_at: ts(),
        }
    }

    #[test]
    fn final_rate_rounds_to_cents() {
        assert_eq!(final_rate(dec("100.00"), dec("1.20")), dec("120.00"));
        assert_eq!(final_rate(dec("99.99"), dec("1.15")), dec("114.99"));
        assert_eq!(final_rate(dec("10.05"), dec("1.005")), dec("10.10"));
        assert_eq!(final_rate(dec("0.00"), dec("2.00")), dec("0.00"));
    }

    #[test]
    fn rejects_invalid_rate_fields() {
        let from = date(2026, 1, 1);
        let to = date(2026, 12, 31);
        assert!(validate_rate_fields(dec("100"), dec("1"), from, to, "USD").is_ok());
        assert!(validate_rate_fields(dec("-1"), dec("1"), from, to, "USD").is_err());
        assert!(validate_rate_fields(dec("100"), dec("0"), from, to, "USD").is_err());
        assert!(validate_rate_fields(dec("100"), dec("-0.5"), from, to, "USD").is_err());
        assert!(validate_rate_fields(dec("100"), dec("1"), to, from, "USD").is_err());
        assert!(validate_rate_fields(dec("100"), dec("1"), from, to, "usd").is_err());
        assert!(validate_rate_fields(dec("100"), dec("1"), from, to, "DOLLARS").is_err());
    }

    #[test]
    fn season_scoped_rate_beats_seasonless() {
        let target = date(2026, 7, 15);
        let base = rate("base", None, date(2026, 1, 1), date(2026, 12, 31), "100.00");
        let summer = rate(
            "summer",
            Some("s1"),
            date(2026, 1, 1),
            date(2026, 12, 31),
            "120.00",
        );
        let in_range = HashSet::from(["s1".to_string()]);

        let pool = [base, summer];
        let winner = select_rate(&pool, &in_range, target).unwrap();
        assert_eq!(winner.id, "summer");
    }

    #[test]
    fn out_of_season_rate_falls_back_to_seasonless() {
        let target = date(2026, 2, 1);
        let base = rate("base", None, date(2026, 1, 1), date(2026, 12, 31), "100.00");
        let summer = rate(
            "summer",
            Some("s1"),
            date(2026, 1, 1),
            date(2026, 12, 31),
            "120.00",
        );
        // season s1 does not cover the target date
        let pool = [base, summer];
        let winner = select_rate(&pool, &HashSet::new(), target).unwrap();
        assert_eq!(winner.id, "base");
    }

    #[test]
    fn narrowest_window_wins_within_pool() {
        let target = date(2026, 7, 15);
        let year = rate("year", None, date(2026, 1, 1), date(2026, 12, 31), "100.00");
        let july = rate("july", None, date(2026, 7, 1), date(2026, 7, 31), "140.00");

        let pool = [year, july];
        let winner = select_rate(&pool, &HashSet::new(), target).unwrap();
        assert_eq!(winner.id, "july");
    }

    #[test]
    fn equal_specificity_is_ambiguous() {
        let target = date(2026, 7, 15);
        let a = rate("a", None, date(2026, 7, 1), date(2026, 7, 31), "100.00");
        let b = rate("b", None, date(2026, 7, 1), date(2026, 7, 31), "110.00");

        let err = select_rate(&[a, b], &HashSet::new(), target).unwrap_err();
        assert!(matches!(err, AppError::Ambiguous(_)));
    }

    #[test]
    fn empty_pool_is_not_found() {
        let target = date(2026, 7, 15);
        let err = select_rate(&[], &HashSet::new(), target).unwrap_err();
        assert!(matches!(err, AppError::NotFound));

        // a season rate whose season does not cover the date, with no fallback
        let summer = rate(
            "summer",
            Some("s1"),
            date(2026, 1, 1),
            date(2026, 12, 31),
            "120.00",
        );
        let err = select_rate(&[summer], &HashSet::new(), target).unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }
}
