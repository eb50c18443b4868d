use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::LockType;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::availability::{
        AdjustAvailableRoomsRequest, AvailabilityList, BlockDateRequest, BookRoomsRequest,
        CreateAvailabilityRequest, ReleaseRoomsRequest,
    },
    entity::{
        availability::{ActiveModel, Column, Entity as AvailabilityRows, Model as AvailabilityModel},
        room_types::Entity as RoomTypes,
    },
    error::{AppError, AppResult},
    models::Availability,
    response::{ApiResponse, Meta},
    routes::params::AvailabilityListQuery,
    state::AppState,
};

pub async fn list_availability(
    state: &AppState,
    query: AvailabilityListQuery,
) -> AppResult<ApiResponse<AvailabilityList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();
    if let Some(room_type_id) = query.room_type_id.as_ref().filter(|r| !r.is_empty()) {
        condition = condition.add(Column::RoomTypeId.eq(room_type_id.clone()));
    }
    if let Some(hotel_id) = query.hotel_id.as_ref().filter(|h| !h.is_empty()) {
        condition = condition.add(Column::HotelId.eq(hotel_id.clone()));
    }
    if let Some(from) = query.from {
        condition = condition.add(Column::Date.gte(from));
    }
    if let Some(to) = query.to {
        condition = condition.add(Column::Date.lte(to));
    }

    let finder = AvailabilityRows::find()
        .filter(condition)
        .order_by_asc(Column::Date);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(availability_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Availability",
        AvailabilityList { items },
        Some(meta),
    ))
}

pub async fn get_availability(state: &AppState, id: &str) -> AppResult<ApiResponse<Availability>> {
    let row = AvailabilityRows::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(availability_from_entity);
    let row = match row {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Availability", row, None))
}

/// One ledger row per (room_type_id, date); the unique constraint turns a
/// second insert into a Duplicate error.
pub async fn create_availability(
    state: &AppState,
    payload: CreateAvailabilityRequest,
) -> AppResult<ApiResponse<Availability>> {
    if payload.available_rooms < 0 {
        return Err(AppError::Validation(
            "available_rooms must not be negative".into(),
        ));
    }

    let room_type = RoomTypes::find_by_id(&payload.room_type_id)
        .one(&state.orm)
        .await?;
    let room_type = match room_type {
        Some(rt) => rt,
        None => return Err(AppError::NotFound),
    };
    if payload.available_rooms > room_type.total_rooms {
        return Err(AppError::Validation(format!(
            "available_rooms {} exceeds the room type's total_rooms {}",
            payload.available_rooms, room_type.total_rooms
        )));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        hotel_id: Set(room_type.hotel_id),
        room_type_id: Set(payload.room_type_id.clone()),
        date: Set(payload.date),
        available_rooms: Set(payload.available_rooms),
        booked_rooms: Set(0),
        is_blocked: Set(false),
        block_reason: Set(None),
        created_at: NotSet,
        updated_at: NotSet,
    };

    let row = match active.insert(&state.orm).await {
        Ok(row) => row,
        Err(err) => {
            if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                return Err(AppError::Duplicate(format!(
                    "availability already exists for room type {} on {}",
                    payload.room_type_id, payload.date
                )));
            }
            return Err(err.into());
        }
    };

    Ok(ApiResponse::success(
        "Availability created",
        availability_from_entity(row),
        Some(Meta::empty()),
    ))
}

/// Book rooms for one night. The row is locked for the whole transaction so
/// concurrent bookings cannot both pass the capacity check.
pub async fn book_rooms(
    state: &AppState,
    id: &str,
    payload: BookRoomsRequest,
) -> AppResult<ApiResponse<Availability>> {
    let txn = state.orm.begin().await?;

    let row = AvailabilityRows::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let row = match row {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };

    let booked = checked_booking(&row, payload.rooms)?;

    let mut active: ActiveModel = row.into();
    active.booked_rooms = Set(booked);
    active.updated_at = Set(Utc::now().into());
    let row = active.update(&txn).await?;

    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "availability_book",
        Some("availability"),
        Some(serde_json::json!({ "availability_id": id, "rooms": payload.rooms })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Rooms booked",
        availability_from_entity(row),
        Some(Meta::empty()),
    ))
}

/// Cancellation path; booked_rooms floors at zero.
pub async fn release_rooms(
    state: &AppState,
    id: &str,
    payload: ReleaseRoomsRequest,
) -> AppResult<ApiResponse<Availability>> {
    if payload.rooms < 1 {
        return Err(AppError::Validation("rooms must be at least 1".into()));
    }

    let txn = state.orm.begin().await?;

    let row = AvailabilityRows::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let row = match row {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };

    let booked = (row.booked_rooms - payload.rooms).max(0);

    let mut active: ActiveModel = row.into();
    active.booked_rooms = Set(booked);
    active.updated_at = Set(Utc::now().into());
    let row = active.update(&txn).await?;

    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "availability_release",
        Some("availability"),
        Some(serde_json::json!({ "availability_id": id, "rooms": payload.rooms })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Rooms released",
        availability_from_entity(row),
        Some(Meta::empty()),
    ))
}

pub async fn block_date(
    state: &AppState,
    id: &str,
    payload: BlockDateRequest,
) -> AppResult<ApiResponse<Availability>> {
    if payload.reason.trim().is_empty() {
        return Err(AppError::Validation(
            "blocking a date requires a reason".into(),
        ));
    }

    let existing = AvailabilityRows::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    active.is_blocked = Set(true);
    active.block_reason = Set(Some(payload.reason));
    active.updated_at = Set(Utc::now().into());
    let row = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Date blocked",
        availability_from_entity(row),
        Some(Meta::empty()),
    ))
}

pub async fn unblock_date(state: &AppState, id: &str) -> AppResult<ApiResponse<Availability>> {
    let existing = AvailabilityRows::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    active.is_blocked = Set(false);
    active.block_reason = Set(None);
    active.updated_at = Set(Utc::now().into());
    let row = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Date unblocked",
        availability_from_entity(row),
        Some(Meta::empty()),
    ))
}

/// Change the night's capacity; never below what is already booked.
pub async fn adjust_available_rooms(
    state: &AppState,
    id: &str,
    payload: AdjustAvailableRoomsRequest,
) -> AppResult<ApiResponse<Availability>> {
    if payload.available_rooms < 0 {
        return Err(AppError::Validation(
            "available_rooms must not be negative".into(),
        ));
    }

    let txn = state.orm.begin().await?;

    let row = AvailabilityRows::find_by_id(id)
        .lock(LockType::Update)
        .one(&txn)
        .await?;
    let row = match row {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };

    if payload.available_rooms < row.booked_rooms {
        return Err(AppError::Capacity(format!(
            "cannot reduce available_rooms to {} below {} already booked",
            payload.available_rooms, row.booked_rooms
        )));
    }

    let mut active: ActiveModel = row.into();
    active.available_rooms = Set(payload.available_rooms);
    active.updated_at = Set(Utc::now().into());
    let row = active.update(&txn).await?;

    txn.commit().await?;

    Ok(ApiResponse::success(
        "Updated",
        availability_from_entity(row),
        Some(Meta::empty()),
    ))
}

// Blocked dates refuse every booking, whatever the remaining capacity.
fn checked_booking(row: &AvailabilityModel, rooms: i32) -> Result<i32, AppError> {
    if rooms < 1 {
        return Err(AppError::Validation("rooms must be at least 1".into()));
    }
    if row.is_blocked {
        let reason = row.block_reason.as_deref().unwrap_or("date is blocked");
        return Err(AppError::Blocked(reason.to_string()));
    }
    if row.booked_rooms + rooms > row.available_rooms {
        return Err(AppError::Capacity(format!(
            "{} rooms requested, {} of {} already booked",
            rooms, row.booked_rooms, row.available_rooms
        )));
    }
    Ok(row.booked_rooms + rooms)
}

fn availability_from_entity(model: AvailabilityModel) -> Availability {
    Availability {
        id: model.id,
        hotel_id: model.hotel_id,
        room_type_id: model.room_type_id,
        date: model.date,
        available_rooms: model.available_rooms,
        booked_rooms: model.booked_rooms,
        is_blocked: model.is_blocked,
        block_reason: model.block_reason,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::prelude::DateTimeWithTimeZone;

    fn row(available: i32, booked: i32, blocked: bool) -> AvailabilityModel {
        let ts = DateTimeWithTimeZone::parse_from_rfc3339("2026-01-01T00:00:00+00:00").unwrap();
        AvailabilityModel {
            id: "a1".to_string(),
            hotel_id: "h1".to_string(),
            room_type_id: "rt1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            available_rooms: available,
            booked_rooms: booked,
            is_blocked: blocked,
            block_reason: blocked.then(|| "renovation".to_string()),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn booking_within_capacity_increments() {
        assert_eq!(checked_booking(&row(10, 0, false), 3).unwrap(), 3);
        assert_eq!(checked_booking(&row(10, 3, false), 7).unwrap(), 10);
    }

    #[test]
    fn booking_over_capacity_is_rejected() {
        let err = checked_booking(&row(10, 3, false), 8).unwrap_err();
        assert!(matches!(err, AppError::Capacity(_)));
    }

    #[test]
    fn blocked_date_rejects_any_booking() {
        let err = checked_booking(&row(10, 0, true), 1).unwrap_err();
        assert!(matches!(err, AppError::Blocked(_)));
    }

    #[test]
    fn non_positive_booking_is_invalid() {
        assert!(matches!(
            checked_booking(&row(10, 0, false), 0),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            checked_booking(&row(10, 0, false), -2),
            Err(AppError::Validation(_))
        ));
    }
}
