use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    dto::room_types::{CreateRoomTypeRequest, RoomTypeList, UpdateRoomTypeRequest},
    entity::{
        hotels::Entity as Hotels,
        room_types::{ActiveModel, Column, Entity as RoomTypes, Model as RoomTypeModel},
    },
    error::{AppError, AppResult},
    models::RoomType,
    response::{ApiResponse, Meta},
    routes::params::RoomTypeListQuery,
    state::AppState,
};

pub async fn list_room_types(
    state: &AppState,
    query: RoomTypeListQuery,
) -> AppResult<ApiResponse<RoomTypeList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();
    if let Some(hotel_id) = query.hotel_id.as_ref().filter(|h| !h.is_empty()) {
        condition = condition.add(Column::HotelId.eq(hotel_id.clone()));
    }
    if query.active_only.unwrap_or(false) {
        condition = condition.add(Column::IsActive.eq(true));
    }

    let finder = RoomTypes::find()
        .filter(condition)
        .order_by_asc(Column::Name);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(room_type_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Room types",
        RoomTypeList { items },
        Some(meta),
    ))
}

pub async fn get_room_type(state: &AppState, id: &str) -> AppResult<ApiResponse<RoomType>> {
    let room_type = RoomTypes::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(room_type_from_entity);
    let room_type = match room_type {
        Some(rt) => rt,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Room type", room_type, None))
}

pub async fn create_room_type(
    state: &AppState,
    payload: CreateRoomTypeRequest,
) -> AppResult<ApiResponse<RoomType>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("room type name must not be empty".into()));
    }
    if payload.bed_type.trim().is_empty() {
        return Err(AppError::Validation("bed_type must not be empty".into()));
    }
    if payload.max_occupancy < 1 {
        return Err(AppError::Validation("max_occupancy must be at least 1".into()));
    }
    validate_room_counts(payload.total_rooms, payload.available_rooms)?;

    if Hotels::find_by_id(&payload.hotel_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound);
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        hotel_id: Set(payload.hotel_id),
        name: Set(payload.name),
        description: Set(payload.description),
        max_occupancy: Set(payload.max_occupancy),
        bed_type: Set(payload.bed_type),
        size: Set(payload.size),
        total_rooms: Set(payload.total_rooms),
        available_rooms: Set(payload.available_rooms),
        is_active: Set(true),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let room_type = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Room type created",
        room_type_from_entity(room_type),
        Some(Meta::empty()),
    ))
}

pub async fn update_room_type(
    state: &AppState,
    id: &str,
    payload: UpdateRoomTypeRequest,
) -> AppResult<ApiResponse<RoomType>> {
    let existing = RoomTypes::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(rt) => rt,
        None => return Err(AppError::NotFound),
    };

    let total_rooms = payload.total_rooms.unwrap_or(existing.total_rooms);
    let available_rooms = payload.available_rooms.unwrap_or(existing.available_rooms);
    validate_room_counts(total_rooms, available_rooms)?;
    if let Some(max_occupancy) = payload.max_occupancy {
        if max_occupancy < 1 {
            return Err(AppError::Validation("max_occupancy must be at least 1".into()));
        }
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("room type name must not be empty".into()));
        }
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(max_occupancy) = payload.max_occupancy {
        active.max_occupancy = Set(max_occupancy);
    }
    if let Some(bed_type) = payload.bed_type {
        if bed_type.trim().is_empty() {
            return Err(AppError::Validation("bed_type must not be empty".into()));
        }
        active.bed_type = Set(bed_type);
    }
    if let Some(size) = payload.size {
        active.size = Set(Some(size));
    }
    active.total_rooms = Set(total_rooms);
    active.available_rooms = Set(available_rooms);
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(Utc::now().into());

    let room_type = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        room_type_from_entity(room_type),
        Some(Meta::empty()),
    ))
}

pub async fn delete_room_type(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = RoomTypes::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

// available_rooms <= total_rooms is not a stored constraint, so it is checked
// on every write path.
fn validate_room_counts(total_rooms: i32, available_rooms: i32) -> AppResult<()> {
    if total_rooms < 0 || available_rooms < 0 {
        return Err(AppError::Validation(
            "room counts must not be negative".into(),
        ));
    }
    if available_rooms > total_rooms {
        return Err(AppError::Validation(format!(
            "available_rooms {available_rooms} exceeds total_rooms {total_rooms}"
        )));
    }
    Ok(())
}

fn room_type_from_entity(model: RoomTypeModel) -> RoomType {
    RoomType {
        id: model.id,
        hotel_id: model.hotel_id,
        name: model.name,
        description: model.description,
        max_occupancy: model.max_occupancy,
        bed_type: model.bed_type,
        size: model.size,
        total_rooms: model.total_rooms,
        available_rooms: model.available_rooms,
        is_active: model.is_active,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_rooms_bounded_by_total() {
        assert!(validate_room_counts(10, 10).is_ok());
        assert!(validate_room_counts(10, 0).is_ok());
        assert!(matches!(
            validate_room_counts(10, 11),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_room_counts(-1, 0),
            Err(AppError::Validation(_))
        ));
    }
}
