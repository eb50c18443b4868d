use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::hotels::{
        AddHotelImageRequest, CancellationPolicyList, CreateCancellationPolicyRequest,
        CreateHotelRequest, HotelDetail, HotelImageList, HotelList, UpdateCancellationPolicyRequest,
        UpdateHotelImageRequest, UpdateHotelRequest,
    },
    entity::{
        cancellation_policies::{
            ActiveModel as PolicyActive, Column as PolicyCol, Entity as CancellationPolicies,
            Model as PolicyModel,
        },
        companies::Entity as Companies,
        hotel_images::{
            ActiveModel as ImageActive, Column as ImageCol, Entity as HotelImages,
            Model as ImageModel,
        },
        hotels::{ActiveModel, Column, Entity as Hotels, Model as HotelModel},
    },
    error::{AppError, AppResult},
    models::{CancellationPolicy, Hotel, HotelImage},
    response::{ApiResponse, Meta},
    routes::params::{HotelQuery, HotelSortBy, SortOrder},
    state::AppState,
};

pub async fn list_hotels(state: &AppState, query: HotelQuery) -> AppResult<ApiResponse<HotelList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_ref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", search);
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::Name).ilike(pattern.clone()))
                .add(Expr::col(Column::City).ilike(pattern.clone()))
                .add(Expr::col(Column::Country).ilike(pattern)),
        );
    }

    if let Some(company_id) = query.company_id.as_ref().filter(|c| !c.is_empty()) {
        condition = condition.add(Column::CompanyId.eq(company_id.clone()));
    }
    if let Some(city) = query.city.as_ref().filter(|c| !c.is_empty()) {
        condition = condition.add(Column::City.eq(city.clone()));
    }
    if let Some(country) = query.country.as_ref().filter(|c| !c.is_empty()) {
        condition = condition.add(Column::Country.eq(country.clone()));
    }
    if let Some(min_star) = query.min_star_rating {
        condition = condition.add(Column::StarRating.gte(min_star));
    }
    if query.active_only.unwrap_or(false) {
        condition = condition.add(Column::IsActive.eq(true));
    }

    let sort_by = query.sort_by.unwrap_or(HotelSortBy::CreatedAt);
    let sort_order = query.sort_order.unwrap_or(SortOrder::Desc);
    let sort_col = match sort_by {
        HotelSortBy::CreatedAt => Column::CreatedAt,
        HotelSortBy::Name => Column::Name,
        HotelSortBy::StarRating => Column::StarRating,
    };

    let mut finder = Hotels::find().filter(condition);
    finder = match sort_order {
        SortOrder::Asc => finder.order_by_asc(sort_col),
        SortOrder::Desc => finder.order_by_desc(sort_col),
    };

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(hotel_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Hotels", HotelList { items }, Some(meta)))
}

pub async fn get_hotel(state: &AppState, id: &str) -> AppResult<ApiResponse<HotelDetail>> {
    let hotel = Hotels::find_by_id(id).one(&state.orm).await?;
    let hotel = match hotel {
        Some(h) => h,
        None => return Err(AppError::NotFound),
    };

    let images = HotelImages::find()
        .filter(ImageCol::HotelId.eq(id))
        .order_by_asc(ImageCol::SortOrder)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(image_from_entity)
        .collect();

    let policies = CancellationPolicies::find()
        .filter(PolicyCol::HotelId.eq(id))
        .order_by_desc(PolicyCol::IsDefault)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(policy_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Hotel",
        HotelDetail {
            hotel: hotel_from_entity(hotel),
            images,
            policies,
        },
        Some(Meta::empty()),
    ))
}

pub async fn create_hotel(
    state: &AppState,
    payload: CreateHotelRequest,
) -> AppResult<ApiResponse<Hotel>> {
    validate_star_rating(payload.star_rating)?;
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("hotel name must not be empty".into()));
    }

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
        address: Set(payload.address),
        city: Set(payload.city),
        country: Set(payload.country),
        star_rating: Set(payload.star_rating),
        contact_email: Set(payload.contact_email),
        contact_phone: Set(payload.contact_phone),
        is_active: Set(true),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let hotel = active.insert(&state.orm).await?;

    Ok(ApiResponse::success(
        "Hotel created",
        hotel_from_entity(hotel),
        Some(Meta::empty()),
    ))
}

pub async fn update_hotel(
    state: &AppState,
    id: &str,
    payload: UpdateHotelRequest,
) -> AppResult<ApiResponse<Hotel>> {
    let existing = Hotels::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(h) => h,
        None => return Err(AppError::NotFound),
    };

    if let Some(star_rating) = payload.star_rating {
        validate_star_rating(star_rating)?;
    }

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("hotel name must not be empty".into()));
        }
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(city) = payload.city {
        active.city = Set(city);
    }
    if let Some(country) = payload.country {
        active.country = Set(country);
    }
    if let Some(star_rating) = payload.star_rating {
        active.star_rating = Set(star_rating);
    }
    if let Some(contact_email) = payload.contact_email {
        active.contact_email = Set(Some(contact_email));
    }
    if let Some(contact_phone) = payload.contact_phone {
        active.contact_phone = Set(Some(contact_phone));
    }
    if let Some(is_active) = payload.is_active {
        active.is_active = Set(is_active);
    }
    active.updated_at = Set(Utc::now().into());

    let hotel = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        hotel_from_entity(hotel),
        Some(Meta::empty()),
    ))
}

/// Deleting a hotel cascades through room types, rates, availability, images
/// and policies. Audit logged like every destructive cascade.
pub async fn delete_hotel(state: &AppState, id: &str) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Hotels::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "hotel_delete",
        Some("hotels"),
        Some(serde_json::json!({ "hotel_id": id })),
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

pub async fn list_images(state: &AppState, hotel_id: &str) -> AppResult<ApiResponse<HotelImageList>> {
    ensure_hotel_exists(state, hotel_id).await?;

    let items = HotelImages::find()
        .filter(ImageCol::HotelId.eq(hotel_id))
        .order_by_asc(ImageCol::SortOrder)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(image_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Images",
        HotelImageList { items },
        Some(Meta::empty()),
    ))
}

pub async fn add_image(
    state: &AppState,
    hotel_id: &str,
    payload: AddHotelImageRequest,
) -> AppResult<ApiResponse<HotelImage>> {
    if payload.image_url.trim().is_empty() {
        return Err(AppError::Validation("image_url must not be empty".into()));
    }
    ensure_hotel_exists(state, hotel_id).await?;

    let txn = state.orm.begin().await?;

    // only one primary image per hotel
    if payload.is_primary {
        demote_primary_images(&txn, hotel_id).await?;
    }

    let active = ImageActive {
        id: Set(Uuid::new_v4().to_string()),
        hotel_id: Set(hotel_id.to_string()),
        image_url: Set(payload.image_url),
        caption: Set(payload.caption),
        is_primary: Set(payload.is_primary),
        sort_order: Set(payload.sort_order),
        created_at: NotSet,
    };
    let image = active.insert(&txn).await?;

    txn.commit().await?;

    Ok(ApiResponse::success(
        "Image added",
        image_from_entity(image),
        Some(Meta::empty()),
    ))
}

pub async fn update_image(
    state: &AppState,
    hotel_id: &str,
    image_id: &str,
    payload: UpdateHotelImageRequest,
) -> AppResult<ApiResponse<HotelImage>> {
    let txn = state.orm.begin().await?;

    let existing = HotelImages::find_by_id(image_id)
        .filter(ImageCol::HotelId.eq(hotel_id))
        .one(&txn)
        .await?;
    let existing = match existing {
        Some(i) => i,
        None => return Err(AppError::NotFound),
    };

    if payload.is_primary == Some(true) && !existing.is_primary {
        demote_primary_images(&txn, hotel_id).await?;
    }

    let mut active: ImageActive = existing.into();
    if let Some(image_url) = payload.image_url {
        if image_url.trim().is_empty() {
            return Err(AppError::Validation("image_url must not be empty".into()));
        }
        active.image_url = Set(image_url);
    }
    if let Some(caption) = payload.caption {
        active.caption = Set(Some(caption));
    }
    if let Some(is_primary) = payload.is_primary {
        active.is_primary = Set(is_primary);
    }
    if let Some(sort_order) = payload.sort_order {
        active.sort_order = Set(sort_order);
    }

    let image = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Updated",
        image_from_entity(image),
        Some(Meta::empty()),
    ))
}

pub async fn delete_image(
    state: &AppState,
    hotel_id: &str,
    image_id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = HotelImages::delete_many()
        .filter(ImageCol::Id.eq(image_id))
        .filter(ImageCol::HotelId.eq(hotel_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_policies(
    state: &AppState,
    hotel_id: &str,
) -> AppResult<ApiResponse<CancellationPolicyList>> {
    ensure_hotel_exists(state, hotel_id).await?;

    let items = CancellationPolicies::find()
        .filter(PolicyCol::HotelId.eq(hotel_id))
        .order_by_desc(PolicyCol::IsDefault)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(policy_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Cancellation policies",
        CancellationPolicyList { items },
        Some(Meta::empty()),
    ))
}

pub async fn add_policy(
    state: &AppState,
    hotel_id: &str,
    payload: CreateCancellationPolicyRequest,
) -> AppResult<ApiResponse<CancellationPolicy>> {
    validate_policy(payload.cancellation_window_days, payload.refund_percentage)?;
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("policy name must not be empty".into()));
    }
    ensure_hotel_exists(state, hotel_id).await?;

    let txn = state.orm.begin().await?;

    // only one default policy per hotel
    if payload.is_default {
        demote_default_policies(&txn, hotel_id).await?;
    }

    let active = PolicyActive {
        id: Set(Uuid::new_v4().to_string()),
        hotel_id: Set(hotel_id.to_string()),
        name: Set(payload.name),
        description: Set(payload.description),
        cancellation_window_days: Set(payload.cancellation_window_days),
        refund_percentage: Set(payload.refund_percentage),
        is_default: Set(payload.is_default),
        created_at: NotSet,
        updated_at: NotSet,
    };
    let policy = active.insert(&txn).await?;

    txn.commit().await?;

    Ok(ApiResponse::success(
        "Policy added",
        policy_from_entity(policy),
        Some(Meta::empty()),
    ))
}

pub async fn update_policy(
    state: &AppState,
    hotel_id: &str,
    policy_id: &str,
    payload: UpdateCancellationPolicyRequest,
) -> AppResult<ApiResponse<CancellationPolicy>> {
    let txn = state.orm.begin().await?;

    let existing = CancellationPolicies::find_by_id(policy_id)
        .filter(PolicyCol::HotelId.eq(hotel_id))
        .one(&txn)
        .await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let window = payload
        .cancellation_window_days
        .unwrap_or(existing.cancellation_window_days);
    let refund = payload
        .refund_percentage
        .unwrap_or(existing.refund_percentage);
    validate_policy(window, refund)?;

    if payload.is_default == Some(true) && !existing.is_default {
        demote_default_policies(&txn, hotel_id).await?;
    }

    let mut active: PolicyActive = existing.into();
    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("policy name must not be empty".into()));
        }
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    active.cancellation_window_days = Set(window);
    active.refund_percentage = Set(refund);
    if let Some(is_default) = payload.is_default {
        active.is_default = Set(is_default);
    }
    active.updated_at = Set(Utc::now().into());

    let policy = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Updated",
        policy_from_entity(policy),
        Some(Meta::empty()),
    ))
}

pub async fn delete_policy(
    state: &AppState,
    hotel_id: &str,
    policy_id: &str,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = CancellationPolicies::delete_many()
        .filter(PolicyCol::Id.eq(policy_id))
        .filter(PolicyCol::HotelId.eq(hotel_id))
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn ensure_hotel_exists(state: &AppState, hotel_id: &str) -> AppResult<()> {
    if Hotels::find_by_id(hotel_id).one(&state.orm).await?.is_none() {
        return Err(AppError::NotFound);
    }
    Ok(())
}

async fn demote_primary_images<C: sea_orm::ConnectionTrait>(
    conn: &C,
    hotel_id: &str,
) -> AppResult<()> {
    HotelImages::update_many()
        .col_expr(ImageCol::IsPrimary, Expr::value(false))
        .filter(ImageCol::HotelId.eq(hotel_id))
        .filter(ImageCol::IsPrimary.eq(true))
        .exec(conn)
        .await?;
    Ok(())
}

async fn demote_default_policies<C: sea_orm::ConnectionTrait>(
    conn: &C,
    hotel_id: &str,
) -> AppResult<()> {
    CancellationPolicies::update_many()
        .col_expr(PolicyCol::IsDefault, Expr::value(false))
        .filter(PolicyCol::HotelId.eq(hotel_id))
        .filter(PolicyCol::IsDefault.eq(true))
        .exec(conn)
        .await?;
    Ok(())
}

fn validate_star_rating(star_rating: i32) -> AppResult<()> {
    if !(1..=5).contains(&star_rating) {
        return Err(AppError::Validation(format!(
            "star_rating must be between 1 and 5, got {star_rating}"
        )));
    }
    Ok(())
}

fn validate_policy(window_days: i32, refund_percentage: i32) -> AppResult<()> {
    if window_days < 0 {
        return Err(AppError::Validation(
            "cancellation_window_days must not be negative".into(),
        ));
    }
    if !(0..=100).contains(&refund_percentage) {
        return Err(AppError::Validation(format!(
            "refund_percentage must be between 0 and 100, got {refund_percentage}"
        )));
    }
    Ok(())
}

fn hotel_from_entity(model: HotelModel) -> Hotel {
    Hotel {
        id: model.id,
        company_id: model.company_id,
        name: model.name,
        description: model.description,
        address: model.address,
        city: model.city,
        country: model.country,
        star_rating: model.star_rating,
        contact_email: model.contact_email,
        contact_phone: model.contact_phone,
        is_active: model.is_active,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn image_from_entity(model: ImageModel) -> HotelImage {
    HotelImage {
        id: model.id,
        hotel_id: model.hotel_id,
        image_url: model.image_url,
        caption: model.caption,
        is_primary: model.is_primary,
        sort_order: model.sort_order,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn policy_from_entity(model: PolicyModel) -> CancellationPolicy {
    CancellationPolicy {
        id: model.id,
        hotel_id: model.hotel_id,
        name: model.name,
        description: model.description,
        cancellation_window_days: model.cancellation_window_days,
        refund_percentage: model.refund_percentage,
        is_default: model.is_default,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_rating_bounds() {
        assert!(validate_star_rating(1).is_ok());
        assert!(validate_star_rating(5).is_ok());
        assert!(matches!(
            validate_star_rating(0),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_star_rating(6),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn refund_percentage_bounds() {
        assert!(validate_policy(0, 0).is_ok());
        assert!(validate_policy(14, 100).is_ok());
        assert!(matches!(
            validate_policy(7, 101),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_policy(7, -1),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_policy(-1, 50),
            Err(AppError::Validation(_))
        ));
    }
}
