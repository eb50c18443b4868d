use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Company {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Season {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Hotel {
    pub id: String,
    pub company_id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub country: String,
    pub star_rating: i32,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomType {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: Option<String>,
    pub max_occupancy: i32,
    pub bed_type: String,
    pub size: Option<String>,
    pub total_rooms: i32,
    pub available_rooms: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomRate {
    pub id: String,
    pub hotel_id: String,
    pub room_type_id: String,
    pub season_id: Option<String>,
    pub base_rate_per_night: Decimal,
    pub season_multiplier: Decimal,
    pub final_rate_per_night: Decimal,
    pub currency: String,
    pub is_active: bool,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One night of inventory for a room type.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Availability {
    pub id: String,
    pub hotel_id: String,
    pub room_type_id: String,
    pub date: NaiveDate,
    pub available_rooms: i32,
    pub booked_rooms: i32,
    pub is_blocked: bool,
    pub block_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HotelImage {
    pub id: String,
    pub hotel_id: String,
    pub image_url: String,
    pub caption: Option<String>,
    pub is_primary: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CancellationPolicy {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: Option<String>,
    pub cancellation_window_days: i32,
    pub refund_percentage: i32,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
