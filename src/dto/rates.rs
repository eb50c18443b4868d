use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::RoomRate;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoomRateRequest {
    pub hotel_id: String,
    pub room_type_id: String,
    pub season_id: Option<String>,
    pub base_rate_per_night: Decimal,
    /// Defaults to 1.00 when omitted.
    pub season_multiplier: Option<Decimal>,
    pub currency: Option<String>,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
}

/// The season link is fixed at creation; recreate the rate to re-scope it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoomRateRequest {
    pub base_rate_per_night: Option<Decimal>,
    pub season_multiplier: Option<Decimal>,
    pub currency: Option<String>,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomRateList {
    pub items: Vec<RoomRate>,
}

/// Resolved nightly price for a room type on a given date.
#[derive(Debug, Serialize, ToSchema)]
pub struct RateQuote {
    pub room_rate_id: String,
    pub room_type_id: String,
    pub hotel_id: String,
    pub season_id: Option<String>,
    pub date: NaiveDate,
    pub final_rate_per_night: Decimal,
    pub currency: String,
}
