use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Availability;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAvailabilityRequest {
    pub room_type_id: String,
    pub date: NaiveDate,
    pub available_rooms: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookRoomsRequest {
    pub rooms: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReleaseRoomsRequest {
    pub rooms: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BlockDateRequest {
    pub reason: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdjustAvailableRoomsRequest {
    pub available_rooms: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityList {
    pub items: Vec<Availability>,
}
