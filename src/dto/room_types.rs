use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::RoomType;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoomTypeRequest {
    pub hotel_id: String,
    pub name: String,
    pub description: Option<String>,
    pub max_occupancy: i32,
    pub bed_type: String,
    pub size: Option<String>,
    pub total_rooms: i32,
    pub available_rooms: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoomTypeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_occupancy: Option<i32>,
    pub bed_type: Option<String>,
    pub size: Option<String>,
    pub total_rooms: Option<i32>,
    pub available_rooms: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomTypeList {
    pub items: Vec<RoomType>,
}
