use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CancellationPolicy, Hotel, HotelImage};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateHotelRequest {
    pub company_id: String,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub country: String,
    pub star_rating: i32,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateHotelRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub star_rating: Option<i32>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelList {
    pub items: Vec<Hotel>,
}

/// Hotel plus its descriptive attachments.
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelDetail {
    pub hotel: Hotel,
    pub images: Vec<HotelImage>,
    pub policies: Vec<CancellationPolicy>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddHotelImageRequest {
    pub image_url: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateHotelImageRequest {
    pub image_url: Option<String>,
    pub caption: Option<String>,
    pub is_primary: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelImageList {
    pub items: Vec<HotelImage>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCancellationPolicyRequest {
    pub name: String,
    pub description: Option<String>,
    pub cancellation_window_days: i32,
    pub refund_percentage: i32,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCancellationPolicyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cancellation_window_days: Option<i32>,
    pub refund_percentage: Option<i32>,
    pub is_default: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CancellationPolicyList {
    pub items: Vec<CancellationPolicy>,
}
