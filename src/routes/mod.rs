use axum::Router;

use crate::state::AppState;

pub mod availability;
pub mod companies;
pub mod dashboard;
pub mod doc;
pub mod health;
pub mod hotels;
pub mod params;
pub mod rates;
pub mod room_types;
pub mod seasons;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/companies", companies::router())
        .nest("/seasons", seasons::router())
        .nest("/hotels", hotels::router())
        .nest("/room-types", room_types::router())
        .nest("/rates", rates::router())
        .nest("/availability", availability::router())
        .nest("/dashboard", dashboard::router())
}
