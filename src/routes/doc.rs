use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    config::{DashboardConfig, NavItem, NavSection},
    dto::{
        availability::AvailabilityList,
        companies::CompanyList,
        dashboard::DashboardHome,
        hotels::{CancellationPolicyList, HotelDetail, HotelImageList, HotelList},
        rates::{RateQuote, RoomRateList},
        room_types::RoomTypeList,
        seasons::SeasonList,
    },
    models::{
        Availability, CancellationPolicy, Company, Hotel, HotelImage, RoomRate, RoomType, Season,
    },
    response::{ApiResponse, Meta},
    routes::{
        availability as availability_routes, companies, dashboard, health, hotels, params,
        rates, room_types, seasons,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        companies::list_companies,
        companies::get_company,
        companies::create_company,
        companies::delete_company,
        seasons::list_seasons,
        seasons::get_season,
        seasons::create_season,
        seasons::update_season,
        seasons::delete_season,
        hotels::list_hotels,
        hotels::get_hotel,
        hotels::create_hotel,
        hotels::update_hotel,
        hotels::delete_hotel,
        hotels::list_images,
        hotels::add_image,
        hotels::update_image,
        hotels::delete_image,
        hotels::list_policies,
        hotels::add_policy,
        hotels::update_policy,
        hotels::delete_policy,
        room_types::list_room_types,
        room_types::get_room_type,
        room_types::create_room_type,
        room_types::update_room_type,
        room_types::delete_room_type,
        rates::list_rates,
        rates::resolve_rate,
        rates::get_rate,
        rates::create_rate,
        rates::update_rate,
        rates::delete_rate,
        availability_routes::list_availability,
        availability_routes::get_availability,
        availability_routes::create_availability,
        availability_routes::adjust_available_rooms,
        availability_routes::book_rooms,
        availability_routes::release_rooms,
        availability_routes::block_date,
        availability_routes::unblock_date,
        dashboard::navigation,
        dashboard::home
    ),
    components(
        schemas(
            Company,
            Season,
            Hotel,
            RoomType,
            RoomRate,
            Availability,
            HotelImage,
            CancellationPolicy,
            CompanyList,
            SeasonList,
            HotelList,
            HotelDetail,
            HotelImageList,
            CancellationPolicyList,
            RoomTypeList,
            RoomRateList,
            RateQuote,
            AvailabilityList,
            DashboardHome,
            DashboardConfig,
            NavSection,
            NavItem,
            params::Pagination,
            Meta,
            ApiResponse<Hotel>,
            ApiResponse<HotelList>,
            ApiResponse<RoomRateList>,
            ApiResponse<RateQuote>,
            ApiResponse<AvailabilityList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Companies", description = "Company endpoints"),
        (name = "Seasons", description = "Seasonal pricing windows"),
        (name = "Hotels", description = "Hotels, images and cancellation policies"),
        (name = "Room Types", description = "Room inventory classes"),
        (name = "Rates", description = "Room rates and rate resolution"),
        (name = "Availability", description = "Per-date inventory ledger"),
        (name = "Dashboard", description = "Navigation and session-gated home view"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
