pub mod availability_service;
pub mod company_service;
pub mod hotel_service;
pub mod rate_service;
pub mod room_type_service;
pub mod season_service;
