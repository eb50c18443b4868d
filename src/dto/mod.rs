pub mod availability;
pub mod companies;
pub mod dashboard;
pub mod hotels;
pub mod rates;
pub mod room_types;
pub mod seasons;
