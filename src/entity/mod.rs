pub mod availability;
pub mod cancellation_policies;
pub mod companies;
pub mod hotel_images;
pub mod hotels;
pub mod room_rates;
pub mod room_types;
pub mod seasons;

pub use availability::Entity as Availability;
pub use cancellation_policies::Entity as CancellationPolicies;
pub use companies::Entity as Companies;
pub use hotel_images::Entity as HotelImages;
pub use hotels::Entity as Hotels;
pub use room_rates::Entity as RoomRates;
pub use room_types::Entity as RoomTypes;
pub use seasons::Entity as Seasons;
