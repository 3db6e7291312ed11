pub mod auth;
pub mod bookings;
pub mod cart;
pub mod events;
pub mod params;
