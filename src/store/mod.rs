pub mod bookings;
pub mod cart;
pub mod events;
pub mod session;
pub mod users;
