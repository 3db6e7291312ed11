use serde::Serialize;

use crate::models::{Booking, Event};

#[derive(Debug, Serialize)]
pub struct BookingList {
    pub items: Vec<Booking>,
}

#[derive(Debug, Serialize)]
pub struct BookingWithEvent {
    pub booking: Booking,
    pub event: Event,
}

#[derive(Debug, Serialize)]
pub struct UserBookingList {
    pub items: Vec<BookingWithEvent>,
}
