use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::params::Pagination;
use crate::models::{Event, Seat, Venue};

#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue_id: Uuid,
    pub price: i64,
    pub category: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub venue_id: Option<Uuid>,
    pub price: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventWithVenue {
    pub event: Event,
    pub venue: Venue,
}

#[derive(Debug, Serialize)]
pub struct EventList {
    pub items: Vec<EventWithVenue>,
}

#[derive(Debug, Serialize)]
pub struct VenueList {
    pub items: Vec<Venue>,
}

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SeatMap {
    pub event_id: Uuid,
    pub seats: Vec<Seat>,
}
