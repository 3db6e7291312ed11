use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Event, Seat};

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub event_id: Uuid,
    pub seats: Vec<Seat>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFromCartRequest {
    pub event_id: Uuid,
    pub seat_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CartItemDto {
    pub event: Event,
    pub seats: Vec<Seat>,
    pub subtotal: i64,
}

#[derive(Debug, Serialize)]
pub struct CartList {
    pub items: Vec<CartItemDto>,
    pub total: i64,
}
