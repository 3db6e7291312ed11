use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Booking, BookingStatus, Seat};

/// Append-only, process-lifetime booking ledger. Records are never
/// mutated or deleted once created.
#[derive(Debug, Default)]
pub struct BookingLedger {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        seats: Vec<Seat>,
        total_amount: i64,
        status: BookingStatus,
    ) -> Booking {
        let booking = Booking {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            seats,
            total_amount,
            status,
            created_at: Utc::now(),
        };
        self.bookings.write().await.push(booking.clone());
        booking
    }

    /// Bookings for one user, in insertion order.
    pub async fn for_user(&self, user_id: Uuid) -> Vec<Booking> {
        self.bookings
            .read()
            .await
            .iter()
            .filter(|booking| booking.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Defensive copy of the full ledger.
    pub async fn all(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }
}
