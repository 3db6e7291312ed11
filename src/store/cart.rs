use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{CartItem, Seat};

/// The single authoritative cart collection: at most one item per event,
/// seats unique by id within an item.
#[derive(Debug, Default)]
pub struct Cart {
    items: RwLock<Vec<CartItem>>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn snapshot(&self) -> Vec<CartItem> {
        self.items.read().await.clone()
    }

    /// Merge seats into the event's item, dropping any whose id is
    /// already present. Returns the number of seats actually added, or
    /// `None` when every incoming seat was a duplicate (no mutation).
    pub async fn add(&self, event_id: Uuid, seats: Vec<Seat>) -> Option<usize> {
        let mut incoming: Vec<Seat> = Vec::with_capacity(seats.len());
        for seat in seats {
            if !incoming.iter().any(|s: &Seat| s.id == seat.id) {
                incoming.push(seat);
            }
        }

        let mut items = self.items.write().await;
        match items.iter_mut().find(|item| item.event_id == event_id) {
            Some(item) => {
                let fresh: Vec<Seat> = incoming
                    .into_iter()
                    .filter(|seat| !item.seats.iter().any(|s| s.id == seat.id))
                    .collect();
                if fresh.is_empty() {
                    return None;
                }
                let added = fresh.len();
                item.seats.extend(fresh);
                Some(added)
            }
            None => {
                let added = incoming.len();
                items.push(CartItem {
                    event_id,
                    seats: incoming,
                });
                Some(added)
            }
        }
    }

    /// Drop the matching seats from the event's item; an item left with
    /// no seats is removed entirely. Unknown events are a no-op.
    /// Returns true when anything changed.
    pub async fn remove(&self, event_id: Uuid, seat_ids: &[String]) -> bool {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.event_id == event_id) else {
            return false;
        };
        let before = items[index].seats.len();
        items[index]
            .seats
            .retain(|seat| !seat_ids.contains(&seat.id));
        let changed = items[index].seats.len() < before;
        if items[index].seats.is_empty() {
            items.remove(index);
        }
        changed
    }

    pub async fn clear(&self) {
        self.items.write().await.clear();
    }

    /// Sum of prices over every seat in every item.
    pub async fn total(&self) -> i64 {
        self.items
            .read()
            .await
            .iter()
            .flat_map(|item| item.seats.iter())
            .map(|seat| seat.price)
            .sum()
    }
}
