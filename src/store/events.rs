use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Event, Venue};

/// In-memory catalog of venues and events. Venues are fixed after
/// construction; events change only through the admin operations.
#[derive(Debug)]
pub struct EventCatalog {
    venues: Vec<Venue>,
    events: RwLock<Vec<Event>>,
}

impl EventCatalog {
    pub fn new(venues: Vec<Venue>, events: Vec<Event>) -> Self {
        Self {
            venues,
            events: RwLock::new(events),
        }
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn venue(&self, id: Uuid) -> Option<Venue> {
        self.venues.iter().find(|venue| venue.id == id).cloned()
    }

    pub async fn all(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Event> {
        self.events
            .read()
            .await
            .iter()
            .find(|event| event.id == id)
            .cloned()
    }

    pub async fn insert(&self, event: Event) {
        self.events.write().await.push(event);
    }

    /// Apply a field merge to the matching event, returning the updated
    /// value, or `None` when the id is unknown.
    pub async fn update<F>(&self, id: Uuid, apply: F) -> Option<Event>
    where
        F: FnOnce(&mut Event),
    {
        let mut events = self.events.write().await;
        let event = events.iter_mut().find(|event| event.id == id)?;
        apply(event);
        Some(event.clone())
    }

    /// Rebuild the list without the matching event. Reports whether a
    /// removal occurred.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|event| event.id != id);
        events.len() < before
    }
}
