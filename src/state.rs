use crate::{
    config::AppConfig,
    error::AppResult,
    models::{CartItem, User},
    seed,
    storage::{self, Storage},
    store::{
        bookings::BookingLedger, cart::Cart, events::EventCatalog, session::Session,
        users::UserDirectory,
    },
};

/// Single owning context for every mutable collection. Built once at
/// process start and injected into the service operations.
pub struct AppState {
    pub config: AppConfig,
    pub storage: Storage,
    pub catalog: EventCatalog,
    pub users: UserDirectory,
    pub bookings: BookingLedger,
    pub cart: Cart,
    pub session: Session,
}

impl AppState {
    /// Seed the demo catalog and rehydrate the cart and session from
    /// storage. Corrupt stored values fall back to their defaults.
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let storage = Storage::open(&config.storage_dir).await?;

        let cart_items: Vec<CartItem> = storage.load(storage::CART_KEY).await.unwrap_or_default();
        let stored_user: Option<User> = storage.load(storage::USER_KEY).await;

        Ok(Self {
            catalog: EventCatalog::new(seed::demo_venues(), seed::demo_events()),
            users: UserDirectory::new(seed::demo_users()),
            bookings: BookingLedger::new(),
            cart: Cart::new(cart_items),
            session: Session::new(stored_user),
            storage,
            config,
        })
    }
}
