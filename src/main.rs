use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eventhorizon::{
    config::AppConfig,
    dto::{auth::LoginRequest, cart::AddToCartRequest, events::EventQuery},
    models::SeatStatus,
    services::{auth_service, booking_service, cart_service, event_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,eventhorizon=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::new(config).await?;

    // Start the walkthrough from a clean slate; a cart left over from an
    // aborted run would trip the duplicate-selection guard below.
    let rehydrated = cart_service::cart_total(&state).await;
    if rehydrated > 0 {
        tracing::info!(total_cents = rehydrated, "clearing rehydrated cart");
        cart_service::clear_cart(&state).await?;
    }

    // Walk the demo flow end to end: sign in, browse, pick seats, checkout.
    let login = auth_service::login(
        &state,
        LoginRequest {
            email: "user@example.com".into(),
            password: "password".into(),
        },
    )
    .await?;
    tracing::info!("{}", login.message);

    let events = event_service::list_events(&state, EventQuery::default()).await?;
    let listing = events
        .data
        .and_then(|list| list.items.into_iter().next())
        .ok_or_else(|| anyhow::anyhow!("demo catalog is empty"))?;
    tracing::info!(
        title = %listing.event.title,
        venue = %listing.venue.name,
        "browsing first event"
    );

    let seat_map = event_service::get_event_seats(&state, listing.event.id).await?;
    let picked: Vec<_> = seat_map
        .data
        .map(|map| map.seats)
        .unwrap_or_default()
        .into_iter()
        .filter(|seat| seat.status == SeatStatus::Available)
        .take(2)
        .collect();

    let added = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            event_id: listing.event.id,
            seats: picked,
        },
    )
    .await?;
    tracing::info!("{}", added.message);
    tracing::info!(total_cents = cart_service::cart_total(&state).await, "cart total");

    let checkout = booking_service::checkout(&state).await?;
    let bookings = checkout.data.map(|list| list.items).unwrap_or_default();
    for booking in &bookings {
        tracing::info!(
            booking_id = %booking.id,
            seats = booking.seats.len(),
            total_cents = booking.total_amount,
            "booking confirmed"
        );
    }
    tracing::info!("{}", checkout.message);

    let _ = auth_service::logout(&state).await;
    Ok(())
}
