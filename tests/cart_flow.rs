use eventhorizon::{
    config::AppConfig,
    dto::cart::{AddToCartRequest, RemoveFromCartRequest},
    error::AppError,
    models::{Seat, SeatStatus},
    services::{cart_service, event_service},
    state::AppState,
    storage,
};
use uuid::Uuid;

#[tokio::test]
async fn merging_adds_only_the_new_seats() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let event_id = first_event_id(&state).await?;
    let seats = available_seats(&state, event_id, 3).await?;

    let first = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            event_id,
            seats: vec![seats[0].clone(), seats[1].clone()],
        },
    )
    .await?;
    assert_eq!(first.message, "Added 2 seat(s) to your cart");

    // Second add overlaps on one seat; only the fresh one lands.
    let second = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            event_id,
            seats: vec![seats[1].clone(), seats[2].clone()],
        },
    )
    .await?;
    assert_eq!(second.message, "Added 1 seat(s) to your cart");

    let cart = cart_service::list_cart(&state).await?.data.expect("cart");
    assert_eq!(cart.items.len(), 1);
    let item_ids: Vec<&str> = cart.items[0]
        .seats
        .iter()
        .map(|seat| seat.id.as_str())
        .collect();
    assert_eq!(
        item_ids,
        vec![seats[0].id.as_str(), seats[1].id.as_str(), seats[2].id.as_str()]
    );

    Ok(())
}

#[tokio::test]
async fn fully_duplicate_selection_is_rejected_without_mutation() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let event_id = first_event_id(&state).await?;
    let seats = available_seats(&state, event_id, 2).await?;

    cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            event_id,
            seats: seats.clone(),
        },
    )
    .await?;
    let total_before = cart_service::cart_total(&state).await;

    let err = cart_service::add_to_cart(&state, AddToCartRequest { event_id, seats })
        .await
        .expect_err("duplicate add must fail");
    match err {
        AppError::Validation(message) => {
            assert_eq!(message, "These seats are already in your cart");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(cart_service::cart_total(&state).await, total_before);
    Ok(())
}

#[tokio::test]
async fn empty_selection_is_rejected() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let event_id = first_event_id(&state).await?;

    let err = cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            event_id,
            seats: Vec::new(),
        },
    )
    .await
    .expect_err("empty add must fail");
    assert!(matches!(err, AppError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn removing_every_seat_drops_the_cart_item() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let event_id = first_event_id(&state).await?;
    let seats = available_seats(&state, event_id, 2).await?;
    let seat_prices: i64 = seats.iter().map(|seat| seat.price).sum();

    cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            event_id,
            seats: seats.clone(),
        },
    )
    .await?;
    assert_eq!(cart_service::cart_total(&state).await, seat_prices);

    // Remove one seat: item stays, total shrinks by that seat's price.
    cart_service::remove_from_cart(
        &state,
        RemoveFromCartRequest {
            event_id,
            seat_ids: vec![seats[0].id.clone()],
        },
    )
    .await?;
    assert_eq!(
        cart_service::cart_total(&state).await,
        seat_prices - seats[0].price
    );

    // Remove the last seat: the item disappears entirely.
    cart_service::remove_from_cart(
        &state,
        RemoveFromCartRequest {
            event_id,
            seat_ids: vec![seats[1].id.clone()],
        },
    )
    .await?;
    let cart = cart_service::list_cart(&state).await?.data.expect("cart");
    assert!(cart.items.is_empty());
    assert_eq!(cart_service::cart_total(&state).await, 0);

    Ok(())
}

#[tokio::test]
async fn removing_from_an_unknown_event_is_a_no_op() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let response = cart_service::remove_from_cart(
        &state,
        RemoveFromCartRequest {
            event_id: Uuid::new_v4(),
            seat_ids: vec!["nope".to_string()],
        },
    )
    .await?;
    assert!(response.data.expect("cart").items.is_empty());
    Ok(())
}

#[tokio::test]
async fn total_spans_every_item_in_the_cart() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let events = event_ids(&state, 2).await?;

    let first_seats = available_seats(&state, events[0], 2).await?;
    let second_seats = available_seats(&state, events[1], 1).await?;
    let expected: i64 = first_seats
        .iter()
        .chain(second_seats.iter())
        .map(|seat| seat.price)
        .sum();

    cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            event_id: events[0],
            seats: first_seats,
        },
    )
    .await?;
    cart_service::add_to_cart(
        &state,
        AddToCartRequest {
            event_id: events[1],
            seats: second_seats,
        },
    )
    .await?;

    assert_eq!(cart_service::cart_total(&state).await, expected);

    let cleared = cart_service::clear_cart(&state).await?;
    assert_eq!(cleared.message, "Cart cleared");
    assert_eq!(cart_service::cart_total(&state).await, 0);
    Ok(())
}

#[tokio::test]
async fn persisted_cart_rehydrates_on_startup() -> anyhow::Result<()> {
    let dir = fresh_storage_dir();

    let state = AppState::new(test_config(&dir)).await?;
    let event_id = first_event_id(&state).await?;
    let seats = available_seats(&state, event_id, 2).await?;
    cart_service::add_to_cart(&state, AddToCartRequest { event_id, seats }).await?;
    let total = cart_service::cart_total(&state).await;
    drop(state);

    let reloaded = AppState::new(test_config(&dir)).await?;
    assert_eq!(cart_service::cart_total(&reloaded).await, total);
    let cart = cart_service::list_cart(&reloaded).await?.data.expect("cart");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].event.id, event_id);
    Ok(())
}

#[tokio::test]
async fn corrupt_persisted_cart_degrades_to_empty() -> anyhow::Result<()> {
    let dir = fresh_storage_dir();
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join(format!("{}.json", storage::CART_KEY)), b"{not json")?;

    let state = AppState::new(test_config(&dir)).await?;
    let cart = cart_service::list_cart(&state).await?.data.expect("cart");
    assert!(cart.items.is_empty());
    assert_eq!(cart_service::cart_total(&state).await, 0);
    Ok(())
}

async fn setup_state() -> anyhow::Result<AppState> {
    Ok(AppState::new(test_config(&fresh_storage_dir())).await?)
}

fn test_config(dir: &std::path::Path) -> AppConfig {
    AppConfig {
        storage_dir: dir.to_path_buf(),
        simulated_latency_ms: 0,
    }
}

fn fresh_storage_dir() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("eventhorizon-test-{}", Uuid::new_v4()))
}

async fn first_event_id(state: &AppState) -> anyhow::Result<Uuid> {
    Ok(event_ids(state, 1).await?[0])
}

async fn event_ids(state: &AppState, n: usize) -> anyhow::Result<Vec<Uuid>> {
    let events = event_service::list_events(state, Default::default())
        .await?
        .data
        .expect("events");
    assert!(events.items.len() >= n, "demo catalog too small");
    Ok(events
        .items
        .into_iter()
        .take(n)
        .map(|listing| listing.event.id)
        .collect())
}

async fn available_seats(
    state: &AppState,
    event_id: Uuid,
    n: usize,
) -> anyhow::Result<Vec<Seat>> {
    let map = event_service::get_event_seats(state, event_id)
        .await?
        .data
        .expect("seat map");
    Ok(map
        .seats
        .into_iter()
        .filter(|seat| seat.status == SeatStatus::Available)
        .take(n)
        .collect())
}
