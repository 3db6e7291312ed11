use std::time::Duration;

use tokio::time::sleep;

use crate::{
    auth::require_user,
    dto::bookings::{BookingList, BookingWithEvent, UserBookingList},
    error::{AppError, AppResult},
    models::BookingStatus,
    response::{ApiResponse, Meta},
    state::AppState,
    storage,
};

/// Convert every cart item into a confirmed booking, then clear the
/// cart. Items whose event has been deleted while sitting in the cart
/// are skipped. The cart is cleared only after all bookings for the
/// attempt have been created.
pub async fn checkout(state: &AppState) -> AppResult<ApiResponse<BookingList>> {
    let user = require_user(state).await?;

    let cart_items = state.cart.snapshot().await;
    if cart_items.is_empty() {
        return Err(AppError::Validation("Cart is empty".to_string()));
    }

    // Simulated payment-gateway latency.
    sleep(Duration::from_millis(state.config.simulated_latency_ms)).await;

    let mut created = Vec::new();
    for item in cart_items {
        if state.catalog.get(item.event_id).await.is_none() {
            tracing::warn!(event_id = %item.event_id, "skipping cart item for missing event");
            continue;
        }
        let total_amount: i64 = item.seats.iter().map(|seat| seat.price).sum();
        let booking = state
            .bookings
            .create(
                item.event_id,
                user.id,
                item.seats,
                total_amount,
                BookingStatus::Confirmed,
            )
            .await;
        created.push(booking);
    }

    state.cart.clear().await;
    let empty = state.cart.snapshot().await;
    state.storage.save(storage::CART_KEY, &empty).await?;

    tracing::info!(user_id = %user.id, bookings = created.len(), "checkout completed");
    Ok(ApiResponse::success(
        "Booking successful!",
        BookingList { items: created },
        Some(Meta::empty()),
    ))
}

pub async fn list_user_bookings(state: &AppState) -> AppResult<ApiResponse<UserBookingList>> {
    let user = require_user(state).await?;

    let mut items = Vec::new();
    for booking in state.bookings.for_user(user.id).await {
        // Bookings for deleted events fall out of the listing.
        let Some(event) = state.catalog.get(booking.event_id).await else {
            continue;
        };
        items.push(BookingWithEvent { booking, event });
    }

    Ok(ApiResponse::success(
        "Bookings",
        UserBookingList { items },
        Some(Meta::empty()),
    ))
}
