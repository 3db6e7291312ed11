use crate::{
    dto::cart::{AddToCartRequest, CartItemDto, CartList, RemoveFromCartRequest},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::AppState,
    storage,
};

pub async fn list_cart(state: &AppState) -> AppResult<ApiResponse<CartList>> {
    let data = build_cart_list(state).await;
    Ok(ApiResponse::success("OK", data, Some(Meta::empty())))
}

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartList>> {
    if payload.seats.is_empty() {
        return Err(AppError::Validation(
            "at least one seat must be selected".to_string(),
        ));
    }
    if state.catalog.get(payload.event_id).await.is_none() {
        return Err(AppError::Validation("event not found".to_string()));
    }

    let added = match state.cart.add(payload.event_id, payload.seats).await {
        Some(added) => added,
        None => {
            return Err(AppError::Validation(
                "These seats are already in your cart".to_string(),
            ));
        }
    };
    persist_cart(state).await?;

    tracing::info!(event_id = %payload.event_id, added, "seats added to cart");
    let data = build_cart_list(state).await;
    Ok(ApiResponse::success(
        format!("Added {added} seat(s) to your cart"),
        data,
        Some(Meta::empty()),
    ))
}

pub async fn remove_from_cart(
    state: &AppState,
    payload: RemoveFromCartRequest,
) -> AppResult<ApiResponse<CartList>> {
    let changed = state
        .cart
        .remove(payload.event_id, &payload.seat_ids)
        .await;
    if changed {
        persist_cart(state).await?;
        tracing::info!(event_id = %payload.event_id, "seats removed from cart");
    }

    let data = build_cart_list(state).await;
    Ok(ApiResponse::success(
        "Removed seats from cart",
        data,
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(state: &AppState) -> AppResult<ApiResponse<serde_json::Value>> {
    state.cart.clear().await;
    persist_cart(state).await?;

    tracing::info!("cart cleared");
    Ok(ApiResponse::success(
        "Cart cleared",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn cart_total(state: &AppState) -> i64 {
    state.cart.total().await
}

async fn build_cart_list(state: &AppState) -> CartList {
    let mut items = Vec::new();
    for item in state.cart.snapshot().await {
        // An item whose event has been deleted is omitted, not an error.
        let Some(event) = state.catalog.get(item.event_id).await else {
            continue;
        };
        let subtotal: i64 = item.seats.iter().map(|seat| seat.price).sum();
        items.push(CartItemDto {
            event,
            seats: item.seats,
            subtotal,
        });
    }
    CartList {
        items,
        total: state.cart.total().await,
    }
}

async fn persist_cart(state: &AppState) -> AppResult<()> {
    let items = state.cart.snapshot().await;
    state.storage.save(storage::CART_KEY, &items).await
}
