use crate::{
    auth::{ensure_admin, require_user},
    dto::bookings::BookingList,
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// Full ledger in insertion order, admin only.
pub async fn list_all_bookings(state: &AppState) -> AppResult<ApiResponse<BookingList>> {
    let user = require_user(state).await?;
    ensure_admin(&user)?;

    let items = state.bookings.all().await;
    Ok(ApiResponse::success(
        "Bookings",
        BookingList { items },
        Some(Meta::empty()),
    ))
}
