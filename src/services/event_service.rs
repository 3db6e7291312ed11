use uuid::Uuid;

use crate::{
    auth::{ensure_admin, require_user},
    dto::events::{
        CategoryList, CreateEventRequest, EventList, EventQuery, EventWithVenue, SeatMap,
        UpdateEventRequest, VenueList,
    },
    error::{AppError, AppResult},
    models::{Event, Venue},
    response::{ApiResponse, Meta},
    seating,
    state::AppState,
};

pub async fn list_events(state: &AppState, query: EventQuery) -> AppResult<ApiResponse<EventList>> {
    let (page, limit, offset) = query.pagination.normalize();

    let mut listings: Vec<EventWithVenue> = Vec::new();
    for event in state.catalog.all().await {
        let Some(venue) = state.catalog.venue(event.venue_id) else {
            continue;
        };

        if let Some(q) = query.q.as_ref().filter(|s| !s.is_empty()) {
            let needle = q.to_lowercase();
            let matched = [
                event.title.as_str(),
                event.description.as_str(),
                venue.name.as_str(),
                venue.location.as_str(),
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
            if !matched {
                continue;
            }
        }

        if let Some(category) = query.category.as_ref().filter(|s| !s.is_empty()) {
            if event.category != *category {
                continue;
            }
        }

        listings.push(EventWithVenue { event, venue });
    }

    listings.sort_by_key(|listing| (listing.event.date, listing.event.time));

    let total = listings.len() as i64;
    let items: Vec<EventWithVenue> = listings
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Events", EventList { items }, Some(meta)))
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let mut items: Vec<String> = Vec::new();
    for event in state.catalog.all().await {
        if !items.contains(&event.category) {
            items.push(event.category);
        }
    }
    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        None,
    ))
}

pub async fn list_venues(state: &AppState) -> AppResult<ApiResponse<VenueList>> {
    let items = state.catalog.venues().to_vec();
    Ok(ApiResponse::success("Venues", VenueList { items }, None))
}

pub async fn get_event(state: &AppState, id: Uuid) -> AppResult<ApiResponse<EventWithVenue>> {
    let (event, venue) = find_event(state, id).await?;
    Ok(ApiResponse::success(
        "Event",
        EventWithVenue { event, venue },
        None,
    ))
}

pub async fn get_event_seats(state: &AppState, id: Uuid) -> AppResult<ApiResponse<SeatMap>> {
    let (event, venue) = find_event(state, id).await?;
    let seats = seating::seat_map(&event, &venue);
    Ok(ApiResponse::success(
        "Seats",
        SeatMap {
            event_id: id,
            seats,
        },
        None,
    ))
}

pub async fn create_event(
    state: &AppState,
    payload: CreateEventRequest,
) -> AppResult<ApiResponse<Event>> {
    let user = require_user(state).await?;
    ensure_admin(&user)?;

    validate_required(&payload.title, payload.price)?;
    if state.catalog.venue(payload.venue_id).is_none() {
        return Err(AppError::Validation("venue not found".to_string()));
    }

    let event = Event {
        id: Uuid::new_v4(),
        title: payload.title,
        description: payload.description,
        image_url: payload.image_url,
        date: payload.date,
        time: payload.time,
        venue_id: payload.venue_id,
        price: payload.price,
        category: payload.category,
    };
    state.catalog.insert(event.clone()).await;

    tracing::info!(event_id = %event.id, title = %event.title, "event created");
    Ok(ApiResponse::success(
        "Event created successfully",
        event,
        Some(Meta::empty()),
    ))
}

pub async fn update_event(
    state: &AppState,
    id: Uuid,
    payload: UpdateEventRequest,
) -> AppResult<ApiResponse<Event>> {
    let user = require_user(state).await?;
    ensure_admin(&user)?;

    if let Some(title) = payload.title.as_ref() {
        if title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".to_string()));
        }
    }
    if let Some(price) = payload.price {
        if price <= 0 {
            return Err(AppError::Validation(
                "price must be greater than 0".to_string(),
            ));
        }
    }
    if let Some(venue_id) = payload.venue_id {
        if state.catalog.venue(venue_id).is_none() {
            return Err(AppError::Validation("venue not found".to_string()));
        }
    }

    let updated = state
        .catalog
        .update(id, |event| {
            if let Some(title) = payload.title {
                event.title = title;
            }
            if let Some(description) = payload.description {
                event.description = description;
            }
            if let Some(image_url) = payload.image_url {
                event.image_url = image_url;
            }
            if let Some(date) = payload.date {
                event.date = date;
            }
            if let Some(time) = payload.time {
                event.time = time;
            }
            if let Some(venue_id) = payload.venue_id {
                event.venue_id = venue_id;
            }
            if let Some(price) = payload.price {
                event.price = price;
            }
            if let Some(category) = payload.category {
                event.category = category;
            }
        })
        .await;

    let event = match updated {
        Some(event) => event,
        None => return Err(AppError::NotFound),
    };

    tracing::info!(event_id = %event.id, "event updated");
    Ok(ApiResponse::success(
        "Event updated successfully",
        event,
        Some(Meta::empty()),
    ))
}

pub async fn delete_event(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let user = require_user(state).await?;
    ensure_admin(&user)?;

    if !state.catalog.delete(id).await {
        return Err(AppError::NotFound);
    }

    tracing::info!(event_id = %id, "event deleted");
    Ok(ApiResponse::success(
        "Event deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn find_event(state: &AppState, id: Uuid) -> AppResult<(Event, Venue)> {
    let event = match state.catalog.get(id).await {
        Some(event) => event,
        None => return Err(AppError::NotFound),
    };
    let venue = match state.catalog.venue(event.venue_id) {
        Some(venue) => venue,
        None => return Err(AppError::NotFound),
    };
    Ok((event, venue))
}

fn validate_required(title: &str, price: i64) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }
    if price <= 0 {
        return Err(AppError::Validation(
            "price must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
