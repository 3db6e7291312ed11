use std::collections::HashSet;

use uuid::Uuid;

use crate::models::{Event, Seat, SeatStatus, Venue};

/// Surcharge in cents applied to every seat in the first three rows.
pub const PREMIUM_SURCHARGE: i64 = 2_000;

const PREMIUM_ROWS: u32 = 3;

// Demo inventory: these seats show as already booked for every event.
const DEMO_BOOKED: &[(char, u32)] = &[
    ('A', 1),
    ('A', 2),
    ('C', 5),
    ('C', 6),
    ('C', 7),
    ('F', 10),
    ('F', 11),
    ('F', 12),
    ('J', 3),
    ('J', 4),
];

pub fn seat_id(event_id: Uuid, row: char, number: u32) -> String {
    format!("{event_id}-{row}-{number}")
}

/// Derive the full seat grid for an event at its venue. Deterministic:
/// the same event and venue always yield the same seats, prices and
/// statuses. A venue with zero rows or zero seats per row yields an
/// empty grid.
pub fn seat_map(event: &Event, venue: &Venue) -> Vec<Seat> {
    let booked: HashSet<String> = DEMO_BOOKED
        .iter()
        .map(|&(row, number)| seat_id(event.id, row, number))
        .collect();

    let mut seats = Vec::with_capacity((venue.rows * venue.seats_per_row) as usize);
    for row_index in 0..venue.rows {
        let row = (b'A' + row_index as u8) as char;
        let price = if row_index < PREMIUM_ROWS {
            event.price + PREMIUM_SURCHARGE
        } else {
            event.price
        };
        for number in 1..=venue.seats_per_row {
            let id = seat_id(event.id, row, number);
            let status = if booked.contains(&id) {
                SeatStatus::Booked
            } else {
                SeatStatus::Available
            };
            seats.push(Seat {
                id,
                row,
                number,
                status,
                price,
            });
        }
    }
    seats
}
