use std::collections::HashSet;

use eventhorizon::{
    models::{SeatStatus, Venue},
    seating::{self, PREMIUM_SURCHARGE},
    seed,
};
use uuid::Uuid;

#[test]
fn grid_has_exactly_rows_times_seats_with_unique_ids() {
    let (event, venue) = demo_event_and_venue();
    let seats = seating::seat_map(&event, &venue);

    assert_eq!(seats.len(), (venue.rows * venue.seats_per_row) as usize);

    let ids: HashSet<&str> = seats.iter().map(|seat| seat.id.as_str()).collect();
    assert_eq!(ids.len(), seats.len(), "seat ids must be unique");
}

#[test]
fn row_labels_are_sequential_letters_and_numbers_one_based() {
    let (event, venue) = demo_event_and_venue();
    let seats = seating::seat_map(&event, &venue);

    let rows: Vec<char> = {
        let mut rows: Vec<char> = seats.iter().map(|seat| seat.row).collect();
        rows.dedup();
        rows
    };
    let expected: Vec<char> = (0..venue.rows).map(|i| (b'A' + i as u8) as char).collect();
    assert_eq!(rows, expected);

    for row in &expected {
        let numbers: Vec<u32> = seats
            .iter()
            .filter(|seat| seat.row == *row)
            .map(|seat| seat.number)
            .collect();
        let want: Vec<u32> = (1..=venue.seats_per_row).collect();
        assert_eq!(numbers, want);
    }
}

#[test]
fn first_three_rows_carry_the_premium_surcharge() {
    let (event, venue) = demo_event_and_venue();
    let seats = seating::seat_map(&event, &venue);

    for seat in &seats {
        let expected = if matches!(seat.row, 'A' | 'B' | 'C') {
            event.price + PREMIUM_SURCHARGE
        } else {
            event.price
        };
        assert_eq!(seat.price, expected, "seat {} price", seat.id);
    }
}

#[test]
fn demo_booked_set_is_marked_and_everything_else_is_available() {
    let (event, venue) = demo_event_and_venue();
    let seats = seating::seat_map(&event, &venue);

    let booked: Vec<&str> = seats
        .iter()
        .filter(|seat| seat.status == SeatStatus::Booked)
        .map(|seat| seat.id.as_str())
        .collect();
    assert_eq!(booked.len(), 10);
    assert!(booked.contains(&seating::seat_id(event.id, 'A', 1).as_str()));
    assert!(booked.contains(&seating::seat_id(event.id, 'J', 4).as_str()));

    assert!(
        seats
            .iter()
            .all(|seat| seat.status != SeatStatus::Reserved),
        "reserved is never produced"
    );
}

#[test]
fn identical_inputs_yield_identical_grids() {
    let (event, venue) = demo_event_and_venue();
    let first = seating::seat_map(&event, &venue);
    let second = seating::seat_map(&event, &venue);

    let a: Vec<(String, i64, SeatStatus)> = first
        .into_iter()
        .map(|seat| (seat.id, seat.price, seat.status))
        .collect();
    let b: Vec<(String, i64, SeatStatus)> = second
        .into_iter()
        .map(|seat| (seat.id, seat.price, seat.status))
        .collect();
    assert_eq!(a, b);
}

#[test]
fn degenerate_venues_yield_empty_grids() {
    let (event, venue) = demo_event_and_venue();

    let no_rows = Venue {
        id: Uuid::new_v4(),
        rows: 0,
        ..venue.clone()
    };
    assert!(seating::seat_map(&event, &no_rows).is_empty());

    let no_seats = Venue {
        id: Uuid::new_v4(),
        seats_per_row: 0,
        ..venue
    };
    assert!(seating::seat_map(&event, &no_seats).is_empty());
}

fn demo_event_and_venue() -> (eventhorizon::models::Event, Venue) {
    let event = seed::demo_events().into_iter().next().expect("demo event");
    let venue = seed::demo_venues()
        .into_iter()
        .find(|venue| venue.id == event.venue_id)
        .expect("demo venue");
    (event, venue)
}
