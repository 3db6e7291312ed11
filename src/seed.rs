use chrono::{NaiveDate, NaiveTime};
use uuid::{Uuid, uuid};

use crate::models::{Event, User, Venue};

// Identifiers are fixed so carts and sessions persisted across restarts
// keep resolving against the demo catalog.
const STELLAR_ARENA: Uuid = uuid!("6f1b2b3a-8e54-4c29-9a6c-0d9b62c4a1e0");
const NEBULA_HALL: Uuid = uuid!("3b8f0a51-2d7c-4e1b-b0b3-57f1b6a9d214");
const COSMIC_CENTER: Uuid = uuid!("c4a7e9d2-66fb-4b08-9a11-8e2c5d73f6a9");

pub fn demo_venues() -> Vec<Venue> {
    vec![
        Venue {
            id: STELLAR_ARENA,
            name: "Stellar Arena".into(),
            location: "New York, NY".into(),
            capacity: 300,
            rows: 15,
            seats_per_row: 20,
        },
        Venue {
            id: NEBULA_HALL,
            name: "Nebula Hall".into(),
            location: "Los Angeles, CA".into(),
            capacity: 150,
            rows: 10,
            seats_per_row: 15,
        },
        Venue {
            id: COSMIC_CENTER,
            name: "Cosmic Center".into(),
            location: "Chicago, IL".into(),
            capacity: 200,
            rows: 10,
            seats_per_row: 20,
        },
    ]
}

pub fn demo_events() -> Vec<Event> {
    vec![
        Event {
            id: uuid!("5d2a9c81-4f3e-4a6b-8c07-1b9d3e5f7a20"),
            title: "Interstellar Symphony".into(),
            description: "A captivating orchestral performance featuring cosmic-inspired \
                          compositions from renowned composers."
                .into(),
            image_url: "https://images.unsplash.com/photo-1500673922987-e212871fec22".into(),
            date: date(2025, 5, 15),
            time: time(19, 0),
            venue_id: STELLAR_ARENA,
            price: 4_500,
            category: "Concert".into(),
        },
        Event {
            id: uuid!("9e4b7d63-1a2f-48c5-b3d8-6c0e2f4a8b91"),
            title: "Tech Beyond Tomorrow".into(),
            description: "A conference exploring cutting-edge technologies and their impact \
                          on our future."
                .into(),
            image_url: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b".into(),
            date: date(2025, 6, 22),
            time: time(10, 0),
            venue_id: NEBULA_HALL,
            price: 7_500,
            category: "Conference".into(),
        },
        Event {
            id: uuid!("2c6e8f04-7b5d-4d3a-a1c9-0f8e6d4b2a73"),
            title: "Quantum Comedy Night".into(),
            description: "Laugh until your sides hurt with our lineup of the funniest \
                          comedians in the galaxy."
                .into(),
            image_url: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5".into(),
            date: date(2025, 5, 30),
            time: time(20, 30),
            venue_id: COSMIC_CENTER,
            price: 3_500,
            category: "Comedy".into(),
        },
        Event {
            id: uuid!("7a1d3f59-9c8b-4e67-b2a4-5e3c1d9f8b06"),
            title: "Digital Art Exhibition".into(),
            description: "Experience the future of art through immersive digital installations \
                          and interactive exhibits."
                .into(),
            image_url: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158".into(),
            date: date(2025, 7, 10),
            time: time(11, 0),
            venue_id: STELLAR_ARENA,
            price: 2_500,
            category: "Exhibition".into(),
        },
        Event {
            id: uuid!("e8c5a2b7-0d4f-4b91-8f6e-3a7c9e1d5b42"),
            title: "Astronaut Talk: Life in Space".into(),
            description: "Join retired astronaut Dr. Sarah Chen as she shares her experiences \
                          living aboard the ISS."
                .into(),
            image_url: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7".into(),
            date: date(2025, 6, 5),
            time: time(18, 0),
            venue_id: NEBULA_HALL,
            price: 4_000,
            category: "Talk".into(),
        },
    ]
}

pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: uuid!("4e8a1c63-2b9d-4f07-a5e8-7c3b1d9f2e64"),
            email: "admin@eventhorizon.com".into(),
            name: "Admin User".into(),
            is_admin: true,
        },
        User {
            id: uuid!("b2d7f4a9-6e1c-48b3-9d05-8f4a2c6e1b37"),
            email: "user@example.com".into(),
            name: "Regular User".into(),
            is_admin: false,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid demo time")
}
