//! Real city locations for routing fixtures.
//!
//! Coordinates and ids follow the public world-cities dataset.

#![allow(dead_code)]

use waypoint_planner::{Atlas, Country, Location, LocationId, LocationKind, LocationRegistry};

/// A city row: (id, name, lat, lng, kind, population).
pub type CityRow = (u64, &'static str, f64, f64, LocationKind, u64);

use LocationKind::{Admin, Minor, Primary};

pub const AUSTRALIA: &[CityRow] = &[
    (1036533631, "Melbourne", -37.8136, 144.9631, Admin, 4529500),
    (1036074917, "Sydney", -33.8678, 151.21, Admin, 4840600),
    (1036142029, "Canberra", -35.2931, 149.1269, Primary, 381488),
    (1036192929, "Brisbane", -27.4678, 153.0281, Admin, 2360241),
    (1036538171, "Adelaide", -34.9275, 138.6, Admin, 1295714),
];

pub const MALAYSIA: &[CityRow] = &[
    (1458988644, "Kuala Lumpur", 3.1478, 101.6953, Primary, 8285000),
    (1458155137, "Johor Bahru", 1.4556, 103.7611, Admin, 802489),
];

pub const NEW_ZEALAND: &[CityRow] = &[
    (1554772152, "Wellington", -41.2889, 174.7772, Primary, 215400),
    (1554435911, "Auckland", -36.8481, 174.7625, Admin, 1346091),
];

pub const FRANCE: &[CityRow] = &[
    (1250015082, "Paris", 48.8567, 2.3522, Primary, 11060000),
    (1250196189, "Lyon", 45.76, 4.84, Admin, 522969),
];

pub const CHINA: &[CityRow] = &[
    (1156228865, "Beijing", 39.905, 116.3914, Primary, 18960744),
    (1156256829, "Baoding", 38.8671, 115.4845, Minor, 11544036),
];

/// South Africa has three primary cities.
pub const SOUTH_AFRICA: &[CityRow] = &[
    (1710176249, "Pretoria", -25.7461, 28.1881, Primary, 2921488),
    (1710680650, "Cape Town", -33.9253, 18.4239, Primary, 4710000),
    (1710495933, "Bloemfontein", -29.1167, 26.2167, Primary, 556000),
    (1710550792, "Johannesburg", -26.2044, 28.0416, Admin, 8000000),
];

pub fn location(row: &CityRow) -> Location {
    let &(id, name, lat, lng, kind, population) = row;
    Location::new(id, name, (lat, lng), kind, population)
}

pub fn locations(rows: &[CityRow]) -> Vec<Location> {
    rows.iter().map(location).collect()
}

/// Every fixture city, registered under its country.
pub fn world_atlas() -> Atlas {
    let mut atlas = Atlas::new();
    let countries = [
        (Country::new("Australia", "AUS"), AUSTRALIA),
        (Country::new("Malaysia", "MYS"), MALAYSIA),
        (Country::new("New Zealand", "NZL"), NEW_ZEALAND),
        (Country::new("France", "FRA"), FRANCE),
        (Country::new("China", "CHN"), CHINA),
        (Country::new("South Africa", "ZAF"), SOUTH_AFRICA),
    ];
    for (country, rows) in countries {
        for row in rows {
            atlas.add_location(location(row), &country);
        }
    }
    atlas
}

/// Look up a fixture city by name, cloned out of the atlas.
pub fn city(atlas: &Atlas, name: &str) -> Location {
    atlas
        .locations_by_name(name)
        .first()
        .map(|location| (*location).clone())
        .unwrap_or_else(|| panic!("fixture city {} missing", name))
}

pub fn id_of(atlas: &Atlas, name: &str) -> LocationId {
    city(atlas, name).id
}
