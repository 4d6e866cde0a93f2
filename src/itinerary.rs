//! Ordered sequences of locations.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::haversine::distance_km;
use crate::location::Location;
use crate::traits::CountryMembership;
use crate::vehicle::{TravelTime, Vehicle};

/// A route through locations, in visiting order.
///
/// Duplicates are allowed. Renders as `"A -> B -> C (NNN km)"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    locations: Vec<Location>,
}

impl Itinerary {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn first(&self) -> Option<&Location> {
        self.locations.first()
    }

    pub fn last(&self) -> Option<&Location> {
        self.locations.last()
    }

    pub fn names(&self) -> Vec<&str> {
        self.locations.iter().map(|location| location.name.as_str()).collect()
    }

    pub fn append(&mut self, location: Location) {
        self.locations.push(location);
    }

    /// Sum of great-circle distances between consecutive stops, in km.
    pub fn total_distance(&self) -> f64 {
        self.locations
            .windows(2)
            .fold(0.0, |total, leg| total + distance_km(&leg[0], &leg[1]))
    }

    /// Insert `location` where it adds the least distance.
    ///
    /// Returns the chosen index. Ties go to the lowest index.
    pub fn insert_at_minimum_cost(&mut self, location: Location) -> usize {
        let index = self.cheapest_insertion(&location);
        trace!(location = %location, index, "inserting at minimum cost");
        self.locations.insert(index, location);
        index
    }

    fn cheapest_insertion(&self, location: &Location) -> usize {
        let n = self.locations.len();
        let mut best_position = 0;
        let mut best_cost = f64::INFINITY;

        for position in 0..=n {
            let cost = if n == 0 {
                0.0
            } else if position == 0 {
                distance_km(location, &self.locations[0])
            } else if position == n {
                distance_km(&self.locations[n - 1], location)
            } else {
                let prev = &self.locations[position - 1];
                let next = &self.locations[position];
                distance_km(prev, location) + distance_km(location, next) - distance_km(prev, next)
            };

            if cost < best_cost {
                best_cost = cost;
                best_position = position;
            }
        }

        best_position
    }

    /// Hours for `vehicle` to follow this itinerary.
    pub fn travel_time<C>(&self, vehicle: &Vehicle, countries: &C) -> TravelTime
    where
        C: CountryMembership + ?Sized,
    {
        vehicle.itinerary_time(&self.locations, countries)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, location) in self.locations.iter().enumerate() {
            if position > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(&location.name)?;
        }
        if !self.locations.is_empty() {
            f.write_str(" ")?;
        }
        write!(f, "({:.0} km)", self.total_distance())
    }
}
