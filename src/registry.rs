//! In-memory location registry.
//!
//! A plain implementation of [`LocationRegistry`] for embedding programs and
//! tests. Loading the data is left to the caller.

use std::collections::HashMap;

use crate::location::{Location, LocationId, LocationKind};
use crate::traits::{CountryMembership, LocationRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,
    /// ISO 3166-1 alpha-3 code.
    pub iso3: String,
}

impl Country {
    pub fn new(name: impl Into<String>, iso3: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iso3: iso3.into(),
        }
    }
}

/// Locations grouped by country, indexed by id and name.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    locations: Vec<Location>,
    countries: Vec<Country>,
    /// Country index per location, parallel to `locations`.
    country_of: Vec<usize>,
    by_id: HashMap<LocationId, usize>,
    by_name: HashMap<String, Vec<usize>>,
    country_by_name: HashMap<String, usize>,
}

impl Atlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `location` in `country`, creating the country on first use.
    ///
    /// A location whose id is already known is ignored; returns whether it
    /// was added.
    pub fn add_location(&mut self, location: Location, country: &Country) -> bool {
        if self.by_id.contains_key(&location.id) {
            return false;
        }

        let country_index = match self.country_by_name.get(&country.name) {
            Some(&index) => index,
            None => {
                self.countries.push(country.clone());
                self.country_by_name
                    .insert(country.name.clone(), self.countries.len() - 1);
                self.countries.len() - 1
            }
        };

        let index = self.locations.len();
        self.by_id.insert(location.id, index);
        self.by_name.entry(location.name.clone()).or_default().push(index);
        self.country_of.push(country_index);
        self.locations.push(location);
        true
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country_of(&self, location: &Location) -> Option<&Country> {
        let index = *self.by_id.get(&location.id)?;
        Some(&self.countries[self.country_of[index]])
    }

    /// Locations of a country, most populous first.
    ///
    /// With `kinds`, only locations of those kinds are returned.
    pub fn locations_in(&self, country_name: &str, kinds: Option<&[LocationKind]>) -> Vec<&Location> {
        let Some(&country) = self.country_by_name.get(country_name) else {
            return Vec::new();
        };

        let mut found: Vec<&Location> = self
            .locations
            .iter()
            .zip(&self.country_of)
            .filter(|(_, owner)| **owner == country)
            .map(|(location, _)| location)
            .filter(|location| kinds.is_none_or(|kinds| kinds.contains(&location.kind)))
            .collect();
        found.sort_by(|a, b| b.population.cmp(&a.population));
        found
    }
}

impl CountryMembership for Atlas {
    fn same_country(&self, a: &Location, b: &Location) -> bool {
        match (self.by_id.get(&a.id), self.by_id.get(&b.id)) {
            (Some(&a), Some(&b)) => self.country_of[a] == self.country_of[b],
            _ => false,
        }
    }
}

impl LocationRegistry for Atlas {
    fn location_by_id(&self, id: LocationId) -> Option<&Location> {
        self.by_id.get(&id).map(|&index| &self.locations[index])
    }

    fn locations_by_name(&self, name: &str) -> Vec<&Location> {
        self.by_name
            .get(name)
            .map(|indices| indices.iter().map(|&index| &self.locations[index]).collect())
            .unwrap_or_default()
    }

    fn all_locations(&self) -> Vec<&Location> {
        self.locations.iter().collect()
    }
}
