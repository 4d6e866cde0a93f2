//! Contracts the routing engine consumes from its collaborators.
//!
//! Location data lives outside the engine (loaded from a tabular source,
//! indexed by name, id and country). The engine only needs these queries.

use crate::location::{Location, LocationId};

/// Answers whether two locations belong to the same country.
pub trait CountryMembership {
    fn same_country(&self, a: &Location, b: &Location) -> bool;
}

/// Lookup over all known locations.
pub trait LocationRegistry: CountryMembership {
    fn location_by_id(&self, id: LocationId) -> Option<&Location>;

    /// Every location with this exact name, possibly none.
    fn locations_by_name(&self, name: &str) -> Vec<&Location>;

    fn all_locations(&self) -> Vec<&Location>;
}

/// Treats every pair of locations as being in different countries.
///
/// Useful with vehicles that never consult country membership.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCountries;

impl CountryMembership for NoCountries {
    fn same_country(&self, _a: &Location, _b: &Location) -> bool {
        false
    }
}

impl<T: CountryMembership + ?Sized> CountryMembership for &T {
    fn same_country(&self, a: &Location, b: &Location) -> bool {
        (**self).same_country(a, b)
    }
}
