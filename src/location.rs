//! Location values consumed by the routing engine.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocationKindError;

/// Globally unique location identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Administrative category of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// National capital.
    Primary,
    /// First-level administrative capital.
    Admin,
    /// Lower-level administrative capital.
    Minor,
    /// No category in the source data.
    Unclassified,
}

impl LocationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Primary => "primary",
            LocationKind::Admin => "admin",
            LocationKind::Minor => "minor",
            LocationKind::Unclassified => "",
        }
    }
}

impl FromStr for LocationKind {
    type Err = LocationKindError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim() {
            "primary" => Ok(LocationKind::Primary),
            "admin" => Ok(LocationKind::Admin),
            "minor" => Ok(LocationKind::Minor),
            "" => Ok(LocationKind::Unclassified),
            other => Err(LocationKindError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point on the map that vehicles travel between.
///
/// Identity is the [`LocationId`]: two locations with the same id compare
/// equal even if their other fields differ, and names may collide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    /// Coordinates as (lat, lng) in degrees.
    pub coordinates: (f64, f64),
    pub kind: LocationKind,
    /// Population, zero when unknown.
    pub population: u64,
}

impl Location {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        coordinates: (f64, f64),
        kind: LocationKind,
        population: u64,
    ) -> Self {
        Self {
            id: LocationId(id),
            name: name.into(),
            coordinates,
            kind,
            population,
        }
    }

    pub fn is_primary(&self) -> bool {
        self.kind == LocationKind::Primary
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
