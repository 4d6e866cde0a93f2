//! Vehicle travel policies.
//!
//! Each vehicle decides whether a direct hop between two locations is
//! possible and, if so, how many whole hours it takes.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::VehicleError;
use crate::haversine::distance_km;
use crate::location::Location;
use crate::traits::CountryMembership;

/// Duration of a trip in whole hours, or `Infeasible` when it cannot be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelTime {
    Hours(u64),
    Infeasible,
}

impl TravelTime {
    pub const ZERO: TravelTime = TravelTime::Hours(0);

    pub fn is_feasible(&self) -> bool {
        matches!(self, TravelTime::Hours(_))
    }

    pub fn hours(&self) -> Option<u64> {
        match self {
            TravelTime::Hours(hours) => Some(*hours),
            TravelTime::Infeasible => None,
        }
    }

    /// Hours for `distance` at `speed`, rounded up.
    fn at_speed(distance: f64, speed: u32) -> TravelTime {
        if distance <= 0.0 {
            return TravelTime::ZERO;
        }
        if speed == 0 {
            return TravelTime::Infeasible;
        }
        TravelTime::Hours((distance / f64::from(speed)).ceil() as u64)
    }
}

impl Add for TravelTime {
    type Output = TravelTime;

    fn add(self, rhs: TravelTime) -> TravelTime {
        match (self, rhs) {
            (TravelTime::Hours(a), TravelTime::Hours(b)) => TravelTime::Hours(a.saturating_add(b)),
            _ => TravelTime::Infeasible,
        }
    }
}

impl Sum for TravelTime {
    fn sum<I: Iterator<Item = TravelTime>>(iter: I) -> TravelTime {
        iter.fold(TravelTime::ZERO, Add::add)
    }
}

impl Ord for TravelTime {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TravelTime::Hours(a), TravelTime::Hours(b)) => a.cmp(b),
            (TravelTime::Hours(_), TravelTime::Infeasible) => Ordering::Less,
            (TravelTime::Infeasible, TravelTime::Hours(_)) => Ordering::Greater,
            (TravelTime::Infeasible, TravelTime::Infeasible) => Ordering::Equal,
        }
    }
}

impl PartialOrd for TravelTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelTime::Hours(hours) => write!(f, "{} h", hours),
            TravelTime::Infeasible => f.write_str("infeasible"),
        }
    }
}

/// A mode of transport. Speeds are km/h, distances km.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Vehicle {
    /// Goes anywhere at a fixed speed.
    ConstantSpeed { speed: u32 },
    /// Travels within a country, or between two primary locations anywhere.
    /// The primary speed wins when both rules apply.
    DomesticOrPrimary {
        in_country_speed: u32,
        between_primary_speed: u32,
    },
    /// Covers any hop up to `max_distance` in exactly `hours`.
    RangeLimited { hours: u32, max_distance: u32 },
}

impl Vehicle {
    pub fn constant_speed(speed: u32) -> Result<Self, VehicleError> {
        if speed == 0 {
            return Err(VehicleError::ZeroSpeed);
        }
        Ok(Vehicle::ConstantSpeed { speed })
    }

    pub fn domestic_or_primary(
        in_country_speed: u32,
        between_primary_speed: u32,
    ) -> Result<Self, VehicleError> {
        if in_country_speed == 0 || between_primary_speed == 0 {
            return Err(VehicleError::ZeroSpeed);
        }
        Ok(Vehicle::DomesticOrPrimary {
            in_country_speed,
            between_primary_speed,
        })
    }

    pub fn range_limited(hours: u32, max_distance: u32) -> Self {
        Vehicle::RangeLimited { hours, max_distance }
    }

    /// The three reference vehicles.
    pub fn example_fleet() -> Vec<Vehicle> {
        vec![
            Vehicle::ConstantSpeed { speed: 200 },
            Vehicle::DomesticOrPrimary {
                in_country_speed: 100,
                between_primary_speed: 500,
            },
            Vehicle::RangeLimited {
                hours: 3,
                max_distance: 2000,
            },
        ]
    }

    /// Duration of a direct trip from `departure` to `arrival`.
    pub fn travel_time<C>(&self, departure: &Location, arrival: &Location, countries: &C) -> TravelTime
    where
        C: CountryMembership + ?Sized,
    {
        let distance = distance_km(departure, arrival);
        match *self {
            Vehicle::ConstantSpeed { speed } => TravelTime::at_speed(distance, speed),
            Vehicle::DomesticOrPrimary {
                in_country_speed,
                between_primary_speed,
            } => {
                if departure.is_primary() && arrival.is_primary() {
                    TravelTime::at_speed(distance, between_primary_speed)
                } else if countries.same_country(departure, arrival) {
                    TravelTime::at_speed(distance, in_country_speed)
                } else {
                    TravelTime::Infeasible
                }
            }
            Vehicle::RangeLimited { hours, max_distance } => {
                if distance <= f64::from(max_distance) {
                    TravelTime::Hours(u64::from(hours))
                } else {
                    TravelTime::Infeasible
                }
            }
        }
    }

    /// Total duration of visiting `stops` in order.
    ///
    /// Zero for fewer than two stops; infeasible if any leg is.
    pub fn itinerary_time<C>(&self, stops: &[Location], countries: &C) -> TravelTime
    where
        C: CountryMembership + ?Sized,
    {
        stops
            .windows(2)
            .map(|leg| self.travel_time(&leg[0], &leg[1], countries))
            .sum()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vehicle::ConstantSpeed { speed } => write!(f, "ConstantSpeed ({} km/h)", speed),
            Vehicle::DomesticOrPrimary {
                in_country_speed,
                between_primary_speed,
            } => write!(
                f,
                "DomesticOrPrimary ({} km/h | {} km/h)",
                in_country_speed, between_primary_speed
            ),
            Vehicle::RangeLimited { hours, max_distance } => {
                write!(f, "RangeLimited ({} h | {} km)", hours, max_distance)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationKind;
    use crate::traits::NoCountries;

    struct EveryoneShares;

    impl CountryMembership for EveryoneShares {
        fn same_country(&self, _a: &Location, _b: &Location) -> bool {
            true
        }
    }

    fn place(id: u64, lat: f64, lng: f64, kind: LocationKind) -> Location {
        Location::new(id, format!("p{}", id), (lat, lng), kind, 0)
    }

    #[test]
    fn test_sum_propagates_infeasible() {
        let legs = [TravelTime::Hours(2), TravelTime::Infeasible, TravelTime::Hours(5)];
        assert_eq!(legs.into_iter().sum::<TravelTime>(), TravelTime::Infeasible);
        assert_eq!(TravelTime::Hours(2) + TravelTime::Hours(3), TravelTime::Hours(5));
    }

    #[test]
    fn test_finite_orders_below_infeasible() {
        assert!(TravelTime::Hours(u64::MAX) < TravelTime::Infeasible);
        assert!(TravelTime::Hours(1) < TravelTime::Hours(2));
    }

    #[test]
    fn test_zero_speed_constructors_rejected() {
        assert_eq!(Vehicle::constant_speed(0), Err(VehicleError::ZeroSpeed));
        assert_eq!(Vehicle::domestic_or_primary(100, 0), Err(VehicleError::ZeroSpeed));
    }

    #[test]
    fn test_hand_built_zero_speed_is_infeasible() {
        let vehicle = Vehicle::ConstantSpeed { speed: 0 };
        let a = place(1, 0.0, 0.0, LocationKind::Minor);
        let b = place(2, 0.0, 1.0, LocationKind::Minor);
        assert_eq!(vehicle.travel_time(&a, &b, &NoCountries), TravelTime::Infeasible);
        assert_eq!(vehicle.travel_time(&a, &a, &NoCountries), TravelTime::ZERO);
    }

    #[test]
    fn test_primary_speed_overrides_same_country() {
        let vehicle = Vehicle::DomesticOrPrimary {
            in_country_speed: 100,
            between_primary_speed: 500,
        };
        // ~1112 km apart along the equator
        let a = place(1, 0.0, 0.0, LocationKind::Primary);
        let b = place(2, 0.0, 10.0, LocationKind::Primary);
        assert_eq!(vehicle.travel_time(&a, &b, &EveryoneShares), TravelTime::Hours(3));
    }

    #[test]
    fn test_display_names_parameters() {
        let fleet = Vehicle::example_fleet();
        assert_eq!(fleet[0].to_string(), "ConstantSpeed (200 km/h)");
        assert_eq!(fleet[1].to_string(), "DomesticOrPrimary (100 km/h | 500 km/h)");
        assert_eq!(fleet[2].to_string(), "RangeLimited (3 h | 2000 km)");
    }

    #[test]
    fn test_vehicle_deserializes_from_tagged_json() {
        let vehicle: Vehicle =
            serde_json::from_str(r#"{"kind":"range_limited","hours":1,"max_distance":50}"#).unwrap();
        assert_eq!(vehicle, Vehicle::range_limited(1, 50));
    }
}
