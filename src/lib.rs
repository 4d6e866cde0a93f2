//! waypoint-planner: routing between map locations for different vehicles.
//!
//! Builds a travel graph from a location set and a vehicle's reachability
//! rules, finds minimum-hours routes, and edits the resulting itineraries.

pub mod config;
pub mod error;
pub mod graph;
pub mod haversine;
pub mod itinerary;
pub mod location;
pub mod registry;
pub mod solver;
pub mod traits;
pub mod vehicle;

pub use config::PlannerOptions;
pub use error::{LocationKindError, PlannerError, VehicleError};
pub use graph::RouteGraph;
pub use haversine::distance_km;
pub use itinerary::Itinerary;
pub use location::{Location, LocationId, LocationKind};
pub use registry::{Atlas, Country};
pub use solver::{ShortestPath, find_shortest_path, find_shortest_path_in, find_shortest_path_with, route_between_ids, route_between_names};
pub use traits::{CountryMembership, LocationRegistry, NoCountries};
pub use vehicle::{TravelTime, Vehicle};
