//! Test fixtures for waypoint-planner.
//!
//! Provides real world-city coordinates grouped by country, and a helper
//! that loads them into an [`Atlas`](waypoint_planner::Atlas).

pub mod world_cities;

pub use world_cities::*;
