//! Planner configuration.

use serde::Deserialize;

use crate::error::{PlannerError, VehicleError};
use crate::vehicle::Vehicle;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Vehicles offered to the user, in menu order.
    pub fleet: Vec<Vehicle>,
    /// Evaluate location pairs on the rayon pool when building graphs.
    pub parallel_graph_build: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            fleet: Vehicle::example_fleet(),
            parallel_graph_build: true,
        }
    }
}

impl PlannerOptions {
    /// Parse options from JSON; missing fields take their defaults.
    ///
    /// Rejects vehicles with a zero speed.
    pub fn from_json(json: &str) -> Result<Self, PlannerError> {
        let options: PlannerOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), VehicleError> {
        for vehicle in &self.fleet {
            match vehicle {
                Vehicle::ConstantSpeed { speed: 0 }
                | Vehicle::DomesticOrPrimary {
                    in_country_speed: 0,
                    ..
                }
                | Vehicle::DomesticOrPrimary {
                    between_primary_speed: 0,
                    ..
                } => return Err(VehicleError::ZeroSpeed),
                _ => {}
            }
        }
        Ok(())
    }

    /// Vehicle at 1-based menu position `choice`.
    pub fn vehicle(&self, choice: usize) -> Option<&Vehicle> {
        choice.checked_sub(1).and_then(|index| self.fleet.get(index))
    }
}
