//! Scenario files for the N-body simulator.
//!
//! ```yaml
//! time: 1
//! bodies:
//!   earth:
//!     name: Earth
//!     color: [0.1, 0.25, 0.35]
//!     radius: 6371000.0
//!     mass: 5.97e24
//!     position: [38939382479.43757, 0.0, -141748807727.33176]
//!     velocity: [29207.968612659042, 0.0, 8023.631940831046]
//! ```

use crate::constants::{DEFAULT_COLOR, MAX_TIME_STEP, SUN_COLOR, SUN_ID, SUN_RADIUS};
use crate::errors::StateErrors;
use crate::models::state::StateVector;
use crate::physics::system::SystemSolution;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioBody {
    pub name: String,
    pub color: [f64; 3],
    pub radius: f64,        // m
    pub mass: f64,          // kg
    pub position: [f64; 3], // m
    pub velocity: [f64; 3], // m/s
}

impl ScenarioBody {
    fn new(id: &str, color: [f64; 3], radius: f64, mass: f64, state: &StateVector) -> Self {
        ScenarioBody {
            name: display_name(id),
            color,
            radius,
            mass,
            position: state.position.into(),
            velocity: state.velocity.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub time: i64, // simulator time step (s)
    pub bodies: BTreeMap<String, ScenarioBody>,
}

impl Scenario {
    /// Every solved body plus the Sun at the origin with its balancing velocity.
    /// `time_step` must be in `1..=MAX_TIME_STEP` seconds.
    pub fn from_solution(solution: &SystemSolution, time_step: i64) -> Result<Self, StateErrors> {
        if !(1..=MAX_TIME_STEP).contains(&time_step) {
            return Err(StateErrors::InvalidTimeStep(time_step));
        }
        let mut bodies = BTreeMap::new();

        bodies.insert(
            SUN_ID.to_string(),
            ScenarioBody::new(SUN_ID, SUN_COLOR, SUN_RADIUS, solution.sun_mass, &solution.sun_state()),
        );
        for body in &solution.bodies {
            let params = &body.parameters;
            bodies.insert(
                body.id.clone(),
                ScenarioBody::new(
                    &body.id,
                    params.color.unwrap_or(DEFAULT_COLOR),
                    params.radius.unwrap_or(0.0),
                    params.mass,
                    &body.state,
                ),
            );
        }

        Ok(Scenario {
            time: time_step,
            bodies,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StateErrors> {
        let file = std::fs::File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StateErrors> {
        let file = std::fs::File::create(path)?;
        write_scenario(io::BufWriter::new(file), self)
    }
}

pub fn write_scenario<W: io::Write>(mut writer: W, scenario: &Scenario) -> Result<(), StateErrors> {
    serde_yaml::to_writer(&mut writer, scenario)?;
    writer.flush()?;
    Ok(())
}

/// "earth" -> "Earth"
fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
