use crate::models::body::BodyParameters;
use nalgebra as na;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: na::Vector3<f64>, // Heliocentric position (m)
    pub velocity: na::Vector3<f64>, // Heliocentric velocity (m/s)
}

impl StateVector {
    pub fn new(position: na::Vector3<f64>, velocity: na::Vector3<f64>) -> Self {
        StateVector { position, velocity }
    }

    pub fn linear_momentum(&self, mass: f64) -> na::Vector3<f64> {
        self.velocity * mass
    }
}

/// A solved body: its input elements and the resulting heliocentric state.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub id: String,
    pub parameters: BodyParameters,
    pub state: StateVector,
}

impl BodyState {
    pub fn new(id: impl Into<String>, parameters: BodyParameters, state: StateVector) -> Self {
        BodyState {
            id: id.into(),
            parameters,
            state,
        }
    }

    pub fn mass(&self) -> f64 {
        self.parameters.mass
    }
}
