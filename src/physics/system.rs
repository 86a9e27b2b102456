use crate::constants::MOMENTUM_TOLERANCE;
use crate::errors::StateErrors;
use crate::models::body::BodyTable;
use crate::models::state::{BodyState, StateVector};
use crate::physics::momentum::{
    compute_sun_velocity_for_zero_momentum, residual_momentum, total_momentum,
};
use crate::physics::orbit_state::OrbitStateCalculator;
use nalgebra as na;
use tracing::warn;

/// Heliocentric states of every body plus the Sun velocity that zeroes
/// the total momentum.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSolution {
    pub bodies: Vec<BodyState>,
    pub total_momentum: na::Vector3<f64>,
    pub sun_mass: f64,
    pub sun_velocity: na::Vector3<f64>,
}

impl SystemSolution {
    /// Solves every body in table order. Fails on the first invalid body
    /// or on a non-positive Sun mass, producing nothing partial.
    pub fn solve(table: &BodyTable, sun_mass: f64) -> Result<Self, StateErrors> {
        let bodies = OrbitStateCalculator::compute_body_states(table)?;
        let momentum = total_momentum(&bodies);

        let sun_velocity = compute_sun_velocity_for_zero_momentum(&momentum, sun_mass)?;
        let solution = SystemSolution {
            bodies,
            total_momentum: momentum,
            sun_mass,
            sun_velocity,
        };

        if !solution.is_balanced() {
            warn!(residual = ?solution.residual_momentum(), "system momentum did not balance");
        }
        Ok(solution)
    }

    pub fn body(&self, id: &str) -> Option<&BodyState> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// The Sun's state: at the origin, moving with the balancing velocity
    pub fn sun_state(&self) -> StateVector {
        StateVector::new(na::Vector3::zeros(), self.sun_velocity)
    }

    /// Momentum of planets and Sun together
    pub fn residual_momentum(&self) -> na::Vector3<f64> {
        residual_momentum(&self.total_momentum, &self.sun_velocity, self.sun_mass)
    }

    pub fn is_balanced(&self) -> bool {
        let scale = self.total_momentum.magnitude();
        self.residual_momentum().magnitude() <= scale * MOMENTUM_TOLERANCE
    }
}
