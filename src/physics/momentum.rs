use crate::errors::StateErrors;
use crate::models::body::BodyTable;
use crate::models::state::BodyState;
use crate::physics::orbit_state::OrbitStateCalculator;
use nalgebra as na;

/// Sum of mass times velocity over already solved bodies
pub fn total_momentum(bodies: &[BodyState]) -> na::Vector3<f64> {
    bodies
        .iter()
        .fold(na::Vector3::zeros(), |acc, b| acc + b.state.linear_momentum(b.mass()))
}

/// Total linear momentum of every body in the table, Sun excluded
pub fn compute_system_momentum(bodies: &BodyTable) -> Result<na::Vector3<f64>, StateErrors> {
    let states = OrbitStateCalculator::compute_body_states(bodies)?;
    Ok(total_momentum(&states))
}

/// Velocity the Sun needs for the whole system to carry zero momentum
pub fn compute_sun_velocity_for_zero_momentum(
    total_momentum: &na::Vector3<f64>,
    sun_mass: f64,
) -> Result<na::Vector3<f64>, StateErrors> {
    if !sun_mass.is_finite() || sun_mass <= 0.0 {
        return Err(StateErrors::InvalidSunMass(sun_mass));
    }
    Ok(-total_momentum / sun_mass)
}

/// Momentum left over once the Sun moves with `sun_velocity`
pub fn residual_momentum(
    total_momentum: &na::Vector3<f64>,
    sun_velocity: &na::Vector3<f64>,
    sun_mass: f64,
) -> na::Vector3<f64> {
    total_momentum + sun_velocity * sun_mass
}
