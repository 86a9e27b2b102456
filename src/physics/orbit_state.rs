use crate::errors::StateErrors;
use crate::models::body::{BodyParameters, BodyTable};
use crate::models::state::{BodyState, StateVector};
use crate::numerics::rotation::OrbitOrientation;
use nalgebra as na;
use tracing::debug;

pub struct OrbitStateCalculator;

impl OrbitStateCalculator {
    /// Position and velocity in the periapsis-aligned frame:
    /// periapsis along +X, velocity at periapsis along +Z.
    pub fn periapsis_frame_state(body: &BodyParameters) -> StateVector {
        StateVector::new(
            na::Vector3::new(body.periapsis, 0.0, 0.0),
            na::Vector3::new(0.0, 0.0, body.speed),
        )
    }

    /// Converts a body's periapsis elements into heliocentric state vectors
    /// Input: `id` names the body in validation errors
    /// Returns: position [m] and velocity [m/s] in the heliocentric frame
    pub fn compute_state_vectors(id: &str, body: &BodyParameters) -> Result<StateVector, StateErrors> {
        body.validate(id)?;

        let local = Self::periapsis_frame_state(body);
        let transform = OrbitOrientation::from_body(body).rotation();

        Ok(StateVector::new(
            transform * local.position,
            transform * local.velocity,
        ))
    }

    /// Same as `compute_state_vectors`, applying the three rotations one after another
    pub fn compute_state_vectors_sequential(
        id: &str,
        body: &BodyParameters,
    ) -> Result<StateVector, StateErrors> {
        body.validate(id)?;

        let local = Self::periapsis_frame_state(body);
        let orientation = OrbitOrientation::from_body(body);

        Ok(StateVector::new(
            orientation.apply_sequential(&local.position),
            orientation.apply_sequential(&local.velocity),
        ))
    }

    /// Solves every body of the table in order. Stops at the first invalid body.
    pub fn compute_body_states(table: &BodyTable) -> Result<Vec<BodyState>, StateErrors> {
        let mut states = Vec::with_capacity(table.len());
        for (id, parameters) in table.iter() {
            let state = Self::compute_state_vectors(id, parameters)?;
            debug!(
                body = id,
                position = ?state.position,
                velocity = ?state.velocity,
                "computed periapsis state"
            );
            states.push(BodyState::new(id, parameters.clone(), state));
        }
        Ok(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::rotation::rotation_y;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn earth() -> BodyParameters {
        BodyParameters::new(5.97e24, 147.0e9, 30.29e3, 85.9, 0.0, -11.26064)
    }

    #[test]
    fn zero_angles_leave_vectors_unchanged() {
        let body = BodyParameters::new(1.0e24, 1.0e11, 2.0e4, 0.0, 0.0, 0.0);
        let state = OrbitStateCalculator::compute_state_vectors("test", &body).unwrap();
        assert_eq!(state.position, na::Vector3::new(1.0e11, 0.0, 0.0));
        assert_eq!(state.velocity, na::Vector3::new(0.0, 0.0, 2.0e4));
    }

    #[test]
    fn earth_matches_single_y_rotation() {
        let state = OrbitStateCalculator::compute_state_vectors("earth", &earth()).unwrap();

        let theta = 74.63936_f64.to_radians();
        let expected_position = na::Vector3::new(147.0e9 * theta.cos(), 0.0, -147.0e9 * theta.sin());
        let expected_velocity = na::Vector3::new(30.29e3 * theta.sin(), 0.0, 30.29e3 * theta.cos());

        assert_relative_eq!(state.position, expected_position, max_relative = 1e-6, epsilon = 1e-3);
        assert_relative_eq!(state.velocity, expected_velocity, max_relative = 1e-6, epsilon = 1e-9);

        let r = rotation_y(74.63936);
        assert_relative_eq!(
            state.position,
            r * na::Vector3::new(147.0e9, 0.0, 0.0),
            max_relative = 1e-6,
            epsilon = 1e-3
        );
    }

    #[test]
    fn earth_reference_values() {
        let state = OrbitStateCalculator::compute_state_vectors("earth", &earth()).unwrap();
        assert_relative_eq!(
            state.position,
            na::Vector3::new(38939382479.43757, 0.0, -141748807727.33176),
            max_relative = 1e-9,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            state.velocity,
            na::Vector3::new(29207.968612659042, 0.0, 8023.631940831046),
            max_relative = 1e-9,
            epsilon = 1e-9
        );
    }

    #[test_case(
        BodyParameters::new(0.330e24, 46.0e9, 58.98e3, 77.45645, 7.004, 48.33167),
        na::Vector3::new(-26949879865.88886, 3729079488.784071, -37091750314.3285),
        na::Vector3::new(47772.291702093775, 5372.421244965485, -34169.95223140802);
        "mercury"
    )]
    #[test_case(
        BodyParameters::new(102e24, 4471.050e9, 5.50e3, 44.97135, 1.770, 131.72169),
        na::Vector3::new(-4462600486371.546, -91906789534.46063, -258917252368.22412),
        na::Vector3::new(315.88346314068804, 126.79668581281315, -5489.457189757575);
        "neptune"
    )]
    fn inclined_orbits(body: BodyParameters, position: na::Vector3<f64>, velocity: na::Vector3<f64>) {
        let state = OrbitStateCalculator::compute_state_vectors("body", &body).unwrap();
        assert_relative_eq!(state.position, position, max_relative = 1e-9);
        assert_relative_eq!(state.velocity, velocity, max_relative = 1e-9);
    }

    #[test]
    fn rotation_preserves_magnitude() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let body = BodyParameters::new(
                1.0,
                rng.gen_range(1.0e9..5.0e12),
                rng.gen_range(1.0e3..6.0e4),
                rng.gen_range(-720.0..720.0),
                rng.gen_range(-180.0..180.0),
                rng.gen_range(-720.0..720.0),
            );
            let state = OrbitStateCalculator::compute_state_vectors("random", &body).unwrap();
            assert_relative_eq!(state.position.magnitude(), body.periapsis, max_relative = 1e-9);
            assert_relative_eq!(state.velocity.magnitude(), body.speed, max_relative = 1e-9);
        }
    }

    #[test]
    fn inverse_sequence_recovers_periapsis_frame() {
        let body = BodyParameters::new(1898e24, 740.595e9, 13.72e3, 14.75385, 1.304, 100.55615);
        let state = OrbitStateCalculator::compute_state_vectors("jupiter", &body).unwrap();
        let orientation = OrbitOrientation::from_body(&body);

        let position = orientation.apply_inverse_sequential(&state.position);
        let velocity = orientation.apply_inverse_sequential(&state.velocity);

        assert_abs_diff_eq!(position, na::Vector3::new(740.595e9, 0.0, 0.0), epsilon = 1e-2);
        assert_abs_diff_eq!(velocity, na::Vector3::new(0.0, 0.0, 13.72e3), epsilon = 1e-8);
    }

    #[test]
    fn sequential_path_matches_composed() {
        let body = BodyParameters::new(568e24, 1357.554e9, 10.18e3, 92.43194, 2.486, 113.71504);
        let composed = OrbitStateCalculator::compute_state_vectors("saturn", &body).unwrap();
        let sequential = OrbitStateCalculator::compute_state_vectors_sequential("saturn", &body).unwrap();
        assert_relative_eq!(composed.position, sequential.position, max_relative = 1e-12, epsilon = 1e-2);
        assert_relative_eq!(composed.velocity, sequential.velocity, max_relative = 1e-12, epsilon = 1e-9);
    }

    #[test]
    fn negative_speed_is_rejected() {
        let body = BodyParameters { speed: -1.0, ..earth() };
        let err = OrbitStateCalculator::compute_state_vectors("earth", &body).unwrap_err();
        assert!(matches!(
            err,
            StateErrors::InvalidParameter { field: "speed", .. }
        ));
    }
}
