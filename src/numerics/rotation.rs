use crate::models::body::BodyParameters;
use nalgebra as na;

/// Right-handed rotation about the X axis, angle in degrees
pub fn rotation_x(angle_deg: f64) -> na::Rotation3<f64> {
    na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), angle_deg.to_radians())
}

/// Right-handed rotation about the Y axis, angle in degrees
pub fn rotation_y(angle_deg: f64) -> na::Rotation3<f64> {
    na::Rotation3::from_axis_angle(&na::Vector3::y_axis(), angle_deg.to_radians())
}

/// Right-handed rotation about the Z axis, angle in degrees
pub fn rotation_z(angle_deg: f64) -> na::Rotation3<f64> {
    na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), angle_deg.to_radians())
}

/// Orientation of an orbit relative to the heliocentric frame.
///
/// Maps the periapsis frame (periapsis along +X, periapsis velocity along +Z)
/// into the heliocentric frame by rotating, in order:
///   1. about Y by the longitude of the ascending node
///   2. about Z by the inclination
///   3. about Y by the argument of periapsis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitOrientation {
    pub longitude_of_ascending_node: f64, // degrees
    pub inclination: f64,                 // degrees
    pub argument_of_periapsis: f64,       // degrees
}

impl OrbitOrientation {
    pub fn new(longitude_of_ascending_node: f64, inclination: f64, argument_of_periapsis: f64) -> Self {
        OrbitOrientation {
            longitude_of_ascending_node,
            inclination,
            argument_of_periapsis,
        }
    }

    pub fn from_body(body: &BodyParameters) -> Self {
        Self::new(
            body.longitude_of_ascending_node,
            body.inclination,
            body.argument_of_periapsis,
        )
    }

    /// The three single-axis rotations in the order they are applied
    pub fn steps(&self) -> [na::Rotation3<f64>; 3] {
        [
            rotation_y(self.longitude_of_ascending_node),
            rotation_z(self.inclination),
            rotation_y(self.argument_of_periapsis),
        ]
    }

    /// Inverse sequence: same angles negated, applied in reverse order
    pub fn inverse_steps(&self) -> [na::Rotation3<f64>; 3] {
        [
            rotation_y(-self.argument_of_periapsis),
            rotation_z(-self.inclination),
            rotation_y(-self.longitude_of_ascending_node),
        ]
    }

    /// Single matrix equal to applying `steps()` left to right
    pub fn rotation(&self) -> na::Rotation3<f64> {
        let [node, incl, arg] = self.steps();
        arg * incl * node
    }

    pub fn inverse(&self) -> na::Rotation3<f64> {
        self.rotation().inverse()
    }

    pub fn apply(&self, v: &na::Vector3<f64>) -> na::Vector3<f64> {
        self.rotation() * v
    }

    pub fn apply_sequential(&self, v: &na::Vector3<f64>) -> na::Vector3<f64> {
        self.steps().iter().fold(*v, |acc, r| r * acc)
    }

    pub fn apply_inverse_sequential(&self, v: &na::Vector3<f64>) -> na::Vector3<f64> {
        self.inverse_steps().iter().fold(*v, |acc, r| r * acc)
    }
}
