pub const SUN_MASS: f64 = 1988500e24; // Mass of the Sun (kg)
pub const SUN_RADIUS: f64 = 695.700e6; // Mean radius of the Sun (m)
pub const SUN_ID: &str = "sun";

// Scenario export
pub const DEFAULT_TIME_STEP: i64 = 1; // Simulator time step (s)
pub const MAX_TIME_STEP: i64 = i32::MAX as i64; // Simulator stores the step as a 32-bit int
pub const DEFAULT_COLOR: [f64; 3] = [1.0, 1.0, 1.0];
pub const SUN_COLOR: [f64; 3] = [1.0, 0.85, 0.4];

// Relative residual below which the balanced system counts as momentum-free
pub const MOMENTUM_TOLERANCE: f64 = 1e-9;
