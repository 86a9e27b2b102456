pub mod momentum;
pub mod orbit_state;
pub mod system;

pub use orbit_state::OrbitStateCalculator;
pub use system::SystemSolution;
