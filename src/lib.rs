pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod numerics;
pub mod output;
pub mod physics;

pub use errors::StateErrors;
pub use models::{BodyParameters, BodyState, BodyTable, StateVector};
pub use physics::{OrbitStateCalculator, SystemSolution};
