pub mod body;
pub mod state;

pub use body::{BodyParameters, BodyTable};
pub use state::{BodyState, StateVector};
