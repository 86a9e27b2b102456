pub mod csv_export;
pub mod report;
pub mod scenario;

pub use csv_export::write_state_csv;
pub use report::write_report;
pub use scenario::{write_scenario, Scenario, ScenarioBody};
