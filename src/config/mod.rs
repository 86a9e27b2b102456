pub mod body_table;
pub mod solar_system;

pub use body_table::{load_body_table, read_body_table, write_body_table};
pub use solar_system::SOLAR_SYSTEM;
