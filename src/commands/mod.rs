pub mod browse;
pub mod open;
