pub mod date;
pub mod ispu;
pub mod pollutant;
pub mod predict;
pub mod readings;
pub mod types;
