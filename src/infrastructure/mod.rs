pub mod config;
pub mod dataset;
