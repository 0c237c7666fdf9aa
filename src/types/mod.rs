pub mod config;
pub mod errors;
pub mod group;
pub mod transmit;
