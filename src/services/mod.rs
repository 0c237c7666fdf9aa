pub mod config_store;
pub mod confirmation;
pub mod localization;
pub mod target_resolver;
pub mod transmission_engine;
