//! Virtualtab — virtual tab group and file transmission core for editor hosts.
//!
//! This library crate exposes all modules for use by host glue and integration tests.

pub mod host;
pub mod managers;
pub mod services;
pub mod types;
