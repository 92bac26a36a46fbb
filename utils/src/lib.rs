//! Shared helpers for services embedding the proposal validator.

pub mod logging;

pub use logging::{init_logging, LogError, LogFormat};
