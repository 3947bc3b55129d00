//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! preference persistence, the remote catalog, configuration and logging.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod persistence;

pub use catalog::*;
pub use config::*;
pub use logging::*;
pub use persistence::*;
