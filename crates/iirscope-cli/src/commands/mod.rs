//! CLI command implementations.

pub mod analyze;
pub mod batch;
pub mod common;
pub mod impulse;
pub mod response;
