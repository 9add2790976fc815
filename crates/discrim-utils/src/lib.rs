//! Shared utilities for the discriminant calculator workspace

pub mod logging;

pub use logging::init_tracing;
