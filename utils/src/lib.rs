//! Shared utilities for nameflow.

pub mod logging;

pub use logging::{init_tracing, LogFormat};
