//! Foundation module - Core utilities shared by the rest of the crate
//!
//! Currently this is only the logging bootstrap.

pub mod logging;
