//! # Core Module
//!
//! Shared configuration types used by the window, renderer and application.

pub mod config;

pub use config::{
    ApplicationConfig,
    EngineConfig,
    RendererConfig,
    WindowConfig,
};
pub use crate::config::{Config, ConfigError};
