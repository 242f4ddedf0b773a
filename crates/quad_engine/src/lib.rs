//! # Quad Engine
//!
//! Opens a window with an OpenGL 3.3 core-profile context and draws an
//! orange quad made of two indexed triangles.
//!
//! ## Features
//!
//! - **GLFW window**: core-profile context, framebuffer-size tracking, vsync
//! - **Shader builder**: compile/link with non-fatal diagnostics
//! - **Static quad**: vertex buffer, index buffer and vertex array object
//! - **Input**: Escape closes the window, W toggles wireframe
//! - **Config**: TOML or RON files, every field optional
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quad_engine::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     let config = ApplicationConfig::default();
//!     quad_engine::foundation::logging::init(&config.engine.log_level);
//!     quad_engine::run(&config)
//! }
//! ```

#![warn(missing_docs)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod input;
pub mod render;

mod application;

pub use application::{run, AppError, Application, LoopState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        run, AppError, Application, LoopState,
        core::config::{ApplicationConfig, EngineConfig, RendererConfig, WindowConfig},
        config::{Config, ConfigError},
        input::{InputState, KeyAction, KeyCode},
        render::{
            GlContext, GlfwWindow, GraphicsApi, PolygonMode, QuadRenderer, ShaderProgram,
            WindowBackend, WindowEvent,
        },
    };
}
