//! # Application Configuration
//!
//! All tunables for the window, the renderer and the engine live here. Every
//! structure has defaults matching the classic "hello quad" setup, so a
//! config file only needs to name the values it changes.
//!
//! ```toml
//! [window]
//! width = 1024
//! height = 768
//!
//! [renderer]
//! start_wireframe = true
//! ```

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};

/// Lowest OpenGL version the embedded shaders (`#version 330 core`) accept
pub const MIN_GL_VERSION: (u32, u32) = (3, 3);

/// # Window Configuration
///
/// Parameters handed to GLFW before the window is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Requested client area width in screen coordinates
    pub width: u32,
    /// Requested client area height in screen coordinates
    pub height: u32,
    /// Window title
    pub title: String,
    /// Requested OpenGL context version (major, minor)
    pub gl_version: (u32, u32),
    /// Wait for vertical blank on buffer swap
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given size and title
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the requested OpenGL version
    #[must_use]
    pub fn with_gl_version(mut self, major: u32, minor: u32) -> Self {
        self.gl_version = (major, minor);
        self
    }

    /// Enable or disable vsync
    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        if self.title.is_empty() {
            return Err("Window title cannot be empty".to_string());
        }

        if self.gl_version < MIN_GL_VERSION {
            return Err(format!(
                "OpenGL {}.{} requested, at least {}.{} is required",
                self.gl_version.0, self.gl_version.1, MIN_GL_VERSION.0, MIN_GL_VERSION.1
            ));
        }

        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "LearnOpenGL".to_string(),
            gl_version: MIN_GL_VERSION,
            vsync: true,
        }
    }
}

/// # Renderer Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// RGBA color the framebuffer is cleared to every frame
    pub clear_color: [f32; 4],
    /// Start in line (wireframe) polygon mode
    pub start_wireframe: bool,
}

impl RendererConfig {
    /// Set the clear color
    #[must_use]
    pub fn with_clear_color(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.clear_color = [r, g, b, a];
        self
    }

    /// Start in wireframe mode
    #[must_use]
    pub fn with_wireframe(mut self, enabled: bool) -> Self {
        self.start_wireframe = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(c) = self.clear_color.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(format!("Clear color component {c} is outside [0, 1]"));
        }
        Ok(())
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.3, 0.3, 1.0],
            start_wireframe: false,
        }
    }
}

/// # Engine Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration loaded from the file named on the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Window and context configuration
    pub window: WindowConfig,
    /// Rendering configuration
    pub renderer: RendererConfig,
}

impl ApplicationConfig {
    /// Load from `path` when given, otherwise use defaults. The result is validated.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.renderer.validate()?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}
