//! OpenGL backend
//!
//! GLFW window with a core-profile context, and the `glow` function table
//! loaded against it.

mod context;
mod window;

pub use context::{DriverInfo, GlContext};
pub use window::{GlfwWindow, WindowError, WindowResult};
