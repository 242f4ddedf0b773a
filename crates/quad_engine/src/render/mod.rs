//! Rendering subsystem
//!
//! - **`api`**: the [`GraphicsApi`] trait every GL call goes through
//! - **`opengl`**: GLFW window and `glow` implementation of that trait
//! - **`window`**: window backend trait and events
//! - **`shader`**, **`mesh`**, **`renderer`**: the quad itself

pub mod api;
pub mod mesh;
pub mod opengl;
pub mod renderer;
pub mod shader;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{GlError, GlResult, GraphicsApi, PolygonMode, Viewport};
pub use mesh::{QuadMesh, Vertex};
pub use opengl::{GlContext, GlfwWindow, WindowError};
pub use renderer::{on_framebuffer_resize, QuadRenderer};
pub use shader::{ShaderDiagnostic, ShaderProgram};
pub use window::{WindowBackend, WindowEvent};
