//! Window management subsystem
//!
//! The application loop only sees the [`WindowBackend`] trait and the
//! [`WindowEvent`] values it yields. The GLFW implementation lives in
//! `../opengl/window.rs`; tests drive the loop with a scripted mock.

pub mod backend;

pub use backend::{WindowBackend, WindowEvent};
