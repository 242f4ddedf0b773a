//! Backend-agnostic window management trait

use crate::input::{KeyAction, KeyCode};

/// Window system notifications, already translated out of GLFW types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The drawable area changed size, in pixels
    FramebufferResized {
        /// New framebuffer width
        width: i32,
        /// New framebuffer height
        height: i32,
    },

    /// A keyboard key changed state
    Key {
        /// Key that changed
        key: KeyCode,
        /// What happened to it
        action: KeyAction,
    },

    /// The user asked the window system to close the window
    CloseRequested,
}

/// Interface the application loop needs from a window
///
/// Implementations own the window and its current GL context. All calls
/// happen on the thread that created the window.
pub trait WindowBackend {
    /// Check if the window should close
    ///
    /// True once the user clicked the close button or the application called
    /// [`set_should_close`](Self::set_should_close).
    fn should_close(&self) -> bool;

    /// Set whether the window should close
    fn set_should_close(&mut self, should_close: bool);

    /// Process pending window system events and return them in arrival order
    fn poll_events(&mut self) -> Vec<WindowEvent>;

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Current framebuffer size in pixels
    ///
    /// May differ from the window size on HiDPI displays.
    fn framebuffer_size(&self) -> (i32, i32);
}
