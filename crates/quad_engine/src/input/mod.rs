//! Keyboard handling
//!
//! Two bindings exist: Escape requests the window to close and W toggles
//! wireframe rendering. The wireframe flag lives in [`InputState`], which the
//! application owns and passes the window and graphics API into on every key
//! event.

use crate::render::api::{GraphicsApi, PolygonMode};
use crate::render::window::WindowBackend;

/// Keys the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key
    Escape,
    /// W key
    W,
    /// Any other key
    Other,
}

/// Key state transitions reported by the window system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Key went down
    Press,
    /// Key went up
    Release,
    /// Key held long enough to auto-repeat
    Repeat,
}

/// Input state threaded through the key handler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    wireframe: bool,
}

impl InputState {
    /// Create input state with the given initial wireframe flag
    pub const fn new(wireframe: bool) -> Self {
        Self { wireframe }
    }

    /// Whether polygons are currently drawn as outlines
    pub const fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Polygon mode matching the wireframe flag
    pub const fn polygon_mode(&self) -> PolygonMode {
        if self.wireframe {
            PolygonMode::Line
        } else {
            PolygonMode::Fill
        }
    }

    /// React to a key event
    ///
    /// Escape press requests close; W press flips the wireframe flag and
    /// applies the matching polygon mode. Releases and repeats are ignored.
    pub fn handle_key<W, G>(&mut self, key: KeyCode, action: KeyAction, window: &mut W, gl: &G)
    where
        W: WindowBackend + ?Sized,
        G: GraphicsApi + ?Sized,
    {
        if action != KeyAction::Press {
            return;
        }

        match key {
            KeyCode::Escape => {
                log::info!("Escape pressed, closing window");
                window.set_should_close(true);
            }
            KeyCode::W => {
                self.wireframe = !self.wireframe;
                gl.polygon_mode(self.polygon_mode());
                log::debug!("Wireframe {}", if self.wireframe { "on" } else { "off" });
            }
            KeyCode::Other => {}
        }
    }
}
