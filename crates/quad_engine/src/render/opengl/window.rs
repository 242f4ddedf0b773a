//! Window management using GLFW
//!
//! Creates the window with an OpenGL core-profile context and loads the GL
//! function pointers through GLFW's address resolver.

use std::os::raw::c_void;

use glfw::Context;
use thiserror::Error;

use crate::core::WindowConfig;
use crate::input::{KeyAction, KeyCode};
use crate::render::opengl::GlContext;
use crate::render::window::{WindowBackend, WindowEvent};

/// Entry points that must resolve before the GL function table is trusted
const REQUIRED_GL_SYMBOLS: [&str; 4] = [
    "glGetString",
    "glCreateShader",
    "glGenVertexArrays",
    "glDrawElements",
];

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// `glfwInit` failed
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    /// `glfwCreateWindow` returned no window
    #[error("Failed to create GLFW window ({width}x{height}, OpenGL {major}.{minor} core)")]
    CreationFailed {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Requested context major version
        major: u32,
        /// Requested context minor version
        minor: u32,
    },

    /// A GL entry point could not be resolved
    #[error("Failed to initialize OpenGL function pointers: {0} not found")]
    LoaderFailed(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper owning the library handle, the window and its event queue
///
/// Dropping it destroys the window, and GLFW is terminated with the last handle.
pub struct GlfwWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlfwWindow {
    /// Initialize GLFW, create the window and make its context current
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::log_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{e:?}")))?;

        let (major, minor) = config.gl_version;
        glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        // macOS only hands out core profiles to forward-compatible contexts
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        // On failure `glfw` is dropped here, which terminates the library
        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed {
                width: config.width,
                height: config.height,
                major,
                minor,
            })?;

        window.make_current();
        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);

        let interval = if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        };
        glfw.set_swap_interval(interval);

        log::info!(
            "Created {}x{} window \"{}\" with OpenGL {}.{} core context",
            config.width,
            config.height,
            config.title,
            major,
            minor
        );

        Ok(Self { glfw, window, events })
    }

    /// Load all OpenGL entry points for this window's context
    ///
    /// Fails if any of the core entry points the renderer depends on cannot
    /// be resolved.
    pub fn load_gl(&mut self) -> WindowResult<GlContext> {
        check_required_symbols(|symbol| self.window.get_proc_address(symbol) as *const c_void)?;

        let window = &mut self.window;
        // SAFETY: the context was made current in `new` and lives as long as `self`
        #[allow(unsafe_code)]
        let gl = unsafe { GlContext::from_loader(|symbol| window.get_proc_address(symbol) as *const _) };
        Ok(gl)
    }

    fn translate(event: glfw::WindowEvent) -> Option<WindowEvent> {
        match event {
            glfw::WindowEvent::FramebufferSize(width, height) => {
                Some(WindowEvent::FramebufferResized { width, height })
            }
            glfw::WindowEvent::Key(key, _, action, _) => Some(WindowEvent::Key {
                key: KeyCode::from(key),
                action: KeyAction::from(action),
            }),
            glfw::WindowEvent::Close => Some(WindowEvent::CloseRequested),
            _ => None,
        }
    }
}

/// Resolve each of [`REQUIRED_GL_SYMBOLS`] in order, stopping at the first one missing
fn check_required_symbols<F>(mut resolve: F) -> WindowResult<()>
where
    F: FnMut(&str) -> *const c_void,
{
    for symbol in REQUIRED_GL_SYMBOLS {
        if resolve(symbol).is_null() {
            log::error!("OpenGL entry point {symbol} did not resolve");
            return Err(WindowError::LoaderFailed(symbol.to_string()));
        }
    }
    Ok(())
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| Self::translate(event))
            .collect()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }
}

impl From<glfw::Key> for KeyCode {
    fn from(key: glfw::Key) -> Self {
        match key {
            glfw::Key::Escape => Self::Escape,
            glfw::Key::W => Self::W,
            _ => Self::Other,
        }
    }
}

impl From<glfw::Action> for KeyAction {
    fn from(action: glfw::Action) -> Self {
        match action {
            glfw::Action::Press => Self::Press,
            glfw::Action::Release => Self::Release,
            glfw::Action::Repeat => Self::Repeat,
        }
    }
}
