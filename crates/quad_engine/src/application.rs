//! Application lifecycle and main loop
//!
//! [`Application`] ties a window, a graphics API, the quad renderer and the
//! input state together. [`run`] builds the real GLFW/OpenGL stack from an
//! [`ApplicationConfig`] and drives it until the window closes.

use thiserror::Error;

use crate::core::{ApplicationConfig, ConfigError};
use crate::input::InputState;
use crate::render::api::{GlError, GraphicsApi};
use crate::render::opengl::{GlfwWindow, WindowError};
use crate::render::renderer::{on_framebuffer_resize, QuadRenderer};
use crate::render::window::{WindowBackend, WindowEvent};

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Window creation or GL loading failed
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// The driver refused to allocate a GL object
    #[error("Graphics error: {0}")]
    Graphics(#[from] GlError),
}

/// Main loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Rendering frames
    Running,
    /// Close flag observed; the loop exits and resources are released next
    ClosePending,
    /// Resources released
    Terminated,
}

/// Window, graphics API, renderer and input state for one window
pub struct Application<W: WindowBackend, G: GraphicsApi> {
    window: W,
    gl: G,
    renderer: Option<QuadRenderer<G>>,
    input: InputState,
    state: LoopState,
    frames: u64,
}

impl<W: WindowBackend, G: GraphicsApi> Application<W, G> {
    /// Set up rendering for an already created window
    ///
    /// The viewport starts at the framebuffer size, which can differ from
    /// the requested window size on HiDPI displays.
    pub fn new(window: W, gl: G, config: &ApplicationConfig) -> Result<Self, AppError> {
        let (width, height) = window.framebuffer_size();
        on_framebuffer_resize(&gl, width, height);

        let renderer = QuadRenderer::new(&gl, &config.renderer)?;

        Ok(Self {
            window,
            gl,
            renderer: Some(renderer),
            input: InputState::new(config.renderer.start_wireframe),
            state: LoopState::Running,
            frames: 0,
        })
    }

    /// Current loop state
    pub const fn state(&self) -> LoopState {
        self.state
    }

    /// Input state (wireframe flag)
    pub const fn input(&self) -> &InputState {
        &self.input
    }

    /// Frames rendered so far
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// The window this application renders into
    pub const fn window(&self) -> &W {
        &self.window
    }

    /// Run one loop iteration
    ///
    /// While running: check the close flag, then clear, draw, swap and poll.
    /// Once the close flag is seen the state moves to `ClosePending` and no
    /// more frames are drawn.
    pub fn step(&mut self) -> LoopState {
        if self.state != LoopState::Running {
            return self.state;
        }

        if self.window.should_close() {
            log::info!("Close requested after {} frames", self.frames);
            self.state = LoopState::ClosePending;
            return self.state;
        }

        if let Some(renderer) = &self.renderer {
            renderer.draw_frame(&self.gl);
        }
        self.window.swap_buffers();
        self.frames += 1;

        for event in self.window.poll_events() {
            self.handle_event(event);
        }

        self.state
    }

    /// Dispatch one window event
    pub fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::FramebufferResized { width, height } => {
                on_framebuffer_resize(&self.gl, width, height);
            }
            WindowEvent::Key { key, action } => {
                self.input.handle_key(key, action, &mut self.window, &self.gl);
            }
            // GLFW has already raised the close flag; the next step observes it
            WindowEvent::CloseRequested => {}
        }
    }

    /// Release GL resources and move to `Terminated`
    pub fn shutdown(&mut self) {
        if let Some(renderer) = self.renderer.take() {
            renderer.destroy(&self.gl);
        }
        self.state = LoopState::Terminated;
        log::info!("Shutdown complete");
    }

    /// Step until the window closes, then shut down
    pub fn run(&mut self) {
        log::info!("Starting main loop...");
        while self.step() == LoopState::Running {}
        self.shutdown();
    }
}

/// Create the window, load OpenGL, and render until the window closes
///
/// Window creation and GL loading failures are returned; GLFW is already
/// terminated by the time the error reaches the caller.
pub fn run(config: &ApplicationConfig) -> Result<(), AppError> {
    let mut window = GlfwWindow::new(&config.window)?;
    let gl = window.load_gl()?;

    let info = gl.driver_info();
    log::info!("OpenGL vendor:   {}", info.vendor);
    log::info!("OpenGL renderer: {}", info.renderer);
    log::info!("OpenGL version:  {}", info.version);

    let mut app = Application::new(window, gl, config)?;
    app.run();
    Ok(())
}
