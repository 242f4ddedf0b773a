//! Graphics API seam
//!
//! The renderer, shader builder and input handler talk to OpenGL through
//! [`GraphicsApi`] instead of calling `glow` directly. The production
//! implementation is [`crate::render::opengl::GlContext`]; tests use a
//! recording mock that needs no driver.
//!
//! The trait mirrors the handful of GL entry points this crate uses, one
//! method per call, and hides the `unsafe` of the raw bindings.

use std::fmt::Debug;
use thiserror::Error;

/// Errors raised by the graphics API layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlError {
    /// The driver refused to allocate an object
    #[error("Failed to create {kind}: {message}")]
    ObjectCreation {
        /// Kind of object (shader, program, buffer, vertex array)
        kind: &'static str,
        /// Driver message
        message: String,
    },
}

/// Result type for graphics API calls
pub type GlResult<T> = Result<T, GlError>;

/// Programmable pipeline stage of a shader object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderStage {
    /// Lowercase stage name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }
}

/// Binding point for a buffer object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferTarget {
    /// `GL_ARRAY_BUFFER`, vertex attributes
    Array,
    /// `GL_ELEMENT_ARRAY_BUFFER`, indices
    ElementArray,
}

/// Rasterization mode for front and back faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolygonMode {
    /// Filled triangles
    #[default]
    Fill,
    /// Triangle outlines only (wireframe)
    Line,
}

/// Framebuffer region that rendering maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    /// Left edge in pixels
    pub x: i32,
    /// Bottom edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Viewport {
    /// Viewport covering a whole framebuffer of the given size
    pub const fn full(width: i32, height: i32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

/// The OpenGL calls this crate issues
///
/// All methods require the owning context to be current on the calling
/// thread. Handles are driver-owned; the caller is responsible for deleting
/// what it creates and for never using a handle after deleting it.
pub trait GraphicsApi {
    /// Shader object handle
    type Shader: Copy + Debug;
    /// Program object handle
    type Program: Copy + Debug;
    /// Buffer object handle
    type Buffer: Copy + Debug;
    /// Vertex array object handle
    type VertexArray: Copy + Debug;

    // Shader objects

    /// `glCreateShader`
    fn create_shader(&self, stage: ShaderStage) -> GlResult<Self::Shader>;
    /// `glShaderSource` with a single source string
    fn shader_source(&self, shader: Self::Shader, source: &str);
    /// `glCompileShader`
    fn compile_shader(&self, shader: Self::Shader);
    /// `GL_COMPILE_STATUS` of the shader
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// Full compiler info log of the shader
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    /// `glDeleteShader`
    fn delete_shader(&self, shader: Self::Shader);

    // Program objects

    /// `glCreateProgram`
    fn create_program(&self) -> GlResult<Self::Program>;
    /// `glAttachShader`
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    /// `glLinkProgram`
    fn link_program(&self, program: Self::Program);
    /// `GL_LINK_STATUS` of the program
    fn program_link_status(&self, program: Self::Program) -> bool;
    /// Full linker info log of the program
    fn program_info_log(&self, program: Self::Program) -> String;
    /// `glUseProgram`, `None` unbinds
    fn use_program(&self, program: Option<Self::Program>);
    /// `glDeleteProgram`
    fn delete_program(&self, program: Self::Program);

    // Buffers and vertex arrays

    /// `glGenBuffers` for a single buffer
    fn create_buffer(&self) -> GlResult<Self::Buffer>;
    /// `glBindBuffer`, `None` unbinds
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>);
    /// `glBufferData` with `GL_STATIC_DRAW` usage into the bound buffer
    fn buffer_data_static(&self, target: BufferTarget, data: &[u8]);
    /// `glDeleteBuffers` for a single buffer
    fn delete_buffer(&self, buffer: Self::Buffer);
    /// `glGenVertexArrays` for a single vertex array
    fn create_vertex_array(&self) -> GlResult<Self::VertexArray>;
    /// `glBindVertexArray`, `None` unbinds
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    /// `glDeleteVertexArrays` for a single vertex array
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    /// `glVertexAttribPointer` for a non-normalized float attribute
    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32, stride: i32, offset: i32);
    /// `glEnableVertexAttribArray`
    fn enable_vertex_attrib_array(&self, index: u32);

    // Fixed-function state and drawing

    /// `glViewport`
    fn viewport(&self, viewport: Viewport);
    /// `glClearColor`
    fn clear_color(&self, rgba: [f32; 4]);
    /// `glClear(GL_COLOR_BUFFER_BIT)`
    fn clear_color_buffer(&self);
    /// `glPolygonMode(GL_FRONT_AND_BACK, ..)`
    fn polygon_mode(&self, mode: PolygonMode);
    /// `glDrawElements(GL_TRIANGLES, count, GL_UNSIGNED_INT, 0)` from the bound index buffer
    fn draw_indexed_triangles(&self, index_count: i32);
}
