//! Shader program construction
//!
//! Compiles a vertex and a fragment stage from source, links them and drops
//! the stage objects. Compile and link failures are logged and kept as
//! diagnostics on the returned [`ShaderProgram`] but never abort; only a
//! driver refusing to allocate an object is an error.

use std::fmt;

use crate::render::api::{GlResult, GraphicsApi, ShaderStage};

/// Vertex stage: passes the position attribute through unchanged
pub const QUAD_VERTEX_SHADER: &str = r"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
";

/// Fragment stage: flat orange
pub const QUAD_FRAGMENT_SHADER: &str = r"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
";

/// Largest info log kept per compile or link step, in bytes
pub const INFO_LOG_CAPACITY: usize = 512;

/// Step of program construction that produced a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    /// Compiling one stage
    Compile(ShaderStage),
    /// Linking the program
    Link,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compile(stage) => write!(f, "{} shader compilation", stage.name()),
            Self::Link => f.write_str("program linking"),
        }
    }
}

/// Compiler or linker message attached to a failed step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderDiagnostic {
    /// Which step failed
    pub step: BuildStep,
    /// Driver message, at most [`INFO_LOG_CAPACITY`] bytes
    pub message: String,
}

/// Linked (or failed-to-link) program object
///
/// The handle is valid to bind even when linking failed; drawing with it
/// then produces nothing, which is how a broken shader shows up at runtime.
pub struct ShaderProgram<G: GraphicsApi> {
    handle: G::Program,
    linked: bool,
    diagnostics: Vec<ShaderDiagnostic>,
}

impl<G: GraphicsApi> ShaderProgram<G> {
    /// Compile both stages and link them
    pub fn build(gl: &G, vertex_source: &str, fragment_source: &str) -> GlResult<Self> {
        let mut diagnostics = Vec::new();

        let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_source, &mut diagnostics)?;
        let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_source, &mut diagnostics) {
            Ok(fragment) => fragment,
            Err(e) => {
                gl.delete_shader(vertex);
                return Err(e);
            }
        };

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(e) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(e);
            }
        };

        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);

        let linked = gl.program_link_status(program);
        if !linked {
            let message = truncate_info_log(gl.program_info_log(program));
            report(&mut diagnostics, BuildStep::Link, message);
        }

        // The program keeps the compiled code
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);

        if linked {
            log::debug!("Shader program {program:?} linked");
        }

        Ok(Self { handle: program, linked, diagnostics })
    }

    /// Build the program used to draw the quad
    pub fn quad(gl: &G) -> GlResult<Self> {
        Self::build(gl, QUAD_VERTEX_SHADER, QUAD_FRAGMENT_SHADER)
    }

    /// Program object handle
    pub fn handle(&self) -> G::Program {
        self.handle
    }

    /// Whether the driver reported a successful link
    pub const fn is_linked(&self) -> bool {
        self.linked
    }

    /// Messages from failed compile or link steps, in order
    pub fn diagnostics(&self) -> &[ShaderDiagnostic] {
        &self.diagnostics
    }

    /// Make this the active program
    pub fn bind(&self, gl: &G) {
        gl.use_program(Some(self.handle));
    }

    /// Delete the program object
    pub fn destroy(self, gl: &G) {
        gl.delete_program(self.handle);
    }
}

fn compile_stage<G: GraphicsApi>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
    diagnostics: &mut Vec<ShaderDiagnostic>,
) -> GlResult<G::Shader> {
    let shader = gl.create_shader(stage)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        let message = truncate_info_log(gl.shader_info_log(shader));
        report(diagnostics, BuildStep::Compile(stage), message);
    }

    Ok(shader)
}

fn report(diagnostics: &mut Vec<ShaderDiagnostic>, step: BuildStep, message: String) {
    log::error!("{step} failed:\n{message}");
    diagnostics.push(ShaderDiagnostic { step, message });
}

/// Cut a driver log down to [`INFO_LOG_CAPACITY`] bytes on a char boundary
fn truncate_info_log(mut message: String) -> String {
    if message.len() > INFO_LOG_CAPACITY {
        let mut end = INFO_LOG_CAPACITY;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }

    let trimmed_len = message.trim_end_matches(['\0', '\n', '\r', ' ']).len();
    message.truncate(trimmed_len);

    if message.is_empty() {
        message.push_str("(driver returned no info log)");
    }
    message
}
