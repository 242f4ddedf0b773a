//! Quad renderer
//!
//! Owns the shader program and the quad mesh, and issues the per-frame
//! clear and draw.

use crate::core::RendererConfig;
use crate::render::api::{GlResult, GraphicsApi, PolygonMode, Viewport};
use crate::render::mesh::QuadMesh;
use crate::render::shader::ShaderProgram;

/// Map rendering onto the whole framebuffer after a resize
///
/// Registered for framebuffer-size events so the viewport always matches
/// the drawable area.
pub fn on_framebuffer_resize<G: GraphicsApi + ?Sized>(gl: &G, width: i32, height: i32) {
    log::debug!("Framebuffer resized to {width}x{height}");
    gl.viewport(Viewport::full(width, height));
}

/// Renders the quad with the embedded shader pair
pub struct QuadRenderer<G: GraphicsApi> {
    program: ShaderProgram<G>,
    mesh: QuadMesh<G>,
    clear_color: [f32; 4],
}

impl<G: GraphicsApi> QuadRenderer<G> {
    /// Build the program, upload the quad and apply the initial polygon mode
    pub fn new(gl: &G, config: &RendererConfig) -> GlResult<Self> {
        let program = ShaderProgram::quad(gl)?;
        if !program.is_linked() {
            log::warn!("Quad program failed to link, nothing will be drawn");
        }

        let mesh = match QuadMesh::upload(gl) {
            Ok(mesh) => mesh,
            Err(e) => {
                program.destroy(gl);
                return Err(e);
            }
        };

        if config.start_wireframe {
            gl.polygon_mode(PolygonMode::Line);
        }

        Ok(Self {
            program,
            mesh,
            clear_color: config.clear_color,
        })
    }

    /// The shader program used for drawing
    pub const fn program(&self) -> &ShaderProgram<G> {
        &self.program
    }

    /// Clear the color buffer and draw the quad
    pub fn draw_frame(&self, gl: &G) {
        gl.clear_color(self.clear_color);
        gl.clear_color_buffer();

        self.program.bind(gl);
        self.mesh.draw(gl);
    }

    /// Release the mesh and the program
    pub fn destroy(self, gl: &G) {
        self.mesh.destroy(gl);
        self.program.destroy(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{GlCall, RecordingGl};
    use approx::assert_relative_eq;

    #[test]
    fn test_resize_sets_full_viewport() {
        let gl = RecordingGl::new();

        for (width, height) in [(1, 1), (800, 600), (1920, 1080), (3840, 2160), (7, 4099)] {
            on_framebuffer_resize(&gl, width, height);
        }

        let viewports = gl.viewports();
        assert_eq!(viewports.len(), 5);
        assert_eq!(viewports[1], Viewport { x: 0, y: 0, width: 800, height: 600 });
        assert_eq!(viewports[4], Viewport { x: 0, y: 0, width: 7, height: 4099 });
        assert!(viewports.iter().all(|v| v.x == 0 && v.y == 0));
    }

    #[test]
    fn test_frame_draws_two_triangles() {
        let gl = RecordingGl::new();
        let renderer = QuadRenderer::new(&gl, &RendererConfig::default()).unwrap();
        let program = renderer.program().handle();
        gl.clear_calls();

        renderer.draw_frame(&gl);

        let calls = gl.calls();
        assert_eq!(calls.len(), 5);
        match &calls[0] {
            GlCall::ClearColor(rgba) => {
                for (got, want) in rgba.iter().zip([0.2, 0.3, 0.3, 1.0]) {
                    assert_relative_eq!(*got, want);
                }
            }
            other => panic!("expected clear color, got {other:?}"),
        }
        assert_eq!(
            &calls[1..],
            &[
                GlCall::Clear,
                GlCall::UseProgram(Some(program)),
                GlCall::BindVertexArray(Some(4)),
                GlCall::DrawIndexedTriangles(6),
            ]
        );
    }

    #[test]
    fn test_start_wireframe() {
        let gl = RecordingGl::new();
        let config = RendererConfig::default().with_wireframe(true);

        let _renderer = QuadRenderer::new(&gl, &config).unwrap();

        assert_eq!(gl.polygon_modes(), vec![PolygonMode::Line]);
    }

    #[test]
    fn test_destroy_releases_everything() {
        let gl = RecordingGl::new();
        let renderer = QuadRenderer::new(&gl, &RendererConfig::default()).unwrap();
        gl.clear_calls();

        renderer.destroy(&gl);

        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteVertexArray(_))), 1);
        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteBuffer(_))), 2);
        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteProgram(_))), 1);
    }

    #[test]
    fn test_mesh_failure_releases_program() {
        let gl = RecordingGl::new();
        gl.fail_creation_of("vertex array");

        assert!(QuadRenderer::new(&gl, &RendererConfig::default()).is_err());
        assert_eq!(gl.count(|c| matches!(c, GlCall::DeleteProgram(_))), 1);
    }
}
