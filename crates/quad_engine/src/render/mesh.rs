//! Static quad geometry
//!
//! Four corners and the six indices that split them into two triangles,
//! uploaded once into a vertex buffer, an index buffer and a vertex array
//! object that records both bindings plus the position attribute layout.

use bytemuck::{Pod, Zeroable};

use crate::render::api::{BufferTarget, GlResult, GraphicsApi};

/// Attribute location of the vertex position (`layout (location = 0)`)
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Vertex with a position only
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Normalized device coordinates
    pub position: [f32; 3],
}

impl Vertex {
    /// Create a vertex at the given position
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

/// Quad corners: top right, bottom right, bottom left, top left
pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex::new(0.5, 0.5, 0.0),
    Vertex::new(0.5, -0.5, 0.0),
    Vertex::new(-0.5, -0.5, 0.0),
    Vertex::new(-0.5, 0.5, 0.0),
];

/// Two triangles sharing the bottom-right/top-left diagonal
pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

/// GPU-resident indexed mesh
pub struct QuadMesh<G: GraphicsApi> {
    vertex_array: G::VertexArray,
    vertex_buffer: G::Buffer,
    index_buffer: G::Buffer,
    index_count: i32,
}

impl<G: GraphicsApi> QuadMesh<G> {
    /// Upload [`QUAD_VERTICES`] and [`QUAD_INDICES`]
    pub fn upload(gl: &G) -> GlResult<Self> {
        Self::upload_indexed(gl, &QUAD_VERTICES, &QUAD_INDICES)
    }

    /// Upload arbitrary indexed geometry with the position-only layout
    pub fn upload_indexed(gl: &G, vertices: &[Vertex], indices: &[u32]) -> GlResult<Self> {
        let vertex_array = gl.create_vertex_array()?;
        let vertex_buffer = match gl.create_buffer() {
            Ok(buffer) => buffer,
            Err(e) => {
                gl.delete_vertex_array(vertex_array);
                return Err(e);
            }
        };
        let index_buffer = match gl.create_buffer() {
            Ok(buffer) => buffer,
            Err(e) => {
                gl.delete_buffer(vertex_buffer);
                gl.delete_vertex_array(vertex_array);
                return Err(e);
            }
        };

        gl.bind_vertex_array(Some(vertex_array));

        gl.bind_buffer(BufferTarget::Array, Some(vertex_buffer));
        gl.buffer_data_static(BufferTarget::Array, bytemuck::cast_slice(vertices));

        gl.bind_buffer(BufferTarget::ElementArray, Some(index_buffer));
        gl.buffer_data_static(BufferTarget::ElementArray, bytemuck::cast_slice(indices));

        let stride = std::mem::size_of::<Vertex>() as i32;
        gl.vertex_attrib_pointer_f32(POSITION_ATTRIBUTE, 3, stride, 0);
        gl.enable_vertex_attrib_array(POSITION_ATTRIBUTE);

        // The attribute pointer captured the array buffer, so it can be unbound.
        // The index buffer binding belongs to the VAO and must stay.
        gl.bind_buffer(BufferTarget::Array, None);
        gl.bind_vertex_array(None);

        log::debug!(
            "Uploaded mesh: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );

        Ok(Self {
            vertex_array,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as i32,
        })
    }

    /// Number of indices drawn per call
    pub const fn index_count(&self) -> i32 {
        self.index_count
    }

    /// Bind the vertex array and draw every index as triangles
    pub fn draw(&self, gl: &G) {
        gl.bind_vertex_array(Some(self.vertex_array));
        gl.draw_indexed_triangles(self.index_count);
    }

    /// Delete the vertex array and both buffers
    pub fn destroy(self, gl: &G) {
        gl.delete_vertex_array(self.vertex_array);
        gl.delete_buffer(self.vertex_buffer);
        gl.delete_buffer(self.index_buffer);
    }
}
