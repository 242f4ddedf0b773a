//! Mock backends for unit tests
//!
//! [`RecordingGl`] implements [`GraphicsApi`] without a driver. It hands out
//! integer handles, records every state-changing call, and fakes a compiler
//! that rejects sources without a `main` function or with unbalanced braces.
//! [`MockWindow`] replays scripted event batches, one batch per poll.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use crate::render::api::{
    BufferTarget, GlError, GlResult, GraphicsApi, PolygonMode, ShaderStage, Viewport,
};
use crate::render::window::{WindowBackend, WindowEvent};

/// State-changing calls seen by [`RecordingGl`]
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateBuffer(u32),
    BindBuffer(BufferTarget, Option<u32>),
    BufferData(BufferTarget, Vec<u8>),
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    VertexAttribPointer { index: u32, components: i32, stride: i32, offset: i32 },
    EnableVertexAttribArray(u32),
    Viewport(Viewport),
    ClearColor([f32; 4]),
    Clear,
    PolygonMode(PolygonMode),
    DrawIndexedTriangles(i32),
}

#[derive(Default)]
struct ShaderRecord {
    source: String,
    compiled: Option<bool>,
}

#[derive(Default)]
struct ProgramRecord {
    attached: Vec<u32>,
    linked: Option<bool>,
}

/// Graphics API double that records calls
#[derive(Default)]
pub struct RecordingGl {
    next_handle: Cell<u32>,
    calls: RefCell<Vec<GlCall>>,
    shaders: RefCell<HashMap<u32, ShaderRecord>>,
    programs: RefCell<HashMap<u32, ProgramRecord>>,
    fail_creation: Cell<Option<&'static str>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make creation of the given object kind fail from now on
    pub fn fail_creation_of(&self, kind: &'static str) {
        self.fail_creation.set(Some(kind));
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn polygon_modes(&self) -> Vec<PolygonMode> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GlCall::PolygonMode(mode) => Some(*mode),
                _ => None,
            })
            .collect()
    }

    pub fn viewports(&self) -> Vec<Viewport> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GlCall::Viewport(viewport) => Some(*viewport),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self, kind: &'static str) -> GlResult<u32> {
        if self.fail_creation.get() == Some(kind) {
            return Err(GlError::ObjectCreation {
                kind,
                message: "out of memory".to_string(),
            });
        }
        let handle = self.next_handle.get() + 1;
        self.next_handle.set(handle);
        Ok(handle)
    }

    fn fake_compile(source: &str) -> bool {
        let mut depth = 0i32;
        for c in source.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return false;
            }
        }
        depth == 0 && source.contains("void main")
    }
}

impl GraphicsApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, stage: ShaderStage) -> GlResult<u32> {
        let handle = self.allocate("shader")?;
        self.shaders.borrow_mut().insert(handle, ShaderRecord::default());
        self.record(GlCall::CreateShader(stage, handle));
        Ok(handle)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(record) = self.shaders.borrow_mut().get_mut(&shader) {
            record.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        if let Some(record) = self.shaders.borrow_mut().get_mut(&shader) {
            record.compiled = Some(Self::fake_compile(&record.source));
        }
        self.record(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.shaders
            .borrow()
            .get(&shader)
            .and_then(|record| record.compiled)
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "0:1(1): error: syntax error, unexpected end of file\n".repeat(20)
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> GlResult<u32> {
        let handle = self.allocate("program")?;
        self.programs.borrow_mut().insert(handle, ProgramRecord::default());
        self.record(GlCall::CreateProgram(handle));
        Ok(handle)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        if let Some(record) = self.programs.borrow_mut().get_mut(&program) {
            record.attached.push(shader);
        }
        self.record(GlCall::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        let compiled: Vec<bool> = self
            .programs
            .borrow()
            .get(&program)
            .map(|record| record.attached.iter().map(|s| self.shader_compile_status(*s)).collect())
            .unwrap_or_default();
        let linked = compiled.len() == 2 && compiled.iter().all(|ok| *ok);

        if let Some(record) = self.programs.borrow_mut().get_mut(&program) {
            record.linked = Some(linked);
        }
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.programs
            .borrow()
            .get(&program)
            .and_then(|record| record.linked)
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: linking with uncompiled/unspecialized shader".to_string()
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(GlCall::DeleteProgram(program));
    }

    fn create_buffer(&self) -> GlResult<u32> {
        let handle = self.allocate("buffer")?;
        self.record(GlCall::CreateBuffer(handle));
        Ok(handle)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn buffer_data_static(&self, target: BufferTarget, data: &[u8]) {
        self.record(GlCall::BufferData(target, data.to_vec()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> GlResult<u32> {
        let handle = self.allocate("vertex array")?;
        self.record(GlCall::CreateVertexArray(handle));
        Ok(handle)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, components: i32, stride: i32, offset: i32) {
        self.record(GlCall::VertexAttribPointer { index, components, stride, offset });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn viewport(&self, viewport: Viewport) {
        self.record(GlCall::Viewport(viewport));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(GlCall::ClearColor(rgba));
    }

    fn clear_color_buffer(&self) {
        self.record(GlCall::Clear);
    }

    fn polygon_mode(&self, mode: PolygonMode) {
        self.record(GlCall::PolygonMode(mode));
    }

    fn draw_indexed_triangles(&self, index_count: i32) {
        self.record(GlCall::DrawIndexedTriangles(index_count));
    }
}

/// Window double replaying scripted event batches
pub struct MockWindow {
    should_close: bool,
    framebuffer_size: (i32, i32),
    pending: VecDeque<Vec<WindowEvent>>,
    close_after_polls: Option<usize>,
    pub polls: usize,
    pub swaps: usize,
}

impl MockWindow {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            should_close: false,
            framebuffer_size: (width, height),
            pending: VecDeque::new(),
            close_after_polls: None,
            polls: 0,
            swaps: 0,
        }
    }

    /// Queue the events returned by the next poll that has none queued yet
    pub fn push_events(&mut self, events: Vec<WindowEvent>) {
        self.pending.push_back(events);
    }

    /// Raise the close flag by itself after this many polls
    pub fn close_after_polls(&mut self, polls: usize) {
        self.close_after_polls = Some(polls);
    }
}

impl WindowBackend for MockWindow {
    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.polls += 1;
        if self.close_after_polls == Some(self.polls) {
            self.should_close = true;
        }
        let events = self.pending.pop_front().unwrap_or_default();
        for event in &events {
            if let WindowEvent::FramebufferResized { width, height } = *event {
                self.framebuffer_size = (width, height);
            }
        }
        events
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.framebuffer_size
    }
}
