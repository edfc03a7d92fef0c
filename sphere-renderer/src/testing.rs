//! Recording stand-ins for the browser: a fake GL context, in-memory files,
//! a logger that keeps its messages and a scheduler ticked by hand.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use web_sys::WebGl2RenderingContext as GL;

use crate::console::Logger;
use crate::error::{RenderError, RenderResult};
use crate::file::FileSource;
use crate::frame::{FrameCallback, FrameScheduler};
use crate::gl::Graphics;

/// State-changing GL calls, in the order they were made.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ClearColor([f32; 4]),
    ClearDepth(f32),
    DepthFunc(u32),
    Enable(u32),
    Clear(u32),
    BindBuffer { target: u32, buffer: Option<u32> },
    BufferData { target: u32, len: usize, usage: u32 },
    UseProgram(Option<u32>),
    VertexAttribPointer { index: u32, size: i32, stride: i32 },
    EnableVertexAttribArray(u32),
    Uniform2f(String, [f32; 2]),
    Uniform3f(String, [f32; 3]),
    DrawElements { mode: u32, count: i32, data_type: u32, offset: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeShader {
    shader_type: u32,
}

struct GlState {
    calls: Vec<Call>,
    next_id: u32,
    buffers_created: usize,
    shaders_created: usize,
    programs_created: usize,
    refuse_buffers: bool,
    compile_failures: HashMap<u32, String>,
    link_failure: Option<String>,
    attributes: HashMap<String, i32>,
    uniforms: HashSet<String>,
}

/// Fake GL context. Clones share state, so a test can keep a handle after
/// moving the context into a renderer.
#[derive(Clone)]
pub struct RecordingGl {
    state: Rc<RefCell<GlState>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        let attributes = [("aPosition".to_string(), 0), ("aColor".to_string(), 1)];
        let uniforms = ["spherePosition".to_string(), "windowSize".to_string()];
        Self {
            state: Rc::new(RefCell::new(GlState {
                calls: Vec::new(),
                next_id: 1,
                buffers_created: 0,
                shaders_created: 0,
                programs_created: 0,
                refuse_buffers: false,
                compile_failures: HashMap::new(),
                link_failure: None,
                attributes: attributes.into_iter().collect(),
                uniforms: uniforms.into_iter().collect(),
            })),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn draw_count(&self) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| matches!(c, Call::DrawElements { .. }))
            .count()
    }

    pub fn buffers_created(&self) -> usize {
        self.state.borrow().buffers_created
    }

    pub fn shaders_created(&self) -> usize {
        self.state.borrow().shaders_created
    }

    pub fn programs_created(&self) -> usize {
        self.state.borrow().programs_created
    }

    pub fn refuse_buffers(&self) {
        self.state.borrow_mut().refuse_buffers = true;
    }

    pub fn fail_compile(&self, shader_type: u32, log: &str) {
        self.state
            .borrow_mut()
            .compile_failures
            .insert(shader_type, log.to_string());
    }

    pub fn fail_link(&self, log: &str) {
        self.state.borrow_mut().link_failure = Some(log.to_string());
    }

    pub fn remove_attribute(&self, name: &str) {
        self.state.borrow_mut().attributes.remove(name);
    }

    pub fn remove_uniform(&self, name: &str) {
        self.state.borrow_mut().uniforms.remove(name);
    }

    fn record(&self, call: Call) {
        self.state.borrow_mut().calls.push(call);
    }

    fn next_id(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        id
    }
}

impl Graphics for RecordingGl {
    type Buffer = u32;
    type Shader = FakeShader;
    type Program = u32;
    type UniformLocation = String;

    fn create_buffer(&self) -> Option<u32> {
        if self.state.borrow().refuse_buffers {
            return None;
        }
        self.state.borrow_mut().buffers_created += 1;
        Some(self.next_id())
    }

    fn bind_buffer(&self, target: u32, buffer: Option<&u32>) {
        self.record(Call::BindBuffer {
            target,
            buffer: buffer.copied(),
        });
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData {
            target,
            len: data.len(),
            usage,
        });
    }

    fn create_shader(&self, shader_type: u32) -> Option<FakeShader> {
        self.state.borrow_mut().shaders_created += 1;
        Some(FakeShader { shader_type })
    }

    fn shader_source(&self, _shader: &FakeShader, _source: &str) {}

    fn compile_shader(&self, _shader: &FakeShader) {}

    fn shader_compiled(&self, shader: &FakeShader) -> bool {
        !self
            .state
            .borrow()
            .compile_failures
            .contains_key(&shader.shader_type)
    }

    fn shader_info_log(&self, shader: &FakeShader) -> Option<String> {
        self.state
            .borrow()
            .compile_failures
            .get(&shader.shader_type)
            .cloned()
    }

    fn create_program(&self) -> Option<u32> {
        self.state.borrow_mut().programs_created += 1;
        Some(self.next_id())
    }

    fn attach_shader(&self, _program: &u32, _shader: &FakeShader) {}

    fn link_program(&self, _program: &u32) {}

    fn program_linked(&self, _program: &u32) -> bool {
        self.state.borrow().link_failure.is_none()
    }

    fn program_info_log(&self, _program: &u32) -> Option<String> {
        self.state.borrow().link_failure.clone()
    }

    fn use_program(&self, program: Option<&u32>) {
        self.record(Call::UseProgram(program.copied()));
    }

    fn attrib_location(&self, _program: &u32, name: &str) -> i32 {
        self.state
            .borrow()
            .attributes
            .get(name)
            .copied()
            .unwrap_or(-1)
    }

    fn uniform_location(&self, _program: &u32, name: &str) -> Option<String> {
        self.state
            .borrow()
            .uniforms
            .contains(name)
            .then(|| name.to_string())
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        _normalized: bool,
        stride: i32,
        _offset: i32,
    ) {
        assert_eq!(data_type, GL::FLOAT);
        self.record(Call::VertexAttribPointer {
            index,
            size,
            stride,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn uniform2f(&self, location: &String, x: f32, y: f32) {
        self.record(Call::Uniform2f(location.clone(), [x, y]));
    }

    fn uniform3f(&self, location: &String, x: f32, y: f32, z: f32) {
        self.record(Call::Uniform3f(location.clone(), [x, y, z]));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor([r, g, b, a]));
    }

    fn clear_depth(&self, depth: f32) {
        self.record(Call::ClearDepth(depth));
    }

    fn depth_func(&self, func: u32) {
        self.record(Call::DepthFunc(func));
    }

    fn enable(&self, capability: u32) {
        self.record(Call::Enable(capability));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn draw_elements(&self, mode: u32, count: i32, data_type: u32, offset: i32) {
        self.record(Call::DrawElements {
            mode,
            count,
            data_type,
            offset,
        });
    }
}

/// Files served from memory; every request is remembered.
#[derive(Default)]
pub struct MemoryFiles {
    files: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, text: &str) -> Self {
        self.files.insert(path.to_string(), text.to_string());
        self
    }

    pub fn without(mut self, path: &str) -> Self {
        self.files.remove(path);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl FileSource for MemoryFiles {
    async fn load_text(&self, path: &str) -> RenderResult<String> {
        self.requests.borrow_mut().push(path.to_string());
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| RenderError::load(path, "HTTP 404 Not Found"))
    }
}

/// The files a default-configured demo fetches, with the shipped shaders.
pub fn demo_files() -> MemoryFiles {
    MemoryFiles::new()
        .with("models/cube.ply", include_str!("../www/models/cube.ply"))
        .with("shaders/simple.vs", include_str!("../www/shaders/simple.vs"))
        .with("shaders/simple.frag", include_str!("../www/shaders/simple.frag"))
}

#[derive(Default)]
pub struct RecordingLogger {
    infos: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// Holds the frame callback until the test ticks it.
#[derive(Default)]
pub struct ManualScheduler {
    frame: RefCell<Option<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.frame.borrow().is_some()
    }

    pub fn tick(&self, time: f64) {
        if let Some(frame) = self.frame.borrow_mut().as_mut() {
            frame(time);
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn run(&self, frame: FrameCallback) -> RenderResult<()> {
        *self.frame.borrow_mut() = Some(frame);
        Ok(())
    }
}
