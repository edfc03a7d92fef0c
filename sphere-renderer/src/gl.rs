use js_sys::Uint8Array;
use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader, WebGlUniformLocation,
};

/// The subset of a WebGL context the renderer drives.
///
/// Method names follow the WebGL calls they wrap; constants are the
/// `WebGl2RenderingContext` ones.
pub trait Graphics {
    type Buffer;
    type Shader;
    type Program;
    type UniformLocation;

    fn create_buffer(&self) -> Option<Self::Buffer>;
    fn bind_buffer(&self, target: u32, buffer: Option<&Self::Buffer>);
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);

    fn create_shader(&self, shader_type: u32) -> Option<Self::Shader>;
    fn shader_source(&self, shader: &Self::Shader, source: &str);
    fn compile_shader(&self, shader: &Self::Shader);
    fn shader_compiled(&self, shader: &Self::Shader) -> bool;
    fn shader_info_log(&self, shader: &Self::Shader) -> Option<String>;

    fn create_program(&self) -> Option<Self::Program>;
    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);
    fn link_program(&self, program: &Self::Program);
    fn program_linked(&self, program: &Self::Program) -> bool;
    fn program_info_log(&self, program: &Self::Program) -> Option<String>;
    fn use_program(&self, program: Option<&Self::Program>);

    /// Negative when the program has no active attribute of that name.
    fn attrib_location(&self, program: &Self::Program, name: &str) -> i32;
    fn uniform_location(&self, program: &Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&self, index: u32);
    fn uniform2f(&self, location: &Self::UniformLocation, x: f32, y: f32);
    fn uniform3f(&self, location: &Self::UniformLocation, x: f32, y: f32, z: f32);

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear_depth(&self, depth: f32);
    fn depth_func(&self, func: u32);
    fn enable(&self, capability: u32);
    fn clear(&self, mask: u32);
    fn draw_elements(&self, mode: u32, count: i32, data_type: u32, offset: i32);
}

impl Graphics for GL {
    type Buffer = WebGlBuffer;
    type Shader = WebGlShader;
    type Program = WebGlProgram;
    type UniformLocation = WebGlUniformLocation;

    fn create_buffer(&self) -> Option<WebGlBuffer> {
        GL::create_buffer(self)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<&WebGlBuffer>) {
        GL::bind_buffer(self, target, buffer);
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        let js_array = Uint8Array::from(data);
        let js_object: js_sys::Object = js_array.into();
        self.buffer_data_with_array_buffer_view(target, &js_object, usage);
    }

    fn create_shader(&self, shader_type: u32) -> Option<WebGlShader> {
        GL::create_shader(self, shader_type)
    }

    fn shader_source(&self, shader: &WebGlShader, source: &str) {
        GL::shader_source(self, shader, source);
    }

    fn compile_shader(&self, shader: &WebGlShader) {
        GL::compile_shader(self, shader);
    }

    fn shader_compiled(&self, shader: &WebGlShader) -> bool {
        self.get_shader_parameter(shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn shader_info_log(&self, shader: &WebGlShader) -> Option<String> {
        self.get_shader_info_log(shader)
    }

    fn create_program(&self) -> Option<WebGlProgram> {
        GL::create_program(self)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        GL::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) {
        GL::link_program(self, program);
    }

    fn program_linked(&self, program: &WebGlProgram) -> bool {
        self.get_program_parameter(program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
    }

    fn program_info_log(&self, program: &WebGlProgram) -> Option<String> {
        self.get_program_info_log(program)
    }

    fn use_program(&self, program: Option<&WebGlProgram>) {
        GL::use_program(self, program);
    }

    fn attrib_location(&self, program: &WebGlProgram, name: &str) -> i32 {
        self.get_attrib_location(program, name)
    }

    fn uniform_location(&self, program: &WebGlProgram, name: &str) -> Option<WebGlUniformLocation> {
        self.get_uniform_location(program, name)
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.vertex_attrib_pointer_with_i32(index, size, data_type, normalized, stride, offset);
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        GL::enable_vertex_attrib_array(self, index);
    }

    fn uniform2f(&self, location: &WebGlUniformLocation, x: f32, y: f32) {
        GL::uniform2f(self, Some(location), x, y);
    }

    fn uniform3f(&self, location: &WebGlUniformLocation, x: f32, y: f32, z: f32) {
        GL::uniform3f(self, Some(location), x, y, z);
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        GL::clear_color(self, r, g, b, a);
    }

    fn clear_depth(&self, depth: f32) {
        GL::clear_depth(self, depth);
    }

    fn depth_func(&self, func: u32) {
        GL::depth_func(self, func);
    }

    fn enable(&self, capability: u32) {
        GL::enable(self, capability);
    }

    fn clear(&self, mask: u32) {
        GL::clear(self, mask);
    }

    fn draw_elements(&self, mode: u32, count: i32, data_type: u32, offset: i32) {
        self.draw_elements_with_i32(mode, count, data_type, offset);
    }
}
