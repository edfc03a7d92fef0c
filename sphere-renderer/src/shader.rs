use web_sys::WebGl2RenderingContext as GL;

use crate::error::{RenderError, RenderResult, ShaderStage};
use crate::file::FileSource;
use crate::gl::Graphics;

pub fn compile_shader<G: Graphics>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> RenderResult<G::Shader> {
    let shader_type = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(shader_type)
        .ok_or(RenderError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    if gl.shader_compiled(&shader) {
        Ok(shader)
    } else {
        Err(RenderError::ShaderCompile {
            stage,
            log: gl.shader_info_log(&shader).unwrap_or_default(),
        })
    }
}

pub fn link_program<G: Graphics>(
    gl: &G,
    vert_shader: &G::Shader,
    frag_shader: &G::Shader,
) -> RenderResult<G::Program> {
    let program = gl
        .create_program()
        .ok_or(RenderError::ResourceCreation("program"))?;
    gl.attach_shader(&program, vert_shader);
    gl.attach_shader(&program, frag_shader);
    gl.link_program(&program);

    if gl.program_linked(&program) {
        Ok(program)
    } else {
        Err(RenderError::ProgramLink(
            gl.program_info_log(&program).unwrap_or_default(),
        ))
    }
}

/// Compiled vertex and fragment shaders and the program linking them.
pub struct ShaderSet<G: Graphics> {
    pub vertex: G::Shader,
    pub fragment: G::Shader,
    pub program: G::Program,
}

impl<G: Graphics> ShaderSet<G> {
    /// Fetches both sources in order, compiling each as it arrives.
    pub async fn load<F: FileSource>(
        gl: &G,
        files: &F,
        vertex_path: &str,
        fragment_path: &str,
    ) -> RenderResult<Self> {
        let source = files.load_text(vertex_path).await?;
        let vertex = compile_shader(gl, ShaderStage::Vertex, &source)?;

        let source = files.load_text(fragment_path).await?;
        let fragment = compile_shader(gl, ShaderStage::Fragment, &source)?;

        let program = link_program(gl, &vertex, &fragment)?;
        Ok(Self {
            vertex,
            fragment,
            program,
        })
    }
}

pub const POSITION_ATTRIBUTE: &str = "aPosition";
pub const COLOR_ATTRIBUTE: &str = "aColor";
pub const SPHERE_POSITION_UNIFORM: &str = "spherePosition";
pub const WINDOW_SIZE_UNIFORM: &str = "windowSize";

/// Attribute and uniform slots of a linked program, looked up once.
pub struct ShaderLocations<G: Graphics> {
    pub position: u32,
    /// `None` when the shader does not read vertex colors.
    pub color: Option<u32>,
    pub sphere_position: G::UniformLocation,
    pub window_size: G::UniformLocation,
}

impl<G: Graphics> ShaderLocations<G> {
    pub fn resolve(gl: &G, program: &G::Program) -> RenderResult<Self> {
        let attribute = |name: &str| u32::try_from(gl.attrib_location(program, name)).ok();
        let uniform = |name: &str| {
            gl.uniform_location(program, name)
                .ok_or_else(|| RenderError::MissingUniform(name.to_string()))
        };

        Ok(Self {
            position: attribute(POSITION_ATTRIBUTE)
                .ok_or_else(|| RenderError::MissingAttribute(POSITION_ATTRIBUTE.to_string()))?,
            color: attribute(COLOR_ATTRIBUTE),
            sphere_position: uniform(SPHERE_POSITION_UNIFORM)?,
            window_size: uniform(WINDOW_SIZE_UNIFORM)?,
        })
    }
}
