use bytemuck::Pod;
use web_sys::WebGl2RenderingContext as GL;

use crate::error::{RenderError, RenderResult};
use crate::gl::Graphics;
use crate::model::Model;

pub struct Buffer<G: Graphics> {
    pub obj: G::Buffer,
    target: u32,
}

impl<G: Graphics> Buffer<G> {
    pub fn new(gl: &G, target: u32) -> RenderResult<Self> {
        let obj = gl
            .create_buffer()
            .ok_or(RenderError::ResourceCreation("buffer"))?;
        Ok(Self { obj, target })
    }

    pub fn bind(&self, gl: &G) {
        gl.bind_buffer(self.target, Some(&self.obj));
    }

    pub fn unbind(&self, gl: &G) {
        gl.bind_buffer(self.target, None);
    }

    /// Uploads `data` and leaves the target unbound.
    pub fn set_data<D: Pod>(&self, gl: &G, data: &[D], usage: u32) {
        self.bind(gl);
        gl.buffer_data(self.target, bytemuck::cast_slice(data), usage);
        self.unbind(gl);
    }

    /// Points a float attribute at this buffer, tightly packed.
    pub fn set_attribute(&self, gl: &G, attrib_pos: u32, components: i32) {
        self.bind(gl);
        gl.vertex_attrib_pointer(
            attrib_pos,
            components,
            GL::FLOAT,
            false,
            components * std::mem::size_of::<f32>() as i32,
            0,
        );
        gl.enable_vertex_attrib_array(attrib_pos);
    }
}

/// The three static buffers backing a model.
pub struct BufferSet<G: Graphics> {
    pub vertices: Buffer<G>,
    pub colors: Buffer<G>,
    pub indices: Buffer<G>,
}

impl<G: Graphics> BufferSet<G> {
    pub fn upload(gl: &G, model: &Model) -> RenderResult<Self> {
        let vertices = Buffer::new(gl, GL::ARRAY_BUFFER)?;
        vertices.set_data(gl, &model.vertices, GL::STATIC_DRAW);

        let colors = Buffer::new(gl, GL::ARRAY_BUFFER)?;
        colors.set_data(gl, &model.vertex_colors, GL::STATIC_DRAW);

        let indices = Buffer::new(gl, GL::ELEMENT_ARRAY_BUFFER)?;
        indices.set_data(gl, &model.indices, GL::STATIC_DRAW);

        Ok(Self {
            vertices,
            colors,
            indices,
        })
    }
}
