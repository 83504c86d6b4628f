use anyhow::Result;
use glow::HasContext;
use winit::event_loop::EventLoop;

use crate::context::GlContext;
use crate::mesh::Mesh;
use crate::shader::ShaderProgram;
use crate::{opengl_version_info, WINDOW_HEIGHT, WINDOW_WIDTH};

pub const CLEAR_COLOUR: [f32; 4] = [1.0, 1.0, 0.1, 1.0];

pub struct Vesuvio {
    pub context: GlContext,
    pub mesh: Mesh,
    pub shader_program: ShaderProgram,
}

impl Vesuvio {
    pub fn init(event_loop: &EventLoop<()>) -> Result<Self> {
        /* Context */
        let context = GlContext::init(event_loop)?;
        opengl_version_info(&context.gl);

        /* Geometry */
        let mesh = Mesh::triangle(&context.gl)?;

        /* Pipeline */
        let shader_program = ShaderProgram::init(&context.gl)?;

        Ok(Self {
            context,
            mesh,
            shader_program,
        })
    }

    pub fn draw(&self) {
        let gl = &self.context.gl;
        unsafe {
            gl.disable(glow::DEPTH_TEST);
            gl.disable(glow::CULL_FACE);

            gl.viewport(0, 0, WINDOW_WIDTH as i32, WINDOW_HEIGHT as i32);
            gl.clear_color(
                CLEAR_COLOUR[0],
                CLEAR_COLOUR[1],
                CLEAR_COLOUR[2],
                CLEAR_COLOUR[3],
            );
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

            gl.use_program(Some(self.shader_program.program));
        }

        self.mesh.bind(gl);
        unsafe { gl.draw_arrays(glow::TRIANGLES, 0, self.mesh.vertex_count) };
    }

    pub fn present(&self) -> Result<()> {
        self.context.present()
    }
}

impl Drop for Vesuvio {
    fn drop(&mut self) {
        self.shader_program.cleanup(&self.context.gl);
        self.mesh.cleanup(&self.context.gl);
    }
}
