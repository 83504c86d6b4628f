use anyhow::{bail, Error, Result};
use glow::HasContext;

pub const VERTEX_SHADER_SOURCE: &str = "#version 410 core
layout(location = 0) in vec4 position;
void main()
{
    gl_Position = vec4(position.x, position.y, position.z, position.w);
}
";

pub const FRAGMENT_SHADER_SOURCE: &str = "#version 410 core
layout(location = 0) out vec4 color;
void main()
{
    color = vec4(1.0, 0.5, 0.0, 1.0);
}
";

pub struct ShaderProgram {
    pub program: glow::NativeProgram,
}

impl ShaderProgram {
    pub fn init(gl: &glow::Context) -> Result<Self> {
        /* Shaders */
        let vertex_shader = compile_shader(gl, glow::VERTEX_SHADER, VERTEX_SHADER_SOURCE)?;
        let fragment_shader = compile_shader(gl, glow::FRAGMENT_SHADER, FRAGMENT_SHADER_SOURCE)?;

        /* Program */
        let program = unsafe { gl.create_program() }.map_err(Error::msg)?;
        unsafe {
            gl.attach_shader(program, vertex_shader);
            gl.attach_shader(program, fragment_shader);
            gl.link_program(program);
        }
        if !unsafe { gl.get_program_link_status(program) } {
            let log = unsafe { gl.get_program_info_log(program) };
            unsafe { gl.delete_program(program) };
            bail!("Program linking failed: {log}");
        }

        unsafe {
            gl.validate_program(program);
            gl.detach_shader(program, vertex_shader);
            gl.detach_shader(program, fragment_shader);
            gl.delete_shader(vertex_shader);
            gl.delete_shader(fragment_shader);
        }

        Ok(Self { program })
    }

    pub fn cleanup(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) }
    }
}

fn compile_shader(gl: &glow::Context, stage: u32, source: &str) -> Result<glow::NativeShader> {
    let stage_name = match stage {
        glow::VERTEX_SHADER => "vertex",
        glow::FRAGMENT_SHADER => "fragment",
        _ => "unknown",
    };

    let shader = unsafe { gl.create_shader(stage) }.map_err(Error::msg)?;
    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
    }

    if !unsafe { gl.get_shader_compile_status(shader) } {
        let log = unsafe { gl.get_shader_info_log(shader) };
        unsafe { gl.delete_shader(shader) };
        bail!("{stage_name} shader compilation failed: {log}");
    }

    Ok(shader)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(stage: naga::ShaderStage, source: &str) {
        // naga's GLSL frontend only accepts versions 440/450/460; the GPU
        // still gets the 410-core sources unchanged.
        let source = source.replacen("#version 410 core", "#version 450 core", 1);
        assert!(source.starts_with("#version 450 core"));

        let mut frontend = naga::front::glsl::Frontend::default();
        let module = frontend
            .parse(&naga::front::glsl::Options::from(stage), &source)
            .expect("Parsing shader.");
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module)
        .expect("Validating shader.");
    }

    #[test]
    fn vertex_shader_is_valid_glsl() {
        validate(naga::ShaderStage::Vertex, VERTEX_SHADER_SOURCE);
    }

    #[test]
    fn fragment_shader_is_valid_glsl() {
        validate(naga::ShaderStage::Fragment, FRAGMENT_SHADER_SOURCE);
    }

    #[test]
    fn shaders_target_410_core() {
        assert!(VERTEX_SHADER_SOURCE.starts_with("#version 410 core"));
        assert!(FRAGMENT_SHADER_SOURCE.starts_with("#version 410 core"));
    }
}
