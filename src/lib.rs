pub mod context;
pub mod mesh;
pub mod shader;
pub mod vesuvio;

use glow::HasContext;
use glutin::config::Config;
use glutin::prelude::*;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 640;

pub fn pick_gl_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|accum, config| {
            // No multisampling needed for a single flat triangle.
            if config.num_samples() < accum.num_samples() {
                config
            } else {
                accum
            }
        })
        .unwrap()
}

pub fn opengl_version_info(gl: &glow::Context) {
    unsafe {
        println!("OpenGL INFO");
        println!("Vendor: {}", gl.get_parameter_string(glow::VENDOR));
        println!("Version: {}", gl.get_parameter_string(glow::VERSION));
        println!("Renderer: {}", gl.get_parameter_string(glow::RENDERER));
        println!(
            "Shading Language: {}",
            gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION)
        );
    }
}
