use std::ffi::CString;
use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::SwapInterval;
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasRawWindowHandle;
use vesuvio::{opengl_version_info, pick_gl_config, WINDOW_HEIGHT, WINDOW_WIDTH};
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

// Standalone bring-up check: create the window and context, print what the
// driver gives us, tear down.
fn main() -> Result<()> {
    /* Window + Config */
    let event_loop = EventLoop::new();
    let window_builder = WindowBuilder::new()
        .with_title("Learn OpenGL")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .with_resizable(false);
    let template = ConfigTemplateBuilder::new().with_depth_size(24);
    let (window, gl_config) = DisplayBuilder::new()
        .with_window_builder(Some(window_builder))
        .build(&event_loop, template, pick_gl_config)
        .map_err(|e| anyhow!("Display creation failed: {e}"))?;
    let window = window.ok_or_else(|| anyhow!("Window creation failed."))?;

    /* Context */
    let gl_display = gl_config.display();
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 1))))
        .with_profile(GlProfile::Core)
        .build(Some(window.raw_window_handle()));
    let not_current_context =
        unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

    /* Surface */
    let attrs = window.build_surface_attributes(Default::default());
    let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs)? };
    let gl_context = not_current_context.make_current(&gl_surface)?;
    gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::new(1).unwrap()))?;

    /* Function Loading */
    let gl = unsafe {
        glow::Context::from_loader_function(|symbol| {
            let symbol = CString::new(symbol).unwrap();
            gl_display.get_proc_address(symbol.as_c_str())
        })
    };

    opengl_version_info(&gl);

    Ok(())
}
