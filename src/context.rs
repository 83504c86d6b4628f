use std::ffi::CString;
use std::num::NonZeroU32;

use anyhow::{anyhow, Result};
use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version,
};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasRawWindowHandle;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::{pick_gl_config, WINDOW_HEIGHT, WINDOW_WIDTH};

pub struct GlContext {
    pub window: Window,
    pub gl: glow::Context,
    pub gl_context: PossiblyCurrentContext,
    pub gl_surface: Surface<WindowSurface>,
}

impl GlContext {
    pub fn init(event_loop: &EventLoop<()>) -> Result<Self> {
        /* Window + Config */
        let window_builder = WindowBuilder::new()
            .with_title("Vesuvio")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_builder(Some(window_builder))
            .build(event_loop, template, pick_gl_config)
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

        // Block on vertical sync at every buffer swap.
        gl_surface.set_swap_interval(
            &gl_context,
            SwapInterval::Wait(NonZeroU32::new(1).unwrap()),
        )?;

        /* Function Loading */
        let gl = unsafe {
            glow::Context::from_loader_function(|symbol| {
                let symbol = CString::new(symbol).unwrap();
                gl_display.get_proc_address(symbol.as_c_str())
            })
        };

        Ok(Self {
            window,
            gl,
            gl_context,
            gl_surface,
        })
    }

    pub fn present(&self) -> Result<()> {
        self.gl_surface.swap_buffers(&self.gl_context)?;
        Ok(())
    }
}
