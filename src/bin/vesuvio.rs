use anyhow::Result;
use vesuvio::vesuvio::Vesuvio;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<()> {
    /* Window */
    let event_loop = EventLoop::new();
    let vesuvio = Vesuvio::init(&event_loop)?;

    event_loop.run(move |event, _, controlflow| match event {
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => {
            *controlflow = ControlFlow::Exit;
        }
        Event::MainEventsCleared => {
            vesuvio.context.window.request_redraw();
        }
        Event::RedrawRequested(_) => {
            vesuvio.draw();
            vesuvio.present().expect("Presenting frame.");
        }
        _ => {}
    });
}
