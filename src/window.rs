use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::camera::CameraRig;
use crate::config::RigConfig;
use crate::core::blocking::{BlockSignal, BlockingContext};
use crate::core::clock::FrameClock;
use crate::core::input_adapter::{Button, WinitInput};

const INITIAL_WINDOW_WIDTH: u32 = 960;
const INITIAL_WINDOW_HEIGHT: u32 = 540;

/// Open a window and drive a rig from its mouse and keyboard until closed.
pub fn run(config: RigConfig) -> Result<()> {
    let blocking = BlockingContext::new();
    let alt_block = blocking.add_movement_signal();
    let rig = CameraRig::new(config)?.with_blocking(blocking);

    let event_loop = EventLoop::new()?;
    let mut app = RigWindow::new(rig, alt_block);

    info!("Controls: WASD move, right-drag orbit, middle-drag pan, wheel zoom, F recenter, Alt freezes movement, Escape quits");
    event_loop.run_app(&mut app)?;
    info!("Window closed after {} frames", app.clock.frames());
    Ok(())
}

struct RigWindow {
    window: Option<Arc<Window>>,
    rig: CameraRig,
    input: WinitInput,
    clock: FrameClock,
    alt_block: BlockSignal,
}

impl RigWindow {
    fn new(rig: CameraRig, alt_block: BlockSignal) -> Self {
        Self {
            window: None,
            rig,
            input: WinitInput::new(),
            clock: FrameClock::new(),
            alt_block,
        }
    }

    fn frame(&mut self) {
        let elapsed = self.clock.tick();
        self.alt_block.set(self.input.is_down(Button::Alt));
        self.rig.advance(elapsed, &self.input);
        self.input.end_frame();

        if let Some(window) = &self.window {
            window.set_title(&title_for(&self.rig));
        }
    }
}

fn title_for(rig: &CameraRig) -> String {
    let p = rig.position();
    format!(
        "orbit-rig | pos ({:.1}, {:.1}) | yaw {:.1} pitch {:.1} | dist {:.1} | {:?}",
        p.x,
        p.z,
        rig.target_yaw(),
        rig.target_pitch(),
        rig.distance(),
        rig.contact()
    )
}

impl ApplicationHandler for RigWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("orbit-rig")
            .with_inner_size(winit::dpi::LogicalSize::new(
                INITIAL_WINDOW_WIDTH,
                INITIAL_WINDOW_HEIGHT,
            ));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                if size.width > 0 && size.height > 0 {
                    self.rig.set_aspect(size.width as f32 / size.height as f32);
                }
                self.window = Some(Arc::new(window));
                self.clock.reset();
                event_loop.set_control_flow(ControlFlow::Poll);
            }
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                self.rig.set_aspect(size.width as f32 / size.height as f32);
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }

        if self.input.is_down(Button::Escape) {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
