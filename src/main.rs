//! Native probe for the noclip rig.
//!
//! Opens a window, feeds it real mouse and keyboard input, and shows the
//! rig's pose in the title bar. Click to capture the cursor, Escape to
//! release it. An optional TOML options file may be passed as the first
//! argument.

use std::path::Path;
use std::sync::Arc;

use noclip::input::{dispatch, HostRequest, InputEvent};
use noclip::util::FrameClock;
use noclip::{CameraRig, Options};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

struct ProbeApp {
    window: Option<Arc<Window>>,
    rig: CameraRig<()>,
    clock: FrameClock,
}

impl ProbeApp {
    fn new(options: Options) -> Self {
        Self {
            window: None,
            rig: CameraRig::with_options((), options),
            clock: FrameClock::new(),
        }
    }

    fn handle(&mut self, event: InputEvent) {
        if let Some(HostRequest::RequestPointerLock) =
            dispatch(&mut self.rig, event)
        {
            self.grab_cursor();
        }
    }

    /// Native stand-in for `requestPointerLock`: grab is synchronous, so
    /// the outcome is reported back as a lock change or lock error.
    fn grab_cursor(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.handle(InputEvent::LockChanged {
                    target_is_owner: true,
                });
            }
            Err(e) => {
                log::warn!("cursor grab failed: {e}");
                self.handle(InputEvent::LockError);
            }
        }
    }

    fn release_cursor(&mut self) {
        if let Some(window) = &self.window {
            if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                log::warn!("cursor release failed: {e}");
            }
            window.set_cursor_visible(true);
        }
        self.handle(InputEvent::LockChanged {
            target_is_owner: false,
        });
    }

    fn title(&self) -> String {
        let p = self.rig.position();
        let f = self.rig.look_direction();
        format!(
            "noclip  pos ({:.1}, {:.1}, {:.1})  yaw {:.2}  pitch {:.2}  \
             look ({:.2}, {:.2}, {:.2})  {}  {:.0} fps",
            p.x,
            p.y,
            p.z,
            self.rig.yaw(),
            self.rig.pitch(),
            f.x,
            f.y,
            f.z,
            if self.rig.is_locked() { "locked" } else { "click to look" },
            self.clock.fps(),
        )
    }
}

impl ApplicationHandler for ProbeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("noclip")
            .with_inner_size(winit::dpi::LogicalSize::new(960, 540));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Raw motion keeps arriving while the cursor is free; only look
        // around while captured.
        if !self.rig.is_locked() {
            return;
        }
        if let Some(event) = InputEvent::from_device_event(&event) {
            self.handle(event);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event: ref key_event,
                ..
            } if key_event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                && key_event.state == ElementState::Pressed =>
            {
                self.release_cursor();
            }

            WindowEvent::Focused(false) => {
                self.release_cursor();
                self.handle(InputEvent::FocusLost);
            }

            WindowEvent::RedrawRequested => {
                let dt = self.clock.tick();
                self.rig.update(dt);
                let title = self.title();
                if let Some(window) = &self.window {
                    window.set_title(&title);
                    window.request_redraw();
                }
            }

            other => {
                if let Some(event) = InputEvent::from_window_event(&other) {
                    self.handle(event);
                }
            }
        }
    }
}

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&arg)) {
        Ok(options) => {
            log::info!("Loaded rig options from '{arg}'");
            options
        }
        Err(e) => {
            log::error!("Failed to load rig options '{arg}': {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let mut app = ProbeApp::new(load_options());
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {e}");
            std::process::exit(1);
        }
    };

    event_loop.set_control_flow(ControlFlow::Poll);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {e}");
        std::process::exit(1);
    }
}
