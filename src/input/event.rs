/// Platform-agnostic input events.
///
/// These are fed into [`dispatch`](super::dispatch) which applies them to
/// a [`CameraRig`](crate::camera::CameraRig).
///
/// # Example
///
/// ```ignore
/// let request = dispatch(&mut rig, InputEvent::PointerMoved { dx: 4.0, dy: -2.0 });
/// if request == Some(HostRequest::RequestPointerLock) {
///     canvas.request_pointer_lock();
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Relative pointer movement while the cursor is (or may be) captured.
    PointerMoved {
        /// Horizontal delta in pixels (positive = right).
        dx: f32,
        /// Vertical delta in pixels (positive = down).
        dy: f32,
    },
    /// Physical key pressed or released.
    Key {
        /// DOM `KeyboardEvent.code` string, e.g. `"KeyW"`.
        code: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The host's cursor-lock owner changed.
    LockChanged {
        /// Whether the rig's own surface now holds the lock.
        target_is_owner: bool,
    },
    /// The host failed to grant a cursor-lock request.
    LockError,
    /// The user clicked the rig's target surface.
    Click,
    /// The host window or page lost focus; held keys will not report
    /// release.
    FocusLost,
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a raw winit device event. Only mouse motion is relevant.
    #[must_use]
    pub fn from_device_event(event: &winit::event::DeviceEvent) -> Option<Self> {
        match event {
            winit::event::DeviceEvent::MouseMotion { delta: (dx, dy) } => {
                Some(Self::PointerMoved {
                    dx: *dx as f32,
                    dy: *dy as f32,
                })
            }
            _ => None,
        }
    }

    /// Convert a winit window event into a rig event, if it maps to one.
    ///
    /// Key repeats are dropped since flags are level-triggered. Lock
    /// reports are not produced here: native cursor grabs are synchronous,
    /// so the host reports them after calling `set_cursor_grab`.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseButton, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    code: key_code_name(code),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => Some(Self::Click),
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}

/// DOM `KeyboardEvent.code` string for a winit key code. winit names its
/// `KeyCode` variants after the DOM codes, so the debug format matches.
#[cfg(feature = "viewer")]
fn key_code_name(code: winit::keyboard::KeyCode) -> String {
    format!("{code:?}")
}
