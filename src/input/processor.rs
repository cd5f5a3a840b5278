//! Applies platform-agnostic input events to a rig.
//!
//! Dispatch is a plain function over an explicit `&mut CameraRig`: drivers
//! (DOM listeners, a winit loop, tests) translate their raw events into
//! [`InputEvent`]s and hand them here together with the rig they target.
//! Nothing is bound implicitly.

use super::event::InputEvent;
use super::lock::HostRequest;
use crate::camera::CameraRig;

/// Apply one event to `rig`.
///
/// Returns a request the host must carry out (currently only cursor
/// capture after a click while unlocked). Unbound key codes are ignored.
pub fn dispatch<C>(
    rig: &mut CameraRig<C>,
    event: InputEvent,
) -> Option<HostRequest> {
    match event {
        InputEvent::PointerMoved { dx, dy } => {
            rig.look(dx, dy);
            None
        }
        InputEvent::Key { code, pressed } => {
            if !rig.set_key(&code, pressed) {
                log::trace!("unbound key {code}");
            }
            None
        }
        InputEvent::LockChanged { target_is_owner } => {
            let _ = rig.on_lock_change(target_is_owner);
            None
        }
        InputEvent::LockError => {
            rig.on_lock_error();
            None
        }
        InputEvent::Click => rig.on_click(),
        InputEvent::FocusLost => {
            rig.clear_movement();
            None
        }
    }
}
