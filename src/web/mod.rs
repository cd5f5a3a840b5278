//! Browser driver: wires DOM events into a [`CameraRig`] and manages
//! pointer lock.
//!
//! [`WebControls::attach`] registers:
//!
//! - `mousemove` and `click` on the target element,
//! - `keydown`, `keyup`, `pointerlockchange`, `pointerlockerror` on its
//!   document,
//! - `blur` on the window (releases held keys).
//!
//! Every registration is recorded and removed again by
//! [`WebControls::dispose`] (also run on drop), so rigs can be replaced
//! without leaking listeners or double-firing.

mod bindings;

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

pub use bindings::JsControls;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, KeyboardEvent, MouseEvent, Node,
};

use crate::camera::CameraRig;
use crate::error::NoclipError;
use crate::input::{dispatch, HostRequest, InputEvent};

/// Route `log` output to the browser console and panics to
/// `console.error`. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already initialized");
    }
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// A [`CameraRig`] bound to a DOM element.
///
/// The rig is shared with the listener closures through
/// `Rc<RefCell<_>>`; borrows last for a single dispatch and are released
/// before any call back into the browser.
pub struct WebControls<C: 'static> {
    rig: Rc<RefCell<CameraRig<C>>>,
    element: Element,
    listeners: Vec<Listener>,
}

impl<C: 'static> WebControls<C> {
    /// Take ownership of `rig` and attach it to `element`.
    ///
    /// On failure every listener registered so far is removed again.
    pub fn attach(
        rig: CameraRig<C>,
        element: Element,
    ) -> Result<Self, NoclipError> {
        let document = element
            .owner_document()
            .ok_or_else(|| NoclipError::Listener("element has no document".into()))?;

        let mut controls = Self {
            rig: Rc::new(RefCell::new(rig)),
            element,
            listeners: Vec::new(),
        };
        // Drop runs dispose() if registration fails midway.
        controls.register(&document)?;
        log::info!("attached {} listeners", controls.listeners.len());
        Ok(controls)
    }

    fn register(&mut self, document: &Document) -> Result<(), NoclipError> {
        let element_target: EventTarget = self.element.clone().into();
        let document_target: &EventTarget = document;

        let rig = Rc::clone(&self.rig);
        self.listen(&element_target, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let moved = InputEvent::PointerMoved {
                dx: event.movement_x() as f32,
                dy: event.movement_y() as f32,
            };
            let _ = dispatch(&mut rig.borrow_mut(), moved);
        })?;

        for (kind, pressed) in [("keydown", true), ("keyup", false)] {
            let rig = Rc::clone(&self.rig);
            self.listen(document_target, kind, move |event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = InputEvent::Key {
                    code: event.code(),
                    pressed,
                };
                let _ = dispatch(&mut rig.borrow_mut(), key);
            })?;
        }

        let rig = Rc::clone(&self.rig);
        let doc = document.clone();
        let element = self.element.clone();
        self.listen(document_target, "pointerlockchange", move |_| {
            let change = InputEvent::LockChanged {
                target_is_owner: owns_pointer_lock(&doc, &element),
            };
            let _ = dispatch(&mut rig.borrow_mut(), change);
        })?;

        let rig = Rc::clone(&self.rig);
        self.listen(document_target, "pointerlockerror", move |_| {
            let _ = dispatch(&mut rig.borrow_mut(), InputEvent::LockError);
        })?;

        let rig = Rc::clone(&self.rig);
        let element = self.element.clone();
        self.listen(&element_target, "click", move |_| {
            let request = dispatch(&mut rig.borrow_mut(), InputEvent::Click);
            if request == Some(HostRequest::RequestPointerLock) {
                element.request_pointer_lock();
            }
        })?;

        if let Some(window) = web_sys::window() {
            let rig = Rc::clone(&self.rig);
            self.listen(&window, "blur", move |_| {
                let _ = dispatch(&mut rig.borrow_mut(), InputEvent::FocusLost);
            })?;
        }

        Ok(())
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), NoclipError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(
                kind,
                callback.as_ref().unchecked_ref::<js_sys::Function>(),
            )
            .map_err(|e| NoclipError::Listener(format!("{kind}: {e:?}")))?;
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }

    /// Remove every registered listener. Idempotent.
    pub fn dispose(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        for listener in self.listeners.drain(..) {
            let removed = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.callback.as_ref().unchecked_ref::<js_sys::Function>(),
            );
            if let Err(e) = removed {
                log::warn!("failed to remove {} listener: {e:?}", listener.kind);
            }
        }
        log::info!("detached rig listeners");
    }

    /// Whether [`dispose`](Self::dispose) has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of DOM listeners currently registered.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The element the rig listens on.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Borrow the rig.
    ///
    /// Do not hold the borrow across code that can dispatch DOM events
    /// synchronously.
    #[must_use]
    pub fn rig(&self) -> Ref<'_, CameraRig<C>> {
        self.rig.borrow()
    }

    /// Mutably borrow the rig (e.g. to teleport it or swap options).
    #[must_use]
    pub fn rig_mut(&self) -> RefMut<'_, CameraRig<C>> {
        self.rig.borrow_mut()
    }

    /// Frame tick; forwards to [`CameraRig::update`].
    pub fn update(&self, dt: f32) {
        self.rig.borrow_mut().update(dt);
    }
}

impl<C: 'static> Drop for WebControls<C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn owns_pointer_lock(document: &Document, element: &Element) -> bool {
    let target: &Node = element;
    document
        .pointer_lock_element()
        .is_some_and(|owner| owner.is_same_node(Some(target)))
}
