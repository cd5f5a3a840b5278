use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::Element;

use super::{init_logging, WebControls};
use crate::camera::CameraRig;
use crate::options::Options;
use crate::util::FrameClock;

/// Install console logging and the panic hook (`info` level).
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging_js() {
    init_logging(log::Level::Info);
}

/// JavaScript facade over [`WebControls`].
///
/// The camera argument is held untouched and can be read back with
/// `camera`; the host applies `position`, `yaw` and `pitch` to its own
/// scene objects after every `tick`.
#[wasm_bindgen(js_name = NoclipControls)]
pub struct JsControls {
    controls: WebControls<JsValue>,
    clock: FrameClock,
}

#[wasm_bindgen(js_class = NoclipControls)]
impl JsControls {
    /// Attach a rig to `element`. `options_toml` optionally overrides the
    /// defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        camera: JsValue,
        element: Element,
        options_toml: Option<String>,
    ) -> Result<JsControls, JsValue> {
        let options = match options_toml {
            Some(content) => Options::from_toml(&content)
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Options::default(),
        };
        let rig = CameraRig::with_options(camera, options);
        let controls = WebControls::attach(rig, element)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            controls,
            clock: FrameClock::new(),
        })
    }

    /// Advance by an explicit `dt` in seconds.
    pub fn update(&self, dt: f32) {
        self.controls.update(dt);
    }

    /// Measure the frame delta internally, advance, and return it.
    pub fn tick(&mut self) -> f32 {
        let dt = self.clock.tick();
        self.controls.update(dt);
        dt
    }

    /// Rig position as `[x, y, z]`.
    #[must_use]
    pub fn position(&self) -> Vec<f32> {
        self.controls.rig().position().to_array().to_vec()
    }

    /// Yaw in radians (rotation of the root node about `Y`).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.controls.rig().yaw()
    }

    /// Pitch in radians (rotation of the camera node about `X`).
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.controls.rig().pitch()
    }

    /// Forward vector of the pitch node as `[x, y, z]`.
    #[must_use]
    #[wasm_bindgen(js_name = forwardDirection)]
    pub fn forward_direction(&self) -> Vec<f32> {
        self.controls.rig().forward_direction().to_array().to_vec()
    }

    /// World-space gaze as `[x, y, z]`.
    #[must_use]
    #[wasm_bindgen(js_name = lookDirection)]
    pub fn look_direction(&self) -> Vec<f32> {
        self.controls.rig().look_direction().to_array().to_vec()
    }

    /// Whether the pointer is currently locked to the element.
    #[must_use]
    #[wasm_bindgen(js_name = isLocked)]
    pub fn is_locked(&self) -> bool {
        self.controls.rig().is_locked()
    }

    /// The camera object passed to the constructor.
    #[must_use]
    pub fn camera(&self) -> JsValue {
        self.controls.rig().camera().clone()
    }

    /// Remove every DOM listener. The rig stays readable.
    pub fn dispose(&mut self) {
        self.controls.dispose();
    }
}
