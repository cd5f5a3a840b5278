use glam::{Quat, Vec3};

use crate::camera::node::{PitchNode, YawNode};
use crate::input::keyboard::{MoveAction, MovementFlags};
use crate::input::lock::{HostRequest, LockTracker, PointerLock};
use crate::options::Options;

/// First-person "noclip" camera rig.
///
/// Owns a two-node hierarchy: a yaw node (world position plus heading) and
/// a pitch node parented to it that carries the host's camera handle `C`.
/// Pointer deltas rotate the nodes, held movement keys translate the yaw
/// node once per frame in its local basis, and host lock reports drive a
/// two-state cursor-lock mirror.
///
/// The rig performs no timing of its own: [`update`](Self::update) must be
/// called once per rendered frame with the elapsed seconds.
#[derive(Debug)]
pub struct CameraRig<C> {
    root: YawNode<C>,
    yaw: f32,
    pitch: f32,
    flags: MovementFlags,
    lock: LockTracker,
    options: Options,
}

impl<C> CameraRig<C> {
    /// Create a rig with default options around the host's camera handle.
    #[must_use]
    pub fn new(camera: C) -> Self {
        Self::with_options(camera, Options::default())
    }

    /// Create a rig with the given options.
    #[must_use]
    pub fn with_options(camera: C, options: Options) -> Self {
        let root = YawNode::new(
            PitchNode::new(camera),
            options.movement.spawn_height,
        );
        Self {
            root,
            yaw: 0.0,
            pitch: 0.0,
            flags: MovementFlags::EMPTY,
            lock: LockTracker::default(),
            options,
        }
    }

    // ── Look ──

    /// Rotate by raw pointer deltas (pixels).
    ///
    /// Moving right turns left-handed around `Y` (yaw decreases), moving
    /// down pitches the view down. Pitch is clamped to `±π/2` (or the soft
    /// range when enabled) after every call.
    pub fn look(&mut self, dx: f32, dy: f32) {
        let look = &self.options.look;
        let scale = look.radians_per_pixel();
        let dy = if look.look_vertical { dy } else { 0.0 };
        let (yaw_step, pitch_step) = (dx * scale, dy * scale);
        if !yaw_step.is_finite() || !pitch_step.is_finite() {
            log::debug!("ignoring non-finite look step ({dx}, {dy}) x {scale}");
            return;
        }
        self.yaw -= yaw_step;
        self.pitch -= pitch_step;
        let (min, max) = look.pitch_bounds();
        self.pitch = self.pitch.clamp(min, max);
        self.sync_nodes();
    }

    /// Current yaw in radians (unbounded; not wrapped to `[0, 2π)`).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in radians.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set both angles directly (e.g. to restore a saved view). Pitch is
    /// clamped like [`look`](Self::look) does; non-finite angles are
    /// ignored.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        if !yaw.is_finite() || !pitch.is_finite() {
            log::debug!("ignoring non-finite orientation ({yaw}, {pitch})");
            return;
        }
        let (min, max) = self.options.look.pitch_bounds();
        self.yaw = yaw;
        self.pitch = pitch.clamp(min, max);
        self.sync_nodes();
    }

    fn sync_nodes(&mut self) {
        self.root.set_yaw(self.yaw);
        self.root.pitch_node_mut().set_pitch(self.pitch);
    }

    // ── Movement ──

    /// Set or clear one movement-intent flag.
    pub fn set_move_flag(&mut self, action: MoveAction, pressed: bool) {
        self.flags.set(action, pressed);
    }

    /// Route a physical key code to its flag. Returns `false` (and changes
    /// nothing) for codes outside the fixed key table.
    pub fn set_key(&mut self, code: &str, pressed: bool) -> bool {
        let Some(action) = MoveAction::from_key_code(code) else {
            return false;
        };
        self.set_move_flag(action, pressed);
        true
    }

    /// Currently held movement intents.
    #[must_use]
    pub fn movement_flags(&self) -> MovementFlags {
        self.flags
    }

    /// Release every held key (used when the host loses focus and key-up
    /// events will never arrive).
    pub fn clear_movement(&mut self) {
        self.flags.clear();
    }

    /// Integrate one frame of motion.
    ///
    /// Boost replaces the base speed for this very frame. Every held
    /// direction contributes `speed * dt` along its local axis under the
    /// current yaw; combined directions are summed, and only normalized
    /// when `normalize_diagonal` is set. A negative or non-finite `dt` is
    /// treated as zero.
    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 {
            dt
        } else {
            if dt != 0.0 {
                log::debug!("ignoring invalid frame delta {dt}");
            }
            0.0
        };

        let movement = &self.options.movement;
        let speed =
            movement.effective_speed(self.flags.contains(MoveAction::Boost));
        let mut direction = self.flags.local_direction();
        if movement.normalize_diagonal {
            direction = direction.normalize_or_zero();
        }

        self.root
            .transform_mut()
            .translate_local(direction * speed * dt);
    }

    /// World-space position of the rig.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.root.position()
    }

    /// Teleport the rig.
    pub fn set_position(&mut self, position: Vec3) {
        self.root.transform_mut().position = position;
    }

    // ── Queries ──

    /// Local `-Z` rotated by the pitch node's rotation only.
    ///
    /// Yaw is not applied: the result is the view direction in the yaw
    /// node's frame. For a full world-space gaze use
    /// [`look_direction`](Self::look_direction).
    #[must_use]
    pub fn forward_direction(&self) -> Vec3 {
        self.root.pitch_node().rotation() * Vec3::NEG_Z
    }

    /// Write [`forward_direction`](Self::forward_direction) into `out` and
    /// return it.
    pub fn forward_direction_into(&self, out: &mut Vec3) -> Vec3 {
        *out = self.forward_direction();
        *out
    }

    /// World-space gaze direction (yaw then pitch applied to `-Z`).
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        self.root.camera_rotation() * Vec3::NEG_Z
    }

    /// World-space camera orientation.
    #[must_use]
    pub fn camera_rotation(&self) -> Quat {
        self.root.camera_rotation()
    }

    /// The root (yaw) node the host attaches to its scene graph.
    #[must_use]
    pub fn root_transform(&self) -> &YawNode<C> {
        &self.root
    }

    /// The host camera handle.
    #[must_use]
    pub fn camera(&self) -> &C {
        self.root.pitch_node().camera()
    }

    /// Mutable access to the host camera handle.
    pub fn camera_mut(&mut self) -> &mut C {
        self.root.pitch_node_mut().camera_mut()
    }

    /// Tear the rig down and hand the camera back.
    #[must_use]
    pub fn into_camera(self) -> C {
        self.root.into_pitch_node().into_camera()
    }

    // ── Pointer lock ──

    /// Mirrored cursor-lock state.
    #[must_use]
    pub fn lock_state(&self) -> PointerLock {
        self.lock.state()
    }

    /// Whether the cursor is currently captured for this rig.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Host reported a lock change; see [`LockTracker::on_lock_change`].
    pub fn on_lock_change(&mut self, target_is_owner: bool) -> PointerLock {
        self.lock.on_lock_change(target_is_owner)
    }

    /// Host reported a failed capture request. Logged only.
    pub fn on_lock_error(&self) {
        self.lock.on_lock_error();
    }

    /// User clicked the target surface; returns a capture request while
    /// unlocked.
    #[must_use]
    pub fn on_click(&self) -> Option<HostRequest> {
        self.lock.on_click()
    }

    // ── Options ──

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. Position is kept; pitch is re-clamped to the
    /// new bounds.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.set_orientation(self.yaw, self.pitch);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    fn rig() -> CameraRig<()> {
        CameraRig::new(())
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn fresh_rig_defaults() {
        let rig = rig();
        assert_eq!(rig.position(), Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(rig.yaw(), 0.0);
        assert_eq!(rig.pitch(), 0.0);
        assert!(rig.movement_flags().is_empty());
        assert_eq!(rig.lock_state(), PointerLock::Unlocked);
        assert_eq!(rig.forward_direction(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn look_zero_is_noop() {
        let mut rig = rig();
        rig.look(12.0, -7.0);
        let (yaw, pitch) = (rig.yaw(), rig.pitch());
        rig.look(0.0, 0.0);
        assert_eq!(rig.yaw(), yaw);
        assert_eq!(rig.pitch(), pitch);
    }

    #[test]
    fn look_applies_sensitivity_and_scale() {
        let mut rig = rig();
        rig.look(10.0, 5.0);
        // 0.002 * 8.0 = 0.016 rad per pixel
        assert!((rig.yaw() - -0.16).abs() < 1e-6);
        assert!((rig.pitch() - -0.08).abs() < 1e-6);
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut rig = rig();
        let deltas = [
            (0.0, -500.0),
            (3.0, -1000.0),
            (-40.0, 2000.0),
            (0.0, 97.0),
            (1.0, -3.0),
            (0.0, 1e6),
        ];
        for (dx, dy) in deltas {
            rig.look(dx, dy);
            assert!(rig.pitch() >= -FRAC_PI_2 && rig.pitch() <= FRAC_PI_2);
        }
        assert_eq!(rig.pitch(), -FRAC_PI_2);
    }

    #[test]
    fn yaw_is_not_clamped() {
        let mut rig = rig();
        rig.look(-1000.0, 0.0);
        assert!(rig.yaw() > PI);
    }

    #[test]
    fn look_vertical_off_ignores_dy() {
        let mut opts = Options::default();
        opts.look.look_vertical = false;
        let mut rig = CameraRig::with_options((), opts);
        rig.look(0.0, 50.0);
        assert_eq!(rig.pitch(), 0.0);
    }

    #[test]
    fn soft_range_applies_only_when_enabled() {
        let mut rig = rig();
        rig.look(0.0, -200.0);
        assert_eq!(rig.pitch(), FRAC_PI_2);

        let mut opts = Options::default();
        opts.look.constrain_vertical = true;
        rig.set_options(opts);
        assert!((rig.pitch() - (FRAC_PI_2 - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn forward_moves_speed_times_dt() {
        let mut rig = rig();
        rig.set_move_flag(MoveAction::Forward, true);
        rig.update(1.0);
        assert!(approx(rig.position(), Vec3::new(0.0, 10.0, -5.0)));
    }

    #[test]
    fn forward_follows_current_yaw() {
        let mut rig = rig();
        rig.set_orientation(FRAC_PI_2, 0.0);
        rig.set_move_flag(MoveAction::Forward, true);
        rig.update(1.0);
        assert!(approx(rig.position(), Vec3::new(-5.0, 10.0, 0.0)));

        // Turn back mid-flight: next frame uses the new heading at once
        rig.set_orientation(0.0, 0.0);
        rig.update(1.0);
        assert!(approx(rig.position(), Vec3::new(-5.0, 10.0, -5.0)));
    }

    #[test]
    fn pitch_does_not_tilt_translation() {
        let mut rig = rig();
        rig.look(0.0, -60.0);
        rig.set_move_flag(MoveAction::Forward, true);
        rig.update(1.0);
        assert!(approx(rig.position(), Vec3::new(0.0, 10.0, -5.0)));
    }

    #[test]
    fn boost_overrides_speed() {
        let mut rig = rig();
        rig.set_move_flag(MoveAction::Forward, true);
        rig.set_move_flag(MoveAction::Boost, true);
        let start = rig.position();
        rig.update(1.0);
        assert!(((rig.position() - start).length() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn diagonal_is_not_normalized() {
        let mut rig = rig();
        rig.set_move_flag(MoveAction::Forward, true);
        rig.set_move_flag(MoveAction::Right, true);
        let start = rig.position();
        rig.update(1.0);
        let moved = (rig.position() - start).length();
        assert!((moved - 5.0 * 2.0_f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn diagonal_normalized_when_enabled() {
        let mut opts = Options::default();
        opts.movement.normalize_diagonal = true;
        let mut rig = CameraRig::with_options((), opts);
        rig.set_move_flag(MoveAction::Forward, true);
        rig.set_move_flag(MoveAction::Right, true);
        let start = rig.position();
        rig.update(1.0);
        assert!(((rig.position() - start).length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn press_then_release_before_update_moves_nothing() {
        let mut rig = rig();
        let start = rig.position();
        rig.set_move_flag(MoveAction::Forward, true);
        rig.set_move_flag(MoveAction::Forward, false);
        rig.update(1.0);
        assert_eq!(rig.position(), start);
    }

    #[test]
    fn vertical_and_strafe_axes() {
        let mut rig = rig();
        rig.set_move_flag(MoveAction::Ascend, true);
        rig.update(0.5);
        assert!(approx(rig.position(), Vec3::new(0.0, 12.5, 0.0)));

        rig.set_move_flag(MoveAction::Ascend, false);
        rig.set_move_flag(MoveAction::Descend, true);
        rig.set_move_flag(MoveAction::Left, true);
        rig.update(1.0);
        assert!(approx(rig.position(), Vec3::new(-5.0, 7.5, 0.0)));
    }

    #[test]
    fn invalid_dt_is_ignored() {
        let mut rig = rig();
        rig.set_move_flag(MoveAction::Backward, true);
        let start = rig.position();
        rig.update(-1.0);
        rig.update(f32::NAN);
        rig.update(f32::INFINITY);
        assert_eq!(rig.position(), start);
    }

    #[test]
    fn set_key_ignores_unknown_codes() {
        let mut rig = rig();
        assert!(!rig.set_key("KeyX", true));
        assert!(rig.movement_flags().is_empty());
        assert!(rig.set_key("KeyC", true));
        assert!(rig.movement_flags().contains(MoveAction::Boost));
        // C boosts; it never moves vertically
        rig.update(1.0);
        assert_eq!(rig.position(), Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn forward_direction_uses_pitch_only() {
        let mut rig = rig();
        rig.set_orientation(FRAC_PI_2, 0.0);
        assert!(approx(rig.forward_direction(), Vec3::NEG_Z));
        assert!(approx(rig.look_direction(), Vec3::NEG_X));

        rig.set_orientation(FRAC_PI_2, FRAC_PI_2);
        assert!(approx(rig.forward_direction(), Vec3::Y));

        let mut out = Vec3::ZERO;
        let returned = rig.forward_direction_into(&mut out);
        assert_eq!(out, returned);
        assert!((out.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn lock_transitions() {
        let mut rig = rig();
        assert_eq!(rig.on_click(), Some(HostRequest::RequestPointerLock));
        assert_eq!(rig.on_lock_change(true), PointerLock::Locked);
        assert_eq!(rig.on_click(), None);
        rig.on_lock_error();
        assert!(rig.is_locked());
        assert_eq!(rig.on_lock_change(false), PointerLock::Unlocked);
    }

    #[test]
    fn camera_handle_is_returned_untouched() {
        let mut rig = CameraRig::new(vec![1, 2, 3]);
        rig.camera_mut().push(4);
        rig.look(5.0, 5.0);
        assert_eq!(rig.camera(), &[1, 2, 3, 4]);
        assert_eq!(rig.into_camera(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn nan_soft_range_does_not_panic_look() {
        let mut options = Options::default();
        options.look.constrain_vertical = true;
        options.look.vertical_min = f32::NAN;
        options.look.vertical_max = f32::NAN;
        let mut rig = CameraRig::with_options((), options);

        rig.look(1.0, 1000.0);
        assert!((rig.pitch() + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn nan_sensitivity_leaves_orientation_unchanged() {
        let mut rig = rig();
        rig.look(10.0, 10.0);
        let (yaw, pitch) = (rig.yaw(), rig.pitch());

        let mut options = Options::default();
        options.look.sensitivity = f32::NAN;
        rig.set_options(options);
        rig.look(1.0, 1.0);

        assert_eq!(rig.yaw(), yaw);
        assert_eq!(rig.pitch(), pitch);
        assert!(rig.pitch().abs() <= FRAC_PI_2);
    }

    #[test]
    fn non_finite_orientation_is_ignored() {
        let mut rig = rig();
        rig.set_orientation(0.5, 0.25);
        rig.set_orientation(f32::NAN, 0.0);
        rig.set_orientation(0.0, f32::INFINITY);
        assert_eq!(rig.yaw(), 0.5);
        assert_eq!(rig.pitch(), 0.25);
    }
}
