use glam::{Mat4, Quat, Vec3};

/// Local transform of a scene-graph node: translation then rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position relative to the parent.
    pub position: Vec3,
    /// Rotation relative to the parent.
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Local-to-parent matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Move by `delta` expressed in this node's own (rotated) basis.
    pub fn translate_local(&mut self, delta: Vec3) {
        self.position += self.rotation * delta;
    }
}

/// Inner node: carries pitch and the host's camera handle.
///
/// The camera is opaque. The node never inspects it; it only holds it so
/// the host can read it back through the hierarchy.
#[derive(Debug)]
pub struct PitchNode<C> {
    transform: Transform,
    camera: C,
}

impl<C> PitchNode<C> {
    pub(crate) fn new(camera: C) -> Self {
        Self {
            transform: Transform::default(),
            camera,
        }
    }

    /// Local transform (rotation about `X` only, no offset).
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Rotation relative to the yaw node.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    /// The host camera attached to this node.
    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub(crate) fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub(crate) fn into_camera(self) -> C {
        self.camera
    }

    pub(crate) fn set_pitch(&mut self, pitch: f32) {
        self.transform.rotation = Quat::from_rotation_x(pitch);
    }
}

/// Outer node: world position and yaw. This is the rig's root, the node a
/// host attaches to its scene graph.
#[derive(Debug)]
pub struct YawNode<C> {
    transform: Transform,
    child: PitchNode<C>,
}

impl<C> YawNode<C> {
    pub(crate) fn new(child: PitchNode<C>, height: f32) -> Self {
        Self {
            transform: Transform {
                position: Vec3::new(0.0, height, 0.0),
                rotation: Quat::IDENTITY,
            },
            child,
        }
    }

    /// Local transform (position plus rotation about `Y`).
    #[must_use]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// World-space position of the rig.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// World-space yaw rotation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.transform.rotation
    }

    /// The pitch node parented to this one.
    #[must_use]
    pub fn pitch_node(&self) -> &PitchNode<C> {
        &self.child
    }

    /// Node-to-world matrix of this node.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.matrix()
    }

    /// Node-to-world matrix of the camera (yaw composed with pitch).
    /// Its inverse is the view matrix.
    #[must_use]
    pub fn camera_world_matrix(&self) -> Mat4 {
        self.transform.matrix() * self.child.transform.matrix()
    }

    /// World-space orientation of the camera.
    #[must_use]
    pub fn camera_rotation(&self) -> Quat {
        self.transform.rotation * self.child.transform.rotation
    }

    pub(crate) fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub(crate) fn pitch_node_mut(&mut self) -> &mut PitchNode<C> {
        &mut self.child
    }

    pub(crate) fn into_pitch_node(self) -> PitchNode<C> {
        self.child
    }

    pub(crate) fn set_yaw(&mut self, yaw: f32) {
        self.transform.rotation = Quat::from_rotation_y(yaw);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn translate_local_follows_rotation() {
        let mut t = Transform {
            position: Vec3::ZERO,
            rotation: Quat::from_rotation_y(FRAC_PI_2),
        };
        // Local -Z after a quarter turn left points at world -X
        t.translate_local(Vec3::NEG_Z * 2.0);
        assert!(approx(t.position, Vec3::new(-2.0, 0.0, 0.0)));
    }

    #[test]
    fn yaw_node_spawns_at_height() {
        let node = YawNode::new(PitchNode::new(()), 10.0);
        assert_eq!(node.position(), Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(node.rotation(), Quat::IDENTITY);
    }

    #[test]
    fn camera_matrix_composes_yaw_then_pitch() {
        let mut node = YawNode::new(PitchNode::new("cam"), 3.0);
        node.set_yaw(FRAC_PI_2);
        node.pitch_node_mut().set_pitch(0.3);

        let m = node.camera_world_matrix();
        let (_, rot, pos) = m.to_scale_rotation_translation();
        assert!(approx(pos, Vec3::new(0.0, 3.0, 0.0)));
        // q and -q are the same rotation
        assert!(rot.dot(node.camera_rotation()).abs() > 1.0 - 1e-6);
        assert_eq!(*node.pitch_node().camera(), "cam");
    }
}
