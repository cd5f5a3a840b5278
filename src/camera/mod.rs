//! First-person camera rig.
//!
//! A yaw node (position + heading) carries a pitch node that carries the
//! host's camera. Mouse look rotates the two nodes, held keys fly the yaw
//! node through space.

/// Transform nodes making up the rig hierarchy.
pub mod node;
/// The rig itself: look, movement, queries and lock mirroring.
pub mod rig;

pub use node::{PitchNode, Transform, YawNode};
pub use rig::CameraRig;
