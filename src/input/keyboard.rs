use glam::Vec3;

/// Movement intents a key can drive.
///
/// Each physical key maps to exactly one action. Directional actions are
/// expressed in the rig's local basis: forward is `-Z`, right is `+X`,
/// ascend is `+Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    /// Move along local `-Z`.
    Forward,
    /// Move along local `+Z`.
    Backward,
    /// Strafe along local `-X`.
    Left,
    /// Strafe along local `+X`.
    Right,
    /// Rise along local `+Y`.
    Ascend,
    /// Sink along local `-Y`.
    Descend,
    /// Swap the movement speed for the boost speed while held.
    Boost,
}

impl MoveAction {
    /// Every action, in bit order.
    pub const ALL: [Self; 7] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Ascend,
        Self::Descend,
        Self::Boost,
    ];

    /// Look up the action bound to a physical key code.
    ///
    /// Codes are DOM `KeyboardEvent.code` strings, which coincide with the
    /// `winit::keyboard::KeyCode` debug format (`"KeyW"`, `"KeyQ"`, ...).
    /// The table is fixed; unbound codes return `None`.
    #[must_use]
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Self::Forward),
            "KeyS" => Some(Self::Backward),
            "KeyA" => Some(Self::Left),
            "KeyD" => Some(Self::Right),
            "KeyE" => Some(Self::Ascend),
            "KeyQ" => Some(Self::Descend),
            // Boost lives on C, not on a vertical key.
            "KeyC" => Some(Self::Boost),
            _ => None,
        }
    }

    /// Unit direction in the rig's local basis. `Boost` has none.
    #[must_use]
    pub fn local_axis(self) -> Vec3 {
        match self {
            Self::Forward => Vec3::NEG_Z,
            Self::Backward => Vec3::Z,
            Self::Left => Vec3::NEG_X,
            Self::Right => Vec3::X,
            Self::Ascend => Vec3::Y,
            Self::Descend => Vec3::NEG_Y,
            Self::Boost => Vec3::ZERO,
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of currently held movement intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementFlags(u8);

impl MovementFlags {
    /// No key held.
    pub const EMPTY: Self = Self(0);

    /// Set or clear the flag for one action.
    pub fn set(&mut self, action: MoveAction, pressed: bool) {
        if pressed {
            self.0 |= action.bit();
        } else {
            self.0 &= !action.bit();
        }
    }

    /// Whether the flag for `action` is set.
    #[must_use]
    pub fn contains(self, action: MoveAction) -> bool {
        self.0 & action.bit() != 0
    }

    /// Whether no flag is set.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Clear every flag.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Sum of the local axes of every held directional action.
    ///
    /// Not normalized: forward + right yields a vector of length `√2`.
    /// Opposite keys cancel.
    #[must_use]
    pub fn local_direction(self) -> Vec3 {
        MoveAction::ALL
            .into_iter()
            .filter(|action| self.contains(*action))
            .map(MoveAction::local_axis)
            .sum()
    }
}
