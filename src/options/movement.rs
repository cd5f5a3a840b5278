use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Movement", inline)]
#[serde(default)]
/// Translation speeds and spawn placement.
pub struct MovementOptions {
    /// Units per second while no boost key is held.
    #[schemars(title = "Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub movement_speed: f32,
    /// Units per second while the boost key is held. Replaces
    /// `movement_speed`, it is not added to it.
    #[schemars(title = "Boost Speed", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub boost_speed: f32,
    /// Initial height of the rig above the origin.
    #[schemars(skip)]
    pub spawn_height: f32,
    /// Scale combined directions to unit length so diagonals are no faster
    /// than straight moves.
    #[schemars(title = "Normalize Diagonal")]
    pub normalize_diagonal: bool,
}

impl Default for MovementOptions {
    fn default() -> Self {
        Self {
            movement_speed: 5.0,
            boost_speed: 100.0,
            spawn_height: 10.0,
            normalize_diagonal: false,
        }
    }
}

impl MovementOptions {
    /// Speed for the current frame given the boost flag.
    #[must_use]
    pub fn effective_speed(&self, boost: bool) -> f32 {
        if boost {
            self.boost_speed
        } else {
            self.movement_speed
        }
    }

    pub(super) fn fields(&self) -> [(&'static str, f32); 3] {
        [
            ("movement.movement_speed", self.movement_speed),
            ("movement.boost_speed", self.boost_speed),
            ("movement.spawn_height", self.spawn_height),
        ]
    }
}
