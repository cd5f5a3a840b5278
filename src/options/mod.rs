//! Rig tuning options with TOML preset support.
//!
//! Look and movement settings are consolidated here. Options serialize
//! to/from TOML so a host can ship presets (e.g. a slow "inspection" rig and
//! a fast "flythrough" rig) next to its scene files.
//!
//! Key bindings are intentionally not part of the options: the key table in
//! [`crate::input::keyboard`] is fixed.

mod look;
mod movement;

use std::path::Path;

pub use look::{LookOptions, PITCH_LIMIT};
pub use movement::MovementOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::NoclipError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[movement]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Mouse-look parameters.
    pub look: LookOptions,
    /// Translation parameters.
    pub movement: MovementOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// TOML accepts `nan` and `inf` literals; those are rejected by
    /// [`validate`](Self::validate).
    pub fn from_toml(content: &str) -> Result<Self, NoclipError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| NoclipError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every numeric field is finite.
    pub fn validate(&self) -> Result<(), NoclipError> {
        let look = self.look.fields();
        let movement = self.movement.fields();
        look.iter()
            .chain(&movement)
            .find(|(_, value)| !value.is_finite())
            .map_or(Ok(()), |(name, value)| {
                Err(NoclipError::OptionsParse(format!(
                    "{name} must be finite, got {value}"
                )))
            })
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NoclipError> {
        let content = std::fs::read_to_string(path).map_err(NoclipError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NoclipError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NoclipError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NoclipError::Io)?;
        }
        std::fs::write(path, content).map_err(NoclipError::Io)
    }
}
