//! Generation settings and validation
//!
//! Settings are validated once, before any grid is allocated, so the
//! samplers in the pipeline never see an empty or inverted range.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gap left between a room and the map edge on each side
pub const MAP_BORDER: usize = 1;

/// Parameters for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationSettings {
    /// Map width in cells
    pub width: usize,
    /// Map height in cells
    pub height: usize,
    /// Number of room slots to attempt
    pub room_count: usize,
    /// Smallest room side, inclusive
    pub room_min_size: usize,
    /// Largest room side, inclusive
    pub room_max_size: usize,
    /// Corridor thickness in cells
    pub corridor_width: usize,
    /// Probability of one treasure per room
    pub treasure_chance: f64,
    /// Probability of one monster per room
    pub monster_chance: f64,
    /// Probability of one trap per room
    pub trap_chance: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            room_count: 8,
            room_min_size: 4,
            room_max_size: 12,
            corridor_width: 1,
            treasure_chance: 0.2,
            monster_chance: 0.15,
            trap_chance: 0.1,
        }
    }
}

/// Axis of the map, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

/// Structural problems with a set of generation settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} must be at least 1")]
    ZeroDimension { field: &'static str },

    #[error("roomMinSize ({min}) is larger than roomMaxSize ({max})")]
    RoomSizeRange { min: usize, max: usize },

    #[error(
        "map {axis} {size} is too small: rooms up to {room_max} cells need at least {required}"
    )]
    MapTooSmall {
        axis: Axis,
        size: usize,
        room_max: usize,
        required: usize,
    },

    #[error("{field} must be within [0, 1], got {value}")]
    InvalidChance { field: &'static str, value: f64 },
}

/// Errors from loading settings out of a file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    Invalid(#[from] SettingsError),
}

impl GenerationSettings {
    /// Smallest map side that can hold a room of `room_max_size`.
    ///
    /// The room needs one wall cell on each side. When the room fills the
    /// map exactly the position range is empty and the room sits at 1.
    pub fn required_side(&self) -> usize {
        self.room_max_size + 2 * MAP_BORDER
    }

    /// Check the settings for ranges the generator cannot sample from
    pub fn validate(&self) -> Result<(), SettingsError> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("roomMinSize", self.room_min_size),
            ("roomMaxSize", self.room_max_size),
            ("corridorWidth", self.corridor_width),
        ];
        for (field, value) in dimensions {
            if value == 0 {
                return Err(SettingsError::ZeroDimension { field });
            }
        }

        if self.room_min_size > self.room_max_size {
            return Err(SettingsError::RoomSizeRange {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }

        let required = self.required_side();
        for (axis, size) in [(Axis::Width, self.width), (Axis::Height, self.height)] {
            if size < required {
                return Err(SettingsError::MapTooSmall {
                    axis,
                    size,
                    room_max: self.room_max_size,
                    required,
                });
            }
        }

        let chances = [
            ("treasureChance", self.treasure_chance),
            ("monsterChance", self.monster_chance),
            ("trapChance", self.trap_chance),
        ];
        for (field, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::InvalidChance { field, value });
            }
        }

        Ok(())
    }

    /// Load settings from a JSON file; missing keys take their defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse and validate settings from JSON text
    pub fn parse_config(contents: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
