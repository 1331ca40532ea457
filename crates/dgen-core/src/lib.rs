//! dgen-core: procedural dungeon layout generation
//!
//! Builds a grid of typed cells from a handful of numeric settings: rooms
//! placed by rejection sampling, joined by a minimum-spanning-tree style
//! corridor network, then sprinkled with treasure, monsters and traps.
//!
//! This crate has no I/O beyond reading and writing settings files; the
//! whole pipeline is a function of its settings and a seeded RNG.

pub mod dungeon;
pub mod settings;

mod rng;

pub use dungeon::{generate_dungeon, generate_dungeon_at, DungeonMap};
pub use rng::DungeonRng;
pub use settings::{ConfigError, GenerationSettings, SettingsError};
