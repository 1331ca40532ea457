//! Dungeon system
//!
//! Contains the cell grid, rooms, and the generation pipeline stages.

mod cell;
mod corridor;
mod features;
mod generation;
mod grid;
mod placement;
mod room;
mod stats;

pub use cell::{Cell, CellKind};
pub use corridor::{connect_rooms, corridor_points, dig_corridor};
pub use features::{seed_features, seed_room, FeatureChances};
pub use generation::{generate_dungeon, generate_dungeon_at, DungeonMap, Metadata};
pub use grid::{Grid, Position};
pub use placement::{place_rooms, try_place_room, PlacementReport, MAX_PLACEMENT_ATTEMPTS};
pub use room::{Room, RoomKind};
pub use stats::Stats;
