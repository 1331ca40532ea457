//! Dungeon generation pipeline
//!
//! allocate grid → place rooms → connect rooms → seed features → tally stats.
//! Each stage takes the grid by `&mut` and an RNG built from the caller's
//! seed; nothing keeps a reference once its stage returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::rng::DungeonRng;
use crate::settings::{GenerationSettings, SettingsError};

use super::cell::Cell;
use super::corridor::connect_rooms;
use super::features::{seed_features, FeatureChances};
use super::grid::Grid;
use super::placement::{place_rooms, PlacementReport};
use super::room::Room;
use super::stats::Stats;

/// Information about how a map was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// When generation ran
    pub generated_at: DateTime<Utc>,
    /// Seed the map was generated from; passing it back reproduces the map
    #[serde(default)]
    pub seed: u64,
    /// Copy of the settings used
    pub settings: GenerationSettings,
    /// How many of the requested rooms were placed
    #[serde(default)]
    pub placement: PlacementReport,
    pub stats: Stats,
}

/// A generated dungeon layout
///
/// Owned and self-contained; clone it to hand an independent copy to a
/// renderer or exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonMap {
    #[serde(flatten)]
    grid: Grid,
    rooms: Vec<Room>,
    metadata: Metadata,
}

impl DungeonMap {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the cell at (x, y), if on the map
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.get(x, y)
    }

    /// Rooms in placement order; index equals room id
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: usize) -> Option<&Room> {
        self.rooms.get(id)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn stats(&self) -> &Stats {
        &self.metadata.stats
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.metadata.settings
    }

    /// Check that a map (typically one read back from a file) is internally
    /// consistent
    ///
    /// Returns a description of the first problem found.
    pub fn check_structure(&self) -> Result<(), String> {
        if !self.grid.is_well_formed() {
            return Err(format!(
                "cells do not form a {}x{} grid",
                self.grid.width(),
                self.grid.height()
            ));
        }
        if let Some((i, room)) = self.rooms.iter().enumerate().find(|(i, r)| r.id != *i) {
            return Err(format!("room at index {} has id {}", i, room.id));
        }
        if self.metadata.stats.room_count != self.rooms.len() {
            return Err(format!(
                "stats report {} rooms but {} are listed",
                self.metadata.stats.room_count,
                self.rooms.len()
            ));
        }
        Ok(())
    }
}

/// Generate a dungeon from `seed`, stamping it with the current time
pub fn generate_dungeon(
    settings: &GenerationSettings,
    seed: u64,
) -> Result<DungeonMap, SettingsError> {
    generate_dungeon_at(settings, seed, Utc::now())
}

/// Generate a dungeon from `seed` with an explicit timestamp
///
/// Every call starts a fresh RNG, so with the same settings, seed and
/// timestamp the result is identical.
pub fn generate_dungeon_at(
    settings: &GenerationSettings,
    seed: u64,
    generated_at: DateTime<Utc>,
) -> Result<DungeonMap, SettingsError> {
    settings.validate()?;
    let settings = settings.clone();
    let mut rng = DungeonRng::new(seed);

    let mut grid = Grid::new(settings.width, settings.height);

    let (mut rooms, placement) = place_rooms(
        &mut grid,
        settings.room_count,
        settings.room_min_size,
        settings.room_max_size,
        &mut rng,
    );
    if placement.is_underfilled() {
        warn!(
            requested = placement.requested,
            placed = placement.placed,
            "dungeon has fewer rooms than requested"
        );
    }

    connect_rooms(&mut grid, &mut rooms, settings.corridor_width);

    let chances = FeatureChances {
        treasure: settings.treasure_chance,
        monster: settings.monster_chance,
        trap: settings.trap_chance,
    };
    seed_features(&mut grid, &rooms, &chances, &mut rng);

    let stats = Stats::collect(&grid, rooms.len());
    info!(
        seed,
        width = settings.width,
        height = settings.height,
        rooms = stats.room_count,
        corridor = stats.corridor_length,
        treasure = stats.treasure_count,
        monsters = stats.monster_count,
        traps = stats.trap_count,
        "generated dungeon"
    );

    Ok(DungeonMap {
        grid,
        rooms,
        metadata: Metadata {
            generated_at,
            seed,
            settings,
            placement,
            stats,
        },
    })
}
