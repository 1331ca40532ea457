//! Room placement by rejection sampling
//!
//! Each requested room slot gets a fixed budget of random placements. A
//! candidate is accepted when it keeps a one-cell gap from every room placed
//! so far; a slot that exhausts its budget is dropped.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::rng::DungeonRng;
use crate::settings::MAP_BORDER;

use super::grid::Grid;
use super::room::Room;

/// Random placements tried per room slot before giving up on it
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Outcome of room placement, recorded in the map metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlacementReport {
    /// Room slots requested
    pub requested: usize,
    /// Rooms actually placed
    pub placed: usize,
    /// Slots dropped after exhausting their attempts
    pub skipped: usize,
}

impl PlacementReport {
    /// Check if fewer rooms were placed than requested
    pub fn is_underfilled(&self) -> bool {
        self.placed < self.requested
    }
}

/// Draw one candidate room inside the map border
///
/// Draw order is width, height, x, y. `x` is drawn from
/// `1..map_width - width - 1`, so at least one wall column stays on each side.
fn random_room(
    id: usize,
    grid: &Grid,
    min_size: usize,
    max_size: usize,
    rng: &mut DungeonRng,
) -> Room {
    let width = rng.range_inclusive(min_size, max_size);
    let height = rng.range_inclusive(min_size, max_size);

    let x_span = grid.width().saturating_sub(width + 2 * MAP_BORDER);
    let y_span = grid.height().saturating_sub(height + 2 * MAP_BORDER);
    let x = rng.rn2(x_span) + MAP_BORDER;
    let y = rng.rn2(y_span) + MAP_BORDER;

    Room::new(id, x, y, width, height)
}

/// Try to place one room, returning it if a non-overlapping spot was found
pub fn try_place_room(
    id: usize,
    grid: &Grid,
    min_size: usize,
    max_size: usize,
    existing: &[Room],
    rng: &mut DungeonRng,
) -> Option<Room> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = random_room(id, grid, min_size, max_size, rng);
        if !existing.iter().any(|r| candidate.overlaps(r)) {
            return Some(candidate);
        }
    }
    None
}

/// Place up to `room_count` rooms and carve them into the grid
///
/// Room ids are assigned sequentially in placement order, so skipped slots
/// leave no gaps in the id sequence.
pub fn place_rooms(
    grid: &mut Grid,
    room_count: usize,
    min_size: usize,
    max_size: usize,
    rng: &mut DungeonRng,
) -> (Vec<Room>, PlacementReport) {
    let mut rooms: Vec<Room> = Vec::with_capacity(room_count);
    let mut report = PlacementReport {
        requested: room_count,
        ..Default::default()
    };

    for slot in 0..room_count {
        match try_place_room(rooms.len(), grid, min_size, max_size, &rooms, rng) {
            Some(room) => {
                debug!(
                    id = room.id,
                    x = room.x,
                    y = room.y,
                    width = room.width,
                    height = room.height,
                    "placed room"
                );
                room.carve(grid);
                rooms.push(room);
                report.placed += 1;
            }
            None => {
                warn!(
                    slot,
                    attempts = MAX_PLACEMENT_ATTEMPTS,
                    "no free space for room, skipping slot"
                );
                report.skipped += 1;
            }
        }
    }

    (rooms, report)
}
