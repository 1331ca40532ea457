//! Feature seeding: treasure, monsters and traps
//!
//! Each room gets at most one of each feature, rolled independently. The
//! candidate cells are collected once per room, before any roll. Treasure is
//! written unconditionally; monsters and traps are only written onto cells
//! that are still plain room floor, so they yield to an earlier feature.

use tracing::trace;

use crate::rng::DungeonRng;

use super::cell::{Cell, CellKind};
use super::grid::{Grid, Position};
use super::room::Room;

/// Per-room probability of each feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureChances {
    pub treasure: f64,
    pub monster: f64,
    pub trap: f64,
}

/// Cells inside `room` that are currently room floor
fn room_floor_cells(grid: &Grid, room: &Room) -> Vec<Position> {
    room.positions()
        .filter(|p| grid.kind(p.x, p.y) == Some(CellKind::Room))
        .collect()
}

/// Roll for one feature and, on success, pick a candidate cell
///
/// The roll is always drawn; the pick only when the roll succeeds and
/// there is a candidate.
fn roll_cell(
    candidates: &[Position],
    probability: f64,
    rng: &mut DungeonRng,
) -> Option<Position> {
    if rng.chance(probability) {
        rng.choose(candidates).copied()
    } else {
        None
    }
}

/// Seed features into one room
pub fn seed_room(
    grid: &mut Grid,
    room: &Room,
    chances: &FeatureChances,
    rng: &mut DungeonRng,
) {
    let candidates = room_floor_cells(grid, room);

    if let Some(pos) = roll_cell(&candidates, chances.treasure, rng) {
        trace!(room = room.id, x = pos.x, y = pos.y, "treasure");
        grid.set(pos.x, pos.y, Cell::feature(CellKind::Treasure, room.id));
    }

    for (kind, probability) in [
        (CellKind::Monster, chances.monster),
        (CellKind::Trap, chances.trap),
    ] {
        if let Some(pos) = roll_cell(&candidates, probability, rng)
            && grid.kind(pos.x, pos.y) == Some(CellKind::Room)
        {
            trace!(room = room.id, x = pos.x, y = pos.y, %kind, "feature");
            grid.set(pos.x, pos.y, Cell::feature(kind, room.id));
        }
    }
}

/// Seed features into every room, in placement order
pub fn seed_features(
    grid: &mut Grid,
    rooms: &[Room],
    chances: &FeatureChances,
    rng: &mut DungeonRng,
) {
    for room in rooms {
        seed_room(grid, room, chances, rng);
    }
}
