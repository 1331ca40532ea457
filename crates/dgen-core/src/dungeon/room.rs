//! Room structure and the buffered overlap test

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::grid::{Grid, Position};

/// Room kind discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    /// Ordinary rectangular room
    #[default]
    Room,
    /// Reserved for corridor-shaped rooms; never produced by the generator
    Corridor,
}

/// A placed rectangular room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Sequential identifier, in placement order
    pub id: usize,
    /// X coordinate of room interior (left edge)
    pub x: usize,
    /// Y coordinate of room interior (top edge)
    pub y: usize,
    /// Width of room interior
    pub width: usize,
    /// Height of room interior
    pub height: usize,
    /// Kind of room
    #[serde(rename = "type")]
    pub kind: RoomKind,
    /// Set once the room has been joined to the corridor network
    #[serde(default)]
    pub connected: bool,
    /// Center point, `(x + width/2, y + height/2)`
    pub center: Position,
}

impl Room {
    /// Create a new ordinary room
    pub fn new(id: usize, x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            kind: RoomKind::Room,
            connected: false,
            center: Position::new(x + width / 2, y + height / 2),
        }
    }

    /// One past the rightmost interior column
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom interior row
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Check if two rooms are closer than a one-cell gap
    ///
    /// Rooms are apart only when one lies strictly more than one cell
    /// beyond the other's right/bottom edge along some axis.
    pub fn overlaps(&self, other: &Room) -> bool {
        !(self.right() + 1 < other.x
            || other.right() + 1 < self.x
            || self.bottom() + 1 < other.y
            || other.bottom() + 1 < self.y)
    }

    /// Check if point is inside room
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Interior positions, row by row
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y..self.bottom())
            .flat_map(move |y| (self.x..self.right()).map(move |x| Position::new(x, y)))
    }

    /// Get room area (interior cells)
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Mark every interior cell as room floor owned by this room
    ///
    /// Cells falling off the grid are skipped.
    pub fn carve(&self, grid: &mut Grid) {
        for pos in self.positions() {
            grid.set(pos.x, pos.y, Cell::room(self.id));
        }
    }
}
