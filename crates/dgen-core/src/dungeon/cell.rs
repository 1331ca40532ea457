//! Map cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// What a grid position currently represents
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CellKind {
    #[default]
    Wall,
    /// Reserved, never produced by the generator
    Floor,
    /// Reserved, never produced by the generator
    Door,
    Room,
    Corridor,
    Treasure,
    Monster,
    Trap,
}

impl CellKind {
    /// Check if this is one of the seeded room features
    pub const fn is_feature(&self) -> bool {
        matches!(self, CellKind::Treasure | CellKind::Monster | CellKind::Trap)
    }

    /// Check if this is passable (can walk through)
    pub const fn is_passable(&self) -> bool {
        !matches!(self, CellKind::Wall)
    }
}

/// A single map cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Current kind
    #[serde(rename = "type")]
    pub kind: CellKind,

    /// Room this cell belongs to, for room and feature cells
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<usize>,
}

impl Cell {
    /// Create a new wall cell
    pub const fn wall() -> Self {
        Self {
            kind: CellKind::Wall,
            room_id: None,
        }
    }

    /// Create a room floor cell owned by `room_id`
    pub const fn room(room_id: usize) -> Self {
        Self {
            kind: CellKind::Room,
            room_id: Some(room_id),
        }
    }

    /// Create a corridor cell
    pub const fn corridor() -> Self {
        Self {
            kind: CellKind::Corridor,
            room_id: None,
        }
    }

    /// Create a feature cell owned by `room_id`
    pub const fn feature(kind: CellKind, room_id: usize) -> Self {
        Self {
            kind,
            room_id: Some(room_id),
        }
    }
}
