//! Summary statistics over a finished grid

use serde::{Deserialize, Serialize};

use super::cell::CellKind;
use super::grid::Grid;

/// Feature and corridor tallies for a generated map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Rooms placed (from the room list, not the grid)
    pub room_count: usize,
    /// Number of corridor cells
    pub corridor_length: usize,
    pub treasure_count: usize,
    pub monster_count: usize,
    pub trap_count: usize,
}

impl Stats {
    /// Tally the grid in one pass
    pub fn collect(grid: &Grid, room_count: usize) -> Self {
        let mut stats = Self {
            room_count,
            ..Default::default()
        };

        for (_, cell) in grid.iter() {
            match cell.kind {
                CellKind::Treasure => stats.treasure_count += 1,
                CellKind::Monster => stats.monster_count += 1,
                CellKind::Trap => stats.trap_count += 1,
                CellKind::Corridor => stats.corridor_length += 1,
                CellKind::Wall | CellKind::Floor | CellKind::Door | CellKind::Room => {}
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Cell;

    #[test]
    fn test_empty_grid() {
        let stats = Stats::collect(&Grid::new(10, 10), 0);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_counts_each_kind() {
        let mut grid = Grid::new(10, 10);
        grid.set(0, 0, Cell::corridor());
        grid.set(1, 0, Cell::corridor());
        grid.set(2, 0, Cell::feature(CellKind::Treasure, 0));
        grid.set(3, 0, Cell::feature(CellKind::Monster, 0));
        grid.set(4, 0, Cell::feature(CellKind::Monster, 1));
        grid.set(5, 0, Cell::feature(CellKind::Trap, 1));
        grid.set(6, 0, Cell::room(1));

        let stats = Stats::collect(&grid, 2);

        assert_eq!(
            stats,
            Stats {
                room_count: 2,
                corridor_length: 2,
                treasure_count: 1,
                monster_count: 2,
                trap_count: 1,
            }
        );
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(Stats::default()).unwrap();
        for key in [
            "roomCount",
            "corridorLength",
            "treasureCount",
            "monsterCount",
            "trapCount",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
