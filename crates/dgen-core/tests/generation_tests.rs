//! Behavioral tests for the generation pipeline
//!
//! Covers:
//! - Grid dimensions and room spacing
//! - Corridor cells never overlapping room cells
//! - Reachability of every room through the corridor network
//! - Reproducibility from a seed
//! - Degraded (under-filled) generation

use std::collections::VecDeque;

use dgen_core::dungeon::{CellKind, DungeonMap, Position};
use dgen_core::{generate_dungeon, generate_dungeon_at, GenerationSettings};
use proptest::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn settings_strategy() -> impl Strategy<Value = GenerationSettings> {
    (
        20usize..=100,
        20usize..=100,
        0usize..=20,
        3usize..=8,
        0usize..=9,
        1usize..=3,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
    )
        .prop_map(
            |(width, height, room_count, min, extra, corridor_width, treasure, monster, trap)| {
                GenerationSettings {
                    width,
                    height,
                    room_count,
                    room_min_size: min,
                    room_max_size: min + extra,
                    corridor_width,
                    treasure_chance: treasure,
                    monster_chance: monster,
                    trap_chance: trap,
                }
            },
        )
}

/// Rooms reachable from room 0 by walking over non-wall cells
fn reachable_rooms(map: &DungeonMap) -> Vec<bool> {
    let grid = map.grid();
    let mut visited = vec![vec![false; grid.width()]; grid.height()];
    let mut reached = vec![false; map.rooms().len()];
    let Some(start) = map.rooms().first().map(|r| r.center) else {
        return reached;
    };

    let mut queue = VecDeque::from([start]);
    visited[start.y][start.x] = true;

    while let Some(pos) = queue.pop_front() {
        if let Some(id) = grid.get(pos.x, pos.y).and_then(|c| c.room_id) {
            reached[id] = true;
        }

        let neighbors = [
            (pos.x as i64 + 1, pos.y as i64),
            (pos.x as i64 - 1, pos.y as i64),
            (pos.x as i64, pos.y as i64 + 1),
            (pos.x as i64, pos.y as i64 - 1),
        ];
        for (nx, ny) in neighbors {
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let next = Position::new(nx as usize, ny as usize);
            if visited[next.y][next.x] {
                continue;
            }
            if grid.kind(next.x, next.y).is_some_and(|k| k.is_passable()) {
                visited[next.y][next.x] = true;
                queue.push_back(next);
            }
        }
    }

    reached
}

fn count_in_room(map: &DungeonMap, id: usize, kind: CellKind) -> usize {
    map.room(id)
        .map(|room| {
            room.positions()
                .filter(|p| map.grid().kind(p.x, p.y) == Some(kind))
                .count()
        })
        .unwrap_or(0)
}

// ============================================================================
// Properties over arbitrary valid settings
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_grid_has_requested_dimensions(settings in settings_strategy(), seed in any::<u64>()) {
        let map = generate_dungeon(&settings, seed).unwrap();

        prop_assert_eq!(map.width(), settings.width);
        prop_assert_eq!(map.height(), settings.height);
        prop_assert_eq!(map.grid().len(), settings.width * settings.height);
        prop_assert!(map.grid().is_well_formed());
    }

    #[test]
    fn prop_rooms_keep_their_gap(settings in settings_strategy(), seed in any::<u64>()) {
        let map = generate_dungeon(&settings, seed).unwrap();
        let rooms = map.rooms();

        for (i, a) in rooms.iter().enumerate() {
            for b in &rooms[i + 1..] {
                prop_assert!(
                    a.right() + 1 < b.x
                        || b.right() + 1 < a.x
                        || a.bottom() + 1 < b.y
                        || b.bottom() + 1 < a.y
                );
            }
        }
    }

    #[test]
    fn prop_room_counts_agree(settings in settings_strategy(), seed in any::<u64>()) {
        let map = generate_dungeon(&settings, seed).unwrap();

        prop_assert!(map.rooms().len() <= settings.room_count);
        prop_assert_eq!(map.stats().room_count, map.rooms().len());
        prop_assert_eq!(map.metadata().placement.placed, map.rooms().len());
        prop_assert_eq!(
            map.metadata().placement.placed + map.metadata().placement.skipped,
            settings.room_count
        );
    }

    #[test]
    fn prop_corridors_stay_out_of_rooms(settings in settings_strategy(), seed in any::<u64>()) {
        let map = generate_dungeon(&settings, seed).unwrap();

        for room in map.rooms() {
            for pos in room.positions() {
                let cell = map.cell(pos.x, pos.y).unwrap();
                prop_assert!(cell.kind == CellKind::Room || cell.kind.is_feature());
                prop_assert_eq!(cell.room_id, Some(room.id));
            }
        }

        for (pos, cell) in map.grid().iter() {
            if cell.kind == CellKind::Corridor {
                prop_assert!(cell.room_id.is_none());
                prop_assert!(!map.rooms().iter().any(|r| r.contains(pos.x, pos.y)));
            }
            prop_assert!(!matches!(cell.kind, CellKind::Floor | CellKind::Door));
        }
    }

    #[test]
    fn prop_all_rooms_reachable(settings in settings_strategy(), seed in any::<u64>()) {
        let map = generate_dungeon(&settings, seed).unwrap();

        if map.rooms().len() >= 2 {
            let reached = reachable_rooms(&map);
            prop_assert!(reached.iter().all(|&r| r), "unreachable rooms: {:?}", reached);
            prop_assert!(map.rooms().iter().all(|r| r.connected));
        }
    }

    #[test]
    fn prop_stats_match_grid(settings in settings_strategy(), seed in any::<u64>()) {
        let map = generate_dungeon(&settings, seed).unwrap();
        let grid = map.grid();
        let stats = map.stats();

        prop_assert_eq!(stats.corridor_length, grid.count_kind(CellKind::Corridor));
        prop_assert_eq!(stats.treasure_count, grid.count_kind(CellKind::Treasure));
        prop_assert_eq!(stats.monster_count, grid.count_kind(CellKind::Monster));
        prop_assert_eq!(stats.trap_count, grid.count_kind(CellKind::Trap));
        prop_assert!(stats.treasure_count <= map.rooms().len());
        prop_assert!(stats.monster_count <= map.rooms().len());
        prop_assert!(stats.trap_count <= map.rooms().len());
    }

    #[test]
    fn prop_seed_reproduces_map(settings in settings_strategy(), seed in any::<u64>()) {
        let at = chrono::Utc::now();
        let a = generate_dungeon_at(&settings, seed, at).unwrap();
        let b = generate_dungeon_at(&settings, seed, at).unwrap();

        prop_assert_eq!(a, b);
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_one_room_on_small_map() {
    let settings = GenerationSettings {
        width: 10,
        height: 10,
        room_count: 1,
        room_min_size: 4,
        room_max_size: 4,
        ..Default::default()
    };

    for seed in 0..20 {
        let map = generate_dungeon(&settings, seed).unwrap();

        assert_eq!(map.rooms().len(), 1);
        assert_eq!(map.rooms()[0].area(), 16);
        assert_eq!(map.stats().corridor_length, 0);
    }
}

#[test]
fn test_overcrowded_map_completes() {
    let settings = GenerationSettings {
        width: 12,
        height: 12,
        room_count: 5,
        room_min_size: 4,
        room_max_size: 6,
        ..Default::default()
    };

    let map = generate_dungeon(&settings, 2024).unwrap();

    assert!(map.rooms().len() < 5);
    assert!(map.metadata().placement.is_underfilled());
    assert_eq!(map.stats().room_count, map.rooms().len());
}

#[test]
fn test_certain_treasure_in_every_room() {
    let settings = GenerationSettings {
        room_count: 12,
        treasure_chance: 1.0,
        monster_chance: 0.0,
        trap_chance: 0.0,
        ..Default::default()
    };

    let map = generate_dungeon(&settings, 31337).unwrap();
    assert!(!map.rooms().is_empty());

    for room in map.rooms() {
        assert_eq!(count_in_room(&map, room.id, CellKind::Treasure), 1);
        assert_eq!(count_in_room(&map, room.id, CellKind::Monster), 0);
        assert_eq!(count_in_room(&map, room.id, CellKind::Trap), 0);
    }
    assert_eq!(map.stats().treasure_count, map.rooms().len());
}

#[test]
fn test_zero_rooms_requested() {
    let settings = GenerationSettings {
        room_count: 0,
        ..Default::default()
    };

    let map = generate_dungeon(&settings, 1).unwrap();

    assert!(map.rooms().is_empty());
    assert!(map.grid().iter().all(|(_, c)| c.kind == CellKind::Wall));
    assert!(!map.metadata().placement.is_underfilled());
}

#[test]
fn test_different_seeds_differ() {
    let settings = GenerationSettings::default();
    let at = chrono::Utc::now();

    let a = generate_dungeon_at(&settings, 1, at).unwrap();
    let b = generate_dungeon_at(&settings, 2, at).unwrap();

    assert_ne!(a.rooms(), b.rooms());
}
