//! Corridor generation
//!
//! Rooms are joined greedily: starting from the first placed room, the
//! closest (connected, unconnected) pair by Manhattan distance between
//! centers is joined with an L-shaped corridor until every room is in the
//! connected set. Corridors only ever replace wall cells.

use tracing::debug;

use super::cell::{Cell, CellKind};
use super::grid::{Grid, Position};
use super::room::Room;

/// Points of an L-shaped path: horizontal leg first, then vertical
///
/// Includes both endpoints. A path between equal points is that single point.
pub fn corridor_points(from: Position, to: Position) -> Vec<Position> {
    let mut points = Vec::with_capacity(from.manhattan(&to) + 1);
    let mut current = from;

    while current.x != to.x {
        points.push(current);
        if current.x < to.x {
            current.x += 1;
        } else {
            current.x -= 1;
        }
    }

    while current.y != to.y {
        points.push(current);
        if current.y < to.y {
            current.y += 1;
        } else {
            current.y -= 1;
        }
    }

    points.push(current);
    points
}

/// Turn every wall cell within `width / 2` of `point` into corridor
///
/// Returns the number of cells converted.
fn carve_square(grid: &mut Grid, point: Position, width: usize) -> usize {
    let half = (width / 2) as i64;
    let mut carved = 0;

    for dy in -half..=half {
        for dx in -half..=half {
            let x = point.x as i64 + dx;
            let y = point.y as i64 + dy;
            if !grid.in_bounds(x, y) {
                continue;
            }

            let (ux, uy) = (x as usize, y as usize);
            if grid.kind(ux, uy) == Some(CellKind::Wall) {
                grid.set(ux, uy, Cell::corridor());
                carved += 1;
            }
        }
    }

    carved
}

/// Carve an L-shaped corridor of the given width between two points
///
/// Returns the number of wall cells converted.
pub fn dig_corridor(grid: &mut Grid, from: Position, to: Position, width: usize) -> usize {
    corridor_points(from, to)
        .into_iter()
        .map(|point| carve_square(grid, point, width))
        .sum()
}

/// Find the closest (connected, unconnected) pair of rooms
///
/// Scans connected rooms in the outer loop and unconnected rooms in the
/// inner loop; on equal distance the first pair found is kept. Returns the
/// positions of the pair within their respective lists.
fn closest_pair(
    rooms: &[Room],
    connected: &[usize],
    unconnected: &[usize],
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, usize)> = None;

    for (ci, &c) in connected.iter().enumerate() {
        for (ui, &u) in unconnected.iter().enumerate() {
            let distance = rooms[c].center.manhattan(&rooms[u].center);
            if best.is_none_or(|(d, _, _)| distance < d) {
                best = Some((distance, ci, ui));
            }
        }
    }

    best.map(|(_, ci, ui)| (ci, ui))
}

/// Join all rooms into one corridor network
///
/// Does nothing with fewer than two rooms. Every room is marked
/// `connected` once joined. Returns the (from, to) room ids of each
/// corridor, in the order they were dug.
pub fn connect_rooms(
    grid: &mut Grid,
    rooms: &mut [Room],
    corridor_width: usize,
) -> Vec<(usize, usize)> {
    if rooms.len() < 2 {
        return Vec::new();
    }

    let mut connected: Vec<usize> = vec![0];
    let mut unconnected: Vec<usize> = (1..rooms.len()).collect();
    let mut edges = Vec::with_capacity(rooms.len() - 1);
    rooms[0].connected = true;

    while let Some((ci, ui)) = closest_pair(rooms, &connected, &unconnected) {
        let from = connected[ci];
        let to = unconnected.remove(ui);

        let carved = dig_corridor(grid, rooms[from].center, rooms[to].center, corridor_width);
        debug!(from = rooms[from].id, to = rooms[to].id, carved, "dug corridor");

        rooms[to].connected = true;
        connected.push(to);
        edges.push((rooms[from].id, rooms[to].id));
    }

    edges
}
