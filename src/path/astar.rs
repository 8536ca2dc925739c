//! A* search over the obstacle occupancy mask.
//!
//! Unit edge cost with the Manhattan heuristic, which is admissible and
//! consistent on a uniform-cost grid, so the first pop of the goal is
//! optimal. Equal-priority queue entries pop in insertion order (a FIFO
//! sequence number breaks ties), making results deterministic for
//! identical input.
//!
//! The endpoints themselves are never tested against the mask; only
//! cells being expanded into are. An agent standing next to a wall can
//! still ask for distances from its own cell.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;

use super::Distance;
use crate::core::Cell;
use crate::world::GridWorld;

/// Heap entry: f-score first, then FIFO sequence for determinism.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    seq: u32,
    cell: Cell,
}

/// Shortest-path distance between two cells under the world's committed
/// obstacles.
#[must_use]
pub fn distance(world: &GridWorld, from: Cell, to: Cell) -> Distance {
    distance_over(world.blocked(), world.size(), from, to)
}

/// Shortest-path distance against a caller-supplied occupancy overlay.
///
/// Used by the opponent policy to probe speculative placements without
/// committing them.
#[must_use]
pub fn distance_over(blocked: &ImHashSet<Cell>, size: i16, from: Cell, to: Cell) -> Distance {
    match search(blocked, size, from, to) {
        Some((cost, _)) => Distance::Steps(cost),
        None => Distance::Unreachable,
    }
}

/// Shortest path from `from` to `to` inclusive, or empty if unreachable.
/// `path(a, a)` is `[a]`.
#[must_use]
pub fn path(world: &GridWorld, from: Cell, to: Cell) -> Vec<Cell> {
    if from == to {
        return vec![from];
    }
    match search(world.blocked(), world.size(), from, to) {
        Some((_, came_from)) => reconstruct(&came_from, from, to),
        None => Vec::new(),
    }
}

fn search(
    blocked: &ImHashSet<Cell>,
    size: i16,
    from: Cell,
    to: Cell,
) -> Option<(u32, FxHashMap<Cell, Cell>)> {
    if !in_bounds(size, from) || !in_bounds(size, to) {
        return None;
    }
    if from == to {
        return Some((0, FxHashMap::default()));
    }

    let mut open = BinaryHeap::new();
    let mut g_score: FxHashMap<Cell, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Cell, Cell> = FxHashMap::default();
    let mut seq = 0u32;

    g_score.insert(from, 0);
    open.push(Reverse(OpenNode {
        f: from.manhattan(to),
        seq,
        cell: from,
    }));

    while let Some(Reverse(node)) = open.pop() {
        let current = node.cell;
        if current == to {
            return Some((g_score[&current], came_from));
        }

        let current_g = g_score[&current];
        // Stale heap entry for a cell already reached more cheaply.
        if node.f > current_g + current.manhattan(to) {
            continue;
        }

        for neighbor in current.neighbors() {
            if !in_bounds(size, neighbor) {
                continue;
            }
            // The goal is exempt from the mask; everything else expanded
            // into must be clear.
            if neighbor != to && blocked.contains(&neighbor) {
                continue;
            }

            let tentative = current_g + 1;
            if tentative < g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                g_score.insert(neighbor, tentative);
                came_from.insert(neighbor, current);
                seq += 1;
                open.push(Reverse(OpenNode {
                    f: tentative + neighbor.manhattan(to),
                    seq,
                    cell: neighbor,
                }));
            }
        }
    }

    None
}

fn in_bounds(size: i16, cell: Cell) -> bool {
    (0..size).contains(&cell.row) && (0..size).contains(&cell.col)
}

fn reconstruct(came_from: &FxHashMap<Cell, Cell>, from: Cell, to: Cell) -> Vec<Cell> {
    let mut cells = vec![to];
    let mut current = to;
    while current != from {
        match came_from.get(&current) {
            Some(&prev) => {
                cells.push(prev);
                current = prev;
            }
            // Goal was never linked back to the start; no path.
            None => return Vec::new(),
        }
    }
    cells.reverse();
    cells
}
