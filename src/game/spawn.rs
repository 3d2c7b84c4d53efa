//! Placement of food and obstacles on free cells

use std::collections::HashSet;

use log::warn;
use rand::Rng;

use crate::basic::{Cell, GridDim};

/// Random picks tried before falling back to enumerating
/// every free cell
const MAX_ATTEMPTS: usize = 64;

/// Append up to `count` cells to `target`, none of which coincide
/// with `target` itself or any of the `excluded` sets. Returns the
/// number of cells actually placed, fewer than `count` only when
/// the board is full.
pub fn spawn(
    count: usize,
    target: &mut Vec<Cell>,
    excluded: &[&[Cell]],
    grid: GridDim,
    rng: &mut impl Rng,
) -> usize {
    let mut occupied: HashSet<Cell> = excluded
        .iter()
        .flat_map(|cells| cells.iter().copied())
        .chain(target.iter().copied())
        .collect();

    for placed in 0..count {
        let Some(cell) = random_free_cell(&occupied, grid, rng) else {
            warn!("board full, spawned {} of {} cells", placed, count);
            return placed;
        };
        occupied.insert(cell);
        target.push(cell);
    }
    count
}

pub fn random_free_cell(
    occupied: &HashSet<Cell>,
    grid: GridDim,
    rng: &mut impl Rng,
) -> Option<Cell> {
    for _ in 0..MAX_ATTEMPTS {
        let cell = grid.cell_at(rng.gen_range(0..grid.columns()), rng.gen_range(0..grid.rows()));
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }
    exhaustive_free_cell(occupied, grid, rng)
}

// pick the n-th free cell by skipping over occupied indices
fn exhaustive_free_cell(
    occupied: &HashSet<Cell>,
    grid: GridDim,
    rng: &mut impl Rng,
) -> Option<Cell> {
    let mut occupied_indices: Vec<usize> = occupied
        .iter()
        .filter(|cell| grid.contains(**cell))
        .map(|cell| grid.index_of(*cell))
        .collect();
    occupied_indices.sort_unstable();

    let free_cells = grid.cell_count() - occupied_indices.len();
    if free_cells == 0 {
        return None;
    }

    let mut new_idx = rng.gen_range(0..free_cells);
    for idx in occupied_indices {
        if idx <= new_idx {
            new_idx += 1;
        }
    }

    assert!(new_idx < grid.cell_count());
    Some(grid.cell_from_index(new_idx))
}
