/*
carving.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazerunner.

Mazerunner is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazerunner is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazerunner. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Carve a perfect maze with a randomized depth-first search.
//!
//! Starting from a random maze cell, the carver repeatedly takes the deepest cell of the
//! [`CarvingStack`], picks one of the directions in which the maze cell two tiles away is still a
//! wall, and carves both the passage and that cell.
//! A cell without any carvable direction is dropped from the stack, which backtracks to the
//! previous cell of the current path.
//! The carving ends when the stack is empty.
//!
//! Because a cell is only carved when it is still a wall, every maze cell is reached exactly
//! once and the carved tiles form a spanning tree over the maze cells.

use log::debug;

use super::grid::{Coordinate, Direction, Grid};
use super::random_source::RandomSource;
use super::tiles::TileKind;

/// Last-in-first-out stack of the maze cells on the current carving path.
#[derive(Debug, Default)]
pub struct CarvingStack {
    cells: Vec<Coordinate>,

    /// Largest number of cells the stack held.
    max_depth: usize,
}

impl CarvingStack {
    /// Create an empty [`CarvingStack`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell on top of the stack.
    pub fn push(&mut self, cell: Coordinate) {
        self.cells.push(cell);
        self.max_depth = self.max_depth.max(self.cells.len());
    }

    /// Remove and return the deepest cell.
    pub fn pop(&mut self) -> Option<Coordinate> {
        self.cells.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Statistics of a carving run.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CarveStats {
    /// Starting maze cell.
    pub start: Coordinate,

    /// Number of maze cells carved, including the starting cell.
    pub cells: usize,

    /// Number of cells dropped from the stack because they had no carvable direction left.
    pub backtracks: usize,

    /// Largest depth of the carving stack.
    pub max_depth: usize,
}

/// One carving step from a maze cell: the passage next to it and the maze cell behind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CarveMove {
    pub direction: Direction,
    pub passage: Coordinate,
    pub target: Coordinate,
}

/// Carving steps still possible from `cell`, in Up, Down, Left, Right order.
///
/// A step is possible when the maze cell two tiles away is not on, or beyond, the outside border
/// and is still a wall. The result is computed from the current grid every time because other
/// branches of the search may have carved the target since the last visit.
pub fn carvable_moves(grid: &Grid, cell: Coordinate) -> Vec<CarveMove> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            let passage: Coordinate = cell.step(direction, 1)?;
            let target: Coordinate = cell.step(direction, 2)?;
            let open: bool = grid.contains(target)
                && !grid.is_border(target)
                && grid.get(target) == Some(TileKind::Wall);
            open.then_some(CarveMove {
                direction,
                passage,
                target,
            })
        })
        .collect()
}

/// Carve the maze in the provided wall-filled grid.
pub fn carve(grid: &mut Grid, rng: &mut RandomSource) -> CarveStats {
    let mut stack: CarvingStack = CarvingStack::new();

    // Random odd position, inside the outside border
    let start: Coordinate = Coordinate::new(
        rng.range_inclusive(0, (grid.width() - 2) / 2) * 2 + 1,
        rng.range_inclusive(0, (grid.height() - 2) / 2) * 2 + 1,
    );
    debug!("Seed = {}  Starting cell = {start}", rng.seed());

    grid.set(start, TileKind::Floor);
    stack.push(start);

    let mut stats: CarveStats = CarveStats {
        start,
        cells: 1,
        ..CarveStats::default()
    };

    while let Some(cell) = stack.pop() {
        let carvable: Vec<CarveMove> = carvable_moves(grid, cell);

        // Exhausted cell: leave it off the stack to backtrack
        let Some(&step) = rng.choose(&carvable) else {
            stats.backtracks += 1;
            continue;
        };

        // The cell might have other directions to carve later
        stack.push(cell);

        grid.set(step.passage, TileKind::Floor);
        grid.set(step.target, TileKind::Floor);
        stack.push(step.target);
        stats.cells += 1;
    }
    debug_assert!(stack.is_empty());

    stats.max_depth = stack.max_depth();
    debug!(
        "Carved cells = {}  Backtracks = {}  Max depth = {}",
        stats.cells, stats.backtracks, stats.max_depth
    );
    stats
}
