/*
topology.rs

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

//! Classify the floor tiles of a carved maze.
//!
//! - a dead-end is a floor tile with exactly one floor neighbor.
//! - a hall is a floor tile with two or more floor neighbors (corridor or junction).
//!
//! Passages are floor tiles too, and are classified like the maze cells.

use log::debug;

use super::grid::{Coordinate, Grid};
use super::random_source::RandomSource;
use super::tiles::TileKind;

/// Dead-ends and halls of a carved maze.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    dead_ends: Vec<Coordinate>,
    halls: Vec<Coordinate>,

    /// Floor tiles without any floor neighbor. Only the single-cell maze has one.
    isolated: usize,
}

impl Topology {
    /// Scan the grid, row by row, and sort its floor tiles into dead-ends and halls.
    pub fn classify(grid: &Grid) -> Self {
        let mut topology: Topology = Topology::default();

        for (pos, kind) in grid.iter() {
            if kind != TileKind::Floor {
                continue;
            }
            match grid.floor_neighbors(pos) {
                0 => topology.isolated += 1,
                1 => topology.dead_ends.push(pos),
                _ => topology.halls.push(pos),
            }
        }

        debug!(
            "Dead-ends = {}  Halls = {}  Isolated = {}",
            topology.dead_ends.len(),
            topology.halls.len(),
            topology.isolated
        );
        topology
    }

    /// Randomly order the dead-ends and the halls, each independently.
    ///
    /// Taking the elements one by one afterward samples them uniformly without replacement.
    pub fn shuffle(&mut self, rng: &mut RandomSource) {
        rng.shuffle(&mut self.dead_ends);
        rng.shuffle(&mut self.halls);
    }

    /// Remove and return the next dead-end.
    pub fn next_dead_end(&mut self) -> Option<Coordinate> {
        self.dead_ends.pop()
    }

    /// Remove and return the next hall.
    pub fn next_hall(&mut self) -> Option<Coordinate> {
        self.halls.pop()
    }

    /// Remaining dead-ends.
    pub fn dead_ends(&self) -> &[Coordinate] {
        &self.dead_ends
    }

    /// Remaining halls.
    pub fn halls(&self) -> &[Coordinate] {
        &self.halls
    }

    pub fn isolated(&self) -> usize {
        self.isolated
    }
}
