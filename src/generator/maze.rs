/*
maze.rs

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

//! Generate a random maze level.

use log::{Level, debug, log_enabled};
use std::time::Instant;

use super::carving::{self, CarveStats};
use super::grid::Grid;
use super::placement::{self, Placement};
use super::random_source::RandomSource;
use super::topology::Topology;
use crate::error::MazeError;

/// Default number of columns of a level.
pub const DEFAULT_WIDTH: i32 = 21;

/// Default number of rows of a level.
pub const DEFAULT_HEIGHT: i32 = 15;

/// A generated maze: the grid and the positions of its special tiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maze {
    pub grid: Grid,
    pub placement: Placement,
}

/// [`MazeGenerator`] object.
pub struct MazeGenerator {
    pub width: i32,
    pub height: i32,
    pub seed: u64,

    /// Carving statistics of the last generated maze.
    pub carve_stats: CarveStats,

    /// Number of dead-ends found in the last carved maze, before placing the special tiles.
    pub dead_ends: usize,

    /// Number of halls found in the last carved maze, before placing the special tiles.
    pub halls: usize,

    /// Duration in seconds it took to generate the last maze.
    pub duration: f32,
}

impl MazeGenerator {
    /// Create the object.
    pub fn new(width: i32, height: i32, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            carve_stats: CarveStats::default(),
            dead_ends: 0,
            halls: 0,
            duration: 0.0,
        }
    }

    /// Generate and return a maze.
    ///
    /// The same width, height, and seed always produce the same maze.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::InvalidDimension`] if the dimensions are not valid, and
    /// [`MazeError::InsufficientTopology`] if the maze is too small for the special tiles (3x3,
    /// 3x5, and 5x3 mazes). No grid is returned in both cases.
    pub fn generate(&mut self) -> Result<Maze, MazeError> {
        let start: Instant = Instant::now();
        self.carve_stats = CarveStats::default();
        self.dead_ends = 0;
        self.halls = 0;

        debug!(
            "Generating {}x{} maze with seed {}",
            self.width, self.height, self.seed
        );
        let mut grid: Grid = Grid::new_walled(self.width, self.height)?;
        let mut rng: RandomSource = RandomSource::new(self.seed);

        self.carve_stats = carving::carve(&mut grid, &mut rng);

        let mut topology: Topology = Topology::classify(&grid);
        self.dead_ends = topology.dead_ends().len();
        self.halls = topology.halls().len();
        topology.shuffle(&mut rng);

        let res: Result<Placement, MazeError> =
            placement::place_special_tiles(&mut grid, &mut topology);
        self.duration = start.elapsed().as_secs_f32();
        debug!("Duration = {}", self.duration);

        let placement: Placement = res?;
        if log_enabled!(Level::Debug) {
            for line in grid.to_string().lines() {
                debug!("{line}");
            }
        }
        Ok(Maze { grid, placement })
    }
}

/// Generate a maze grid of the given size from the given seed.
///
/// # Errors
///
/// See [`MazeGenerator::generate`].
pub fn generate(width: i32, height: i32, seed: u64) -> Result<Grid, MazeError> {
    MazeGenerator::new(width, height, seed)
        .generate()
        .map(|maze| maze.grid)
}
