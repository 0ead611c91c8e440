/*
lib.rs

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

//! Procedural maze levels for Mazerunner.
//!
//! See [`generator`] for a description of the generation steps.
//! The rendering of the levels is not part of this crate: renderers receive the finished
//! [`Grid`] and map every [`TileKind`] to a sprite.

pub mod error;
pub mod generator;

pub use error::{DimensionIssue, MazeError};
pub use generator::grid::{Coordinate, Direction, Grid};
pub use generator::maze::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Maze, MazeGenerator, generate};
pub use generator::placement::Placement;
pub use generator::tiles::TileKind;
