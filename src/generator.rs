/*
generator.rs

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

//! Generate random maze levels.
//!
//! A level is a [`grid::Grid`] of [`tiles::TileKind`] values.
//! You create a level by creating a [`maze::MazeGenerator`] object and by using its
//! [`maze::MazeGenerator::generate`] method, or by calling the [`maze::generate`] function.
//!
//! The generation runs in four steps:
//!
//! * [`grid::Grid::new_walled`] validates the dimensions and builds a grid full of walls.
//!
//! * [`carving::carve`] carves a perfect maze (exactly one path between any two floor tiles)
//!   with a randomized depth-first search.
//!
//! * [`topology::Topology::classify`] collects the dead-ends and the halls of the maze, which
//!   are then shuffled.
//!
//! * [`placement::place_special_tiles`] turns two halls into the start and key tiles, and two
//!   dead-ends into the door and chest tiles.
//!   If the maze is too small to provide these tiles, then an error is returned.
//!
//! All the random draws come from one [`random_source::RandomSource`] object created from the
//! seed, so the same dimensions and seed always produce the same level.

pub mod carving;
pub mod grid;
pub mod maze;
pub mod placement;
pub mod random_source;
pub mod tiles;
pub mod topology;
