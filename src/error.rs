/*
error.rs

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

//! Errors returned by the maze generator.

use thiserror::Error;

/// Reason why the requested dimensions were rejected.
///
/// The checks are done in the order of the variants: a negative and even width is reported as
/// `Negative`.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DimensionIssue {
    #[error("width and height must be positive")]
    Negative,

    #[error("width and height must be odd")]
    Even,

    #[error("width and height must be greater or equal to 3")]
    TooSmall,
}

/// Type of errors.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The width or the height cannot hold a maze. No grid is built.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimension {
        width: i32,
        height: i32,
        reason: DimensionIssue,
    },

    /// The carved maze has fewer than two dead-ends or fewer than two halls, so the special
    /// tiles cannot all be placed.
    #[error(
        "not enough dead-ends ({dead_ends}) or halls ({halls}) to place the special tiles (2 of each needed)"
    )]
    InsufficientTopology { dead_ends: usize, halls: usize },
}
