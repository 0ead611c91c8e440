/*
placement.rs

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

//! Place the special tiles on a classified maze.
//!
//! The player starts in a hall, the door and the chest are at the end of two different
//! dead-ends, and the key lies in another hall.

use log::debug;

use super::grid::{Coordinate, Grid};
use super::tiles::TileKind;
use super::topology::Topology;
use crate::error::MazeError;

/// Minimum number of dead-ends and of halls needed to place the special tiles.
const MIN_DEAD_ENDS: usize = 2;
const MIN_HALLS: usize = 2;

/// Positions of the special tiles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    pub start: Coordinate,
    pub door: Coordinate,
    pub chest: Coordinate,
    pub key: Coordinate,
}

impl Placement {
    /// Special tiles with their position, in placement order.
    pub fn tiles(&self) -> [(TileKind, Coordinate); 4] {
        [
            (TileKind::Start, self.start),
            (TileKind::Door, self.door),
            (TileKind::Chest, self.chest),
            (TileKind::Key, self.key),
        ]
    }
}

/// Place the start, door, chest, and key tiles, in that order.
///
/// Each tile takes the next element of the (already shuffled) hall or dead-end sequence of the
/// provided [`Topology`] object.
///
/// # Errors
///
/// The function returns [`MazeError::InsufficientTopology`] when the topology does not hold two
/// dead-ends and two halls. The grid is not modified in that case.
pub fn place_special_tiles(
    grid: &mut Grid,
    topology: &mut Topology,
) -> Result<Placement, MazeError> {
    let dead_ends: usize = topology.dead_ends().len();
    let halls: usize = topology.halls().len();
    if dead_ends < MIN_DEAD_ENDS || halls < MIN_HALLS {
        debug!("Cannot place the special tiles: {dead_ends} dead-ends, {halls} halls");
        return Err(MazeError::InsufficientTopology { dead_ends, halls });
    }

    let insufficient = MazeError::InsufficientTopology { dead_ends, halls };
    let start: Coordinate = topology.next_hall().ok_or(insufficient)?;
    let door: Coordinate = topology.next_dead_end().ok_or(insufficient)?;
    let chest: Coordinate = topology.next_dead_end().ok_or(insufficient)?;
    let key: Coordinate = topology.next_hall().ok_or(insufficient)?;

    let placement: Placement = Placement {
        start,
        door,
        chest,
        key,
    };
    for (kind, pos) in placement.tiles() {
        debug_assert_eq!(grid.get(pos), Some(TileKind::Floor));
        grid.set(pos, kind);
        debug!("{kind:?} at {pos}");
    }
    Ok(placement)
}
