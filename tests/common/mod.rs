/*
common/mod.rs

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

//! Checks shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use mazerunner::{Coordinate, Direction, Grid, TileKind};

/// Number of carved tiles reachable from the first carved tile, with 4-connectivity.
pub fn reachable(grid: &Grid) -> usize {
    let Some((first, _)) = grid.iter().find(|(_, k)| k.is_walkable()) else {
        return 0;
    };
    let mut seen: HashSet<Coordinate> = HashSet::from([first]);
    let mut queue: VecDeque<Coordinate> = VecDeque::from([first]);
    while let Some(pos) = queue.pop_front() {
        for d in Direction::ALL {
            if let Some(next) = pos.step(d, 1)
                && grid.get(next).is_some_and(TileKind::is_walkable)
                && seen.insert(next)
            {
                queue.push_back(next);
            }
        }
    }
    seen.len()
}

/// Number of carved tiles, special tiles included.
pub fn walkable(grid: &Grid) -> usize {
    grid.iter().filter(|(_, k)| k.is_walkable()).count()
}

/// Number of carved maze cells and of carved passages.
pub fn cells_and_passages(grid: &Grid) -> (usize, usize) {
    grid.iter()
        .filter(|(_, k)| k.is_walkable())
        .fold((0, 0), |(cells, passages), (pos, _)| {
            if pos.is_maze_cell() {
                (cells + 1, passages)
            } else {
                (cells, passages + 1)
            }
        })
}

/// Assert all the structural properties of a generated level.
pub fn assert_valid_level(grid: &Grid, width: usize, height: usize) {
    assert_eq!(grid.height(), height);
    assert_eq!(grid.rows().len(), height);
    assert_eq!(grid.width(), width);
    assert!(grid.rows().iter().all(|row| row.len() == width));

    for (pos, kind) in grid.iter() {
        if grid.is_border(pos) {
            assert_eq!(kind, TileKind::Wall, "border tile {pos} is not a wall");
        }
        // Both coordinates even: never carved
        if pos.x % 2 == 0 && pos.y % 2 == 0 {
            assert_eq!(kind, TileKind::Wall, "tile {pos} between passages is carved");
        }
    }

    for kind in TileKind::SPECIALS {
        assert_eq!(grid.count(kind), 1, "expected one {kind:?} tile");
    }

    // Connected and acyclic
    assert_eq!(reachable(grid), walkable(grid));
    let (cells, passages) = cells_and_passages(grid);
    assert_eq!(cells, passages + 1);
    // Every maze cell is carved
    assert_eq!(cells, (width / 2) * (height / 2));
}
