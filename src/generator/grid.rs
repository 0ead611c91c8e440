/*
grid.rs

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

//! Rectangular tile grid of a maze.
//!
//! The grid is stored row by row: `rows[y][x]` is the tile at column `x` of row `y`.
//! Tiles at odd `x` and odd `y` are maze cells. Tiles with an even coordinate are either part of
//! the outside border or passages between two maze cells.

use std::fmt;

use super::tiles::TileKind;
use crate::error::{DimensionIssue, MazeError};

/// Position in the grid. `x` is the column and `y` the row.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Whether the position is a maze cell (odd column and odd row).
    pub const fn is_maze_cell(&self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }

    /// Position `steps` tiles away in the given direction, or [`None`] if it would leave the
    /// index space on the low side.
    pub fn step(&self, direction: Direction, steps: usize) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx * steps as isize)?;
        let y = self.y.checked_add_signed(dy * steps as isize)?;
        Some(Self { x, y })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four orthogonal directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Up, Down, Left, and Right, in this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Column and row deltas for one step in the direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// [`Grid`] object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<TileKind>>,
}

impl Grid {
    /// Validate the dimensions and create a grid filled with walls.
    ///
    /// # Errors
    ///
    /// The method returns [`MazeError::InvalidDimension`] when the width or the height is
    /// negative, even, or lower than 3. The checks are done in that order.
    pub fn new_walled(width: i32, height: i32) -> Result<Self, MazeError> {
        let invalid = |reason: DimensionIssue| MazeError::InvalidDimension {
            width,
            height,
            reason,
        };

        if width < 0 || height < 0 {
            return Err(invalid(DimensionIssue::Negative));
        }
        // The border needs odd dimensions so that the outermost maze cells are next to it
        if width % 2 == 0 || height % 2 == 0 {
            return Err(invalid(DimensionIssue::Even));
        }
        if width < 3 || height < 3 {
            return Err(invalid(DimensionIssue::TooSmall));
        }

        let width = width as usize;
        let height = height as usize;
        Ok(Self {
            width,
            height,
            rows: vec![vec![TileKind::Wall; width]; height],
        })
    }

    /// Build a grid from its text rendering (see the [`fmt::Display`] implementation).
    ///
    /// Return [`None`] if the text is empty, if the lines do not have the same length, or if a
    /// character does not map to a [`TileKind`].
    pub fn from_text(text: &str) -> Option<Self> {
        let rows: Vec<Vec<TileKind>> = text
            .lines()
            .map(|line| line.chars().map(TileKind::from_char).collect())
            .collect::<Option<_>>()?;
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            width,
            height: rows.len(),
            rows,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Tiles, row by row.
    pub fn rows(&self) -> &[Vec<TileKind>] {
        &self.rows
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Coordinate) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Tile at the given position, or [`None`] outside the grid.
    pub fn get(&self, pos: Coordinate) -> Option<TileKind> {
        self.rows.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    /// Change the tile at the given position. Positions outside the grid are ignored.
    pub fn set(&mut self, pos: Coordinate, kind: TileKind) {
        if let Some(tile) = self.rows.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            *tile = kind;
        }
    }

    /// Whether the position is on the outside border.
    pub fn is_border(&self, pos: Coordinate) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x + 1 == self.width || pos.y + 1 == self.height
    }

    /// Number of orthogonal neighbors of the position that are not walls.
    pub fn floor_neighbors(&self, pos: Coordinate) -> usize {
        Direction::ALL
            .iter()
            .filter_map(|d| pos.step(*d, 1))
            .filter(|p| self.get(*p).is_some_and(TileKind::is_walkable))
            .count()
    }

    /// Iterate over all the positions with their tile, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, TileKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, kind)| (Coordinate::new(x, y), *kind))
        })
    }

    /// Positions of all the tiles of the given kind, row by row.
    pub fn positions(&self, kind: TileKind) -> Vec<Coordinate> {
        self.iter()
            .filter(|(_, k)| *k == kind)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of tiles of the given kind.
    pub fn count(&self, kind: TileKind) -> usize {
        self.iter().filter(|(_, k)| *k == kind).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for tile in row {
                write!(f, "{}", tile.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(width: i32, height: i32) -> Option<DimensionIssue> {
        match Grid::new_walled(width, height) {
            Err(MazeError::InvalidDimension { reason, .. }) => Some(reason),
            _ => None,
        }
    }

    #[test]
    fn validation_order() {
        // Negative first, even when the value is also even or too small
        assert_eq!(reason(-3, 5), Some(DimensionIssue::Negative));
        assert_eq!(reason(-4, 5), Some(DimensionIssue::Negative));
        assert_eq!(reason(5, -1), Some(DimensionIssue::Negative));
        // Then parity
        assert_eq!(reason(4, 5), Some(DimensionIssue::Even));
        assert_eq!(reason(0, 5), Some(DimensionIssue::Even));
        assert_eq!(reason(5, 2), Some(DimensionIssue::Even));
        // Then the minimum size
        assert_eq!(reason(1, 5), Some(DimensionIssue::TooSmall));
        assert_eq!(reason(5, 1), Some(DimensionIssue::TooSmall));
        assert_eq!(reason(3, 3), None);
    }

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new_walled(7, 5).unwrap();
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.rows().len(), 5);
        assert!(grid.rows().iter().all(|row| row.len() == 7));
        assert_eq!(grid.count(TileKind::Wall), 35);
    }

    #[test]
    fn get_and_set() {
        let mut grid = Grid::new_walled(5, 5).unwrap();
        let pos = Coordinate::new(3, 1);
        grid.set(pos, TileKind::Floor);
        assert_eq!(grid.get(pos), Some(TileKind::Floor));
        assert_eq!(grid.rows()[1][3], TileKind::Floor);
        assert_eq!(grid.get(Coordinate::new(5, 0)), None);

        // Out of the grid: no effect, no panic
        grid.set(Coordinate::new(10, 10), TileKind::Floor);
        assert_eq!(grid.count(TileKind::Floor), 1);
    }

    #[test]
    fn border_and_neighbors() {
        let mut grid = Grid::new_walled(5, 5).unwrap();
        assert!(grid.is_border(Coordinate::new(0, 2)));
        assert!(grid.is_border(Coordinate::new(4, 2)));
        assert!(grid.is_border(Coordinate::new(2, 4)));
        assert!(!grid.is_border(Coordinate::new(1, 1)));

        for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2)] {
            grid.set(Coordinate::new(x, y), TileKind::Floor);
        }
        grid.set(Coordinate::new(1, 3), TileKind::Door);
        assert_eq!(grid.floor_neighbors(Coordinate::new(1, 1)), 2);
        assert_eq!(grid.floor_neighbors(Coordinate::new(3, 1)), 1);
        // Special tiles count as carved
        assert_eq!(grid.floor_neighbors(Coordinate::new(1, 2)), 2);
        // Corner of the grid: the missing neighbors are skipped
        assert_eq!(grid.floor_neighbors(Coordinate::new(0, 0)), 0);
    }

    #[test]
    fn coordinate_steps() {
        let c = Coordinate::new(1, 1);
        assert!(c.is_maze_cell());
        assert_eq!(c.step(Direction::Right, 2), Some(Coordinate::new(3, 1)));
        assert_eq!(c.step(Direction::Down, 1), Some(Coordinate::new(1, 2)));
        assert_eq!(c.step(Direction::Up, 2), None);
        assert!(!Coordinate::new(2, 1).is_maze_cell());
    }

    #[test]
    fn text_rendering() {
        let mut grid = Grid::new_walled(5, 3).unwrap();
        grid.set(Coordinate::new(1, 1), TileKind::Door);
        grid.set(Coordinate::new(2, 1), TileKind::Floor);
        grid.set(Coordinate::new(3, 1), TileKind::Key);
        let text = grid.to_string();
        assert_eq!(text, "#####\n#D K#\n#####\n");
        assert_eq!(Grid::from_text(&text), Some(grid));

        assert_eq!(Grid::from_text(""), None);
        assert_eq!(Grid::from_text("###\n##\n"), None);
        assert_eq!(Grid::from_text("#x#\n"), None);
    }
}
