/*
tiles.rs

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

//! Kinds of tiles in a maze grid.

use strum_macros::FromRepr;

/// Category of a maze tile.
///
/// - `Floor` and `Wall` are produced by the carving step.
/// - `Start`, `Door`, `Chest`, and `Key` are the special tiles placed on floor tiles after the
///   maze has been carved. Each of them appears exactly once in a generated maze.
///
/// The discriminant values are stable so that renderers can index sprite tables with them.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum TileKind {
    Floor = 0,
    #[default]
    Wall = 1,
    Start = 2,
    Door = 3,
    Chest = 4,
    Key = 5,
}

impl TileKind {
    /// All the tile kinds, in discriminant order.
    pub const ALL: [TileKind; 6] = [
        TileKind::Floor,
        TileKind::Wall,
        TileKind::Start,
        TileKind::Door,
        TileKind::Chest,
        TileKind::Key,
    ];

    /// The four special kinds, in placement order.
    pub const SPECIALS: [TileKind; 4] = [
        TileKind::Start,
        TileKind::Door,
        TileKind::Chest,
        TileKind::Key,
    ];

    /// Character used for the text rendering of the tile.
    pub const fn to_char(self) -> char {
        match self {
            TileKind::Floor => ' ',
            TileKind::Wall => '#',
            TileKind::Start => 'S',
            TileKind::Door => 'D',
            TileKind::Chest => 'C',
            TileKind::Key => 'K',
        }
    }

    /// Tile kind for a character of the text rendering, if any.
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.to_char() == c)
    }

    /// Whether the tile is one of the four special tiles.
    pub const fn is_special(self) -> bool {
        matches!(
            self,
            TileKind::Start | TileKind::Door | TileKind::Chest | TileKind::Key
        )
    }

    /// Whether the tile was carved, that is anything but a wall.
    pub const fn is_walkable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_are_stable() {
        for (i, kind) in TileKind::ALL.iter().enumerate() {
            assert_eq!(*kind as u8 as usize, i);
            assert_eq!(TileKind::from_repr(i as u8), Some(*kind));
        }
        assert_eq!(TileKind::from_repr(6), None);
    }

    #[test]
    fn glyphs_round_trip() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_char(kind.to_char()), Some(kind));
        }
        assert_eq!(TileKind::from_char('x'), None);
    }

    #[test]
    fn special_and_walkable() {
        assert!(!TileKind::Floor.is_special());
        assert!(!TileKind::Wall.is_special());
        assert!(TileKind::SPECIALS.iter().all(|k| k.is_special()));

        assert!(!TileKind::Wall.is_walkable());
        assert!(TileKind::Floor.is_walkable());
        assert!(TileKind::SPECIALS.iter().all(|k| k.is_walkable()));
    }
}
