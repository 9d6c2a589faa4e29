/*
direction.rs

Copyright 2025 Hervé Quatremain

This file is part of Mazegen.

Mazegen is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Mazegen is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Mazegen. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Directions in the maze and their bit encoding.
//!
//! Each direction is a single bit of the 4-bit direction mask stored in every maze cell.
//! The opposite direction is obtained by rotating the bit by two positions inside the 4-bit
//! field.

use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

/// Mask with the four direction bits set.
pub const ALL_DIRECTIONS: u8 = 0b1111;

/// Direction from a cell to one of its four neighbors.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum Direction {
    North = 0b0001,
    East = 0b0010,
    South = 0b0100,
    West = 0b1000,
}

impl Direction {
    /// Directions in enumeration order. The carver shuffles this list for every cell.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Order in which the solver tries the open directions of a cell.
    pub const SOLVE_ORDER: [Direction; 4] = [
        Direction::West,
        Direction::South,
        Direction::East,
        Direction::North,
    ];

    /// Bit of the direction in the cell direction mask.
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Retrieve the direction for a single bit of the direction mask.
    pub fn from_bit(bit: u8) -> Option<Self> {
        Self::from_repr(bit)
    }

    /// Opposite direction (North <-> South, East <-> West).
    pub fn opposite(self) -> Self {
        let b: u8 = self.bit();
        let rotated: u8 = ((b << 2) | (b >> 2)) & ALL_DIRECTIONS;
        // The rotation of a single bit is always a single bit
        Self::from_bit(rotated).unwrap_or(self)
    }

    /// Row and column offsets to the neighbor in that direction.
    ///
    /// Rows grow from top to bottom, so North is `(-1, 0)`.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// List the directions set in the given mask, in [`Direction::ALL`] order.
pub fn directions_in(mask: u8) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .filter(|d| mask & d.bit() != 0)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_a_two_bit_rotation() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::West.opposite(), Direction::East);
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn bits_are_distinct_and_fill_the_mask() {
        let mask: u8 = Direction::ALL.iter().fold(0, |m, d| m | d.bit());
        assert_eq!(mask, ALL_DIRECTIONS);
        assert_eq!(Direction::from_bit(0b0100), Some(Direction::South));
        assert_eq!(Direction::from_bit(0b0011), None);
        assert_eq!(Direction::from_bit(0), None);
    }

    #[test]
    fn offsets_cancel_with_the_opposite_direction() {
        for d in Direction::ALL {
            let (dr, dc) = d.offset();
            let (or, oc) = d.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn mask_lists_directions_in_enumeration_order() {
        assert_eq!(
            directions_in(0b1010),
            vec![Direction::East, Direction::West]
        );
        assert!(directions_in(0).is_empty());
    }
}
