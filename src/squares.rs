/*
 *  Cogs, a move generation engine for irregular chess variants.
 *  Copyright (C) 2024 ToTheAnd
 *
 *  Cogs is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  Cogs is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with Cogs. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::common::{DimT, file_to_char};
use derive_more::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::Add;

/// A board coordinate. `file` grows to the right, `rank` grows towards the second player,
/// so `a1` is `(0, 0)` from the first player's point of view.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[must_use]
pub struct Square {
    pub file: DimT,
    pub rank: DimT,
}

impl Square {
    pub const fn new(file: DimT, rank: DimT) -> Self {
        Self { file, rank }
    }

    pub const fn from_rank_file(rank: DimT, file: DimT) -> Self {
        Self { file, rank }
    }

    /// `a1` is `algebraic('a', 1)`, so ranks are 1-based as in chess notation.
    pub fn algebraic(file: char, rank: DimT) -> Self {
        Self::new(crate::common::char_to_file(file), rank - 1)
    }
}

impl Add<Offset> for Square {
    type Output = Square;

    fn add(self, rhs: Offset) -> Square {
        Square::new(self.file + rhs.dx, self.rank + rhs.dy)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.file) && self.rank >= 0 {
            write!(f, "{}{}", file_to_char(self.file), self.rank + 1)
        } else {
            // out-of-board coordinates can show up in debug output of raw offsets
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

/// A directional delta. Offsets compose with squares through addition and scale with `*`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Add, AddAssign, Sub, SubAssign, Neg, Mul)]
#[must_use]
pub struct Offset {
    pub dx: DimT,
    pub dy: DimT,
}

impl Offset {
    pub const fn new(dx: DimT, dy: DimT) -> Self {
        Self { dx, dy }
    }

    /// From the first player's point of view (the second player's forward is `-UP`).
    pub const UP: Offset = Offset::new(0, 1);
    pub const DOWN: Offset = Offset::new(0, -1);
    pub const LEFT: Offset = Offset::new(-1, 0);
    pub const RIGHT: Offset = Offset::new(1, 0);

    pub const ORTHOGONALS: [Offset; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];
    pub const DIAGONALS: [Offset; 4] =
        [Offset::new(1, 1), Offset::new(1, -1), Offset::new(-1, 1), Offset::new(-1, -1)];
    pub const KNIGHT_LEAPS: [Offset; 8] = [
        Offset::new(1, 2),
        Offset::new(2, 1),
        Offset::new(2, -1),
        Offset::new(1, -2),
        Offset::new(-1, -2),
        Offset::new(-2, -1),
        Offset::new(-2, 1),
        Offset::new(-1, 2),
    ];

    /// Mirrors the vertical component, which maps a first-player offset to the second player's version.
    pub const fn flip_up_down(self) -> Self {
        Self::new(self.dx, -self.dy)
    }

    /// Reduces each component to `-1`, `0` or `1`, preserving direction.
    pub fn unit(self) -> Self {
        Self::new(self.dx.signum(), self.dy.signum())
    }

    pub fn chebyshev_len(self) -> usize {
        self.dx.unsigned_abs().max(self.dy.unsigned_abs()) as usize
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[must_use]
pub struct GridSize {
    pub width: DimT,
    pub height: DimT,
}

impl GridSize {
    pub const fn new(width: DimT, height: DimT) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub const fn chess() -> Self {
        Self::new(8, 8)
    }

    pub const fn contains(self, sq: Square) -> bool {
        0 <= sq.file && sq.file < self.width && 0 <= sq.rank && sq.rank < self.height
    }

    pub const fn num_squares(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major over all coordinates, `a1` first.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        (0..self.height).flat_map(move |rank| (0..self.width).map(move |file| Square::new(file, rank)))
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
