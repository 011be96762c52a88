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
use crate::rules::MoveRule;
use strum_macros::{Display, EnumIter};

pub const NUM_COLORS: usize = 2;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Display, EnumIter)]
#[must_use]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn idx(self) -> usize {
        self as usize
    }
}

/// An index into the variant's piece table. The set of piece types is open:
/// each variant registers its own table, so an id only means something together
/// with the [`Rules`](crate::variants::Rules) it was created for.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[must_use]
pub struct PieceId(u8);

impl PieceId {
    pub const fn new(val: usize) -> Self {
        Self(val as u8)
    }

    pub const fn val(self) -> usize {
        self.0 as usize
    }
}

/// One physical unit on the board. Pieces are values, not identities:
/// "moving" a piece removes it from one square and places an equivalent piece
/// (with an incremented counter, possibly re-typed) on another.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[must_use]
pub struct Piece {
    pub id: PieceId,
    /// `None` means a neutral piece, owned by neither side.
    pub color: Option<Color>,
    pub times_moved: u32,
}

impl Piece {
    pub const fn new(id: PieceId, color: Option<Color>) -> Self {
        Self { id, color, times_moved: 0 }
    }

    pub const fn white(id: PieceId) -> Self {
        Self::new(id, Some(Color::White))
    }

    pub const fn black(id: PieceId) -> Self {
        Self::new(id, Some(Color::Black))
    }

    pub const fn neutral(id: PieceId) -> Self {
        Self::new(id, None)
    }

    pub const fn is_neutral(self) -> bool {
        self.color.is_none()
    }

    pub fn owned_by(self, color: Color) -> bool {
        self.color == Some(color)
    }

    /// Neutral pieces are enemies of no one.
    pub fn is_enemy_of(self, other: Piece) -> bool {
        match (self.color, other.color) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    pub fn is_friend_of(self, other: Piece) -> bool {
        match (self.color, other.color) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// The declarative definition of a single piece type: a name, display symbols,
/// and the ordered list of movement rules evaluated for it. Building these
/// tables is the job of the [`variants`](crate::variants) module; nothing in
/// here is consulted during rule evaluation itself.
#[derive(Debug, Clone)]
#[must_use]
pub struct PieceInfo {
    pub name: String,
    /// Piece types that never belong to a player (control is decided externally).
    pub uncolored: bool,
    /// Ascii symbol per color, uppercase for the first player.
    pub player_symbol: [char; NUM_COLORS],
    pub uncolored_symbol: char,
    /// Evaluated in order; rules may overlap, the generator deduplicates.
    pub moves: Vec<Box<dyn MoveRule>>,
}

impl PieceInfo {
    pub fn new(name: &str, ascii_char: char, moves: Vec<Box<dyn MoveRule>>) -> Self {
        let lower = ascii_char.to_ascii_lowercase();
        let upper = ascii_char.to_ascii_uppercase();
        Self {
            name: name.to_string(),
            uncolored: false,
            player_symbol: [upper, lower],
            uncolored_symbol: upper,
            moves,
        }
    }

    pub fn new_uncolored(name: &str, ascii_char: char, moves: Vec<Box<dyn MoveRule>>) -> Self {
        let mut res = Self::new(name, ascii_char, moves);
        res.uncolored = true;
        res
    }

    pub fn symbol(&self, color: Option<Color>) -> char {
        match color {
            Some(c) => self.player_symbol[c.idx()],
            None => self.uncolored_symbol,
        }
    }
}
