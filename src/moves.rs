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
use crate::pieces::{Piece, PieceId};
use crate::squares::Square;
use std::fmt;
use std::fmt::{Display, Formatter};
use strum_macros::{Display as StrumDisplay, EnumIter};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, StrumDisplay, EnumIter)]
#[must_use]
pub enum CastleSide {
    Kingside,
    Queenside,
    Vertical,
}

/// Identifies which named variant mechanic produced a move.
/// Downstream consumers (UI highlighting, quest tracking) switch on this;
/// move application does not.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, StrumDisplay)]
#[must_use]
pub enum MoveKind {
    #[default]
    Normal,
    EnPassant,
    Castle(CastleSide),
    CheckerJump,
    KnooklearFusion,
    BetaDecay,
    /// An in-place activation, `from == to` (e.g. splitting a piece).
    Activate,
}

/// Forced-move precedence band. If any candidate of the side to move carries a
/// priority, only the moves of the highest band present stay legal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[must_use]
pub struct ForcedPriority(pub u8);

/// One captured square. The piece is a snapshot taken at generation time for
/// display purposes; application re-reads the board by position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[must_use]
pub struct MoveCapture {
    pub square: Square,
    pub piece: Piece,
}

/// A secondary piece relocation bundled into the same move, like the rook
/// moving during castling.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[must_use]
pub struct SideEffect {
    pub from: Square,
    pub to: Square,
}

/// A piece created on the board as part of a move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[must_use]
pub struct PieceSpawn {
    pub square: Square,
    pub piece: Piece,
}

/// A chained-jump waypoint: where the piece touched down, and whether that hop captured.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[must_use]
pub struct Waypoint {
    pub square: Square,
    pub is_capture: bool,
}

/// A fully resolved, ready-to-apply transition. Created by rule evaluation,
/// consumed exactly once by [`Board::play_move`](crate::board::Board::play_move),
/// after which it becomes part of immutable history.
///
/// Unlike engines that search, this core never packs moves into a few bits;
/// the move simply carries its complete effect list.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[must_use]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Snapshot of the moving piece at generation time.
    pub piece: Piece,
    pub captures: Vec<MoveCapture>,
    /// Squares the move passes through, for highlighting and animation.
    pub trigger_squares: Vec<Square>,
    /// Chained-jump waypoints, in hop order; the last one equals `to`.
    pub intermediates: Vec<Waypoint>,
    pub side_effects: Vec<SideEffect>,
    pub spawns: Vec<PieceSpawn>,
    pub promotes_to: Option<PieceId>,
    pub kind: MoveKind,
    pub forced_priority: Option<ForcedPriority>,
}

impl Move {
    pub fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captures: vec![],
            trigger_squares: vec![],
            intermediates: vec![],
            side_effects: vec![],
            spawns: vec![],
            promotes_to: None,
            kind: MoveKind::Normal,
            forced_priority: None,
        }
    }

    pub fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        let mut res = Self::quiet(from, to, piece);
        res.captures.push(MoveCapture { square: to, piece: captured });
        res
    }

    pub fn with_kind(mut self, kind: MoveKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }

    pub fn captures_square(&self, square: Square) -> bool {
        self.captures.iter().any(|c| c.square == square)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.from, if self.is_capture() { "x" } else { "" }, self.to)?;
        match self.kind {
            MoveKind::Normal => Ok(()),
            MoveKind::Castle(side) => write!(f, " ({side})"),
            kind => write!(f, " ({kind})"),
        }
    }
}
