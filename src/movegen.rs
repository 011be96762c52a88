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

use crate::board::Board;
use crate::moves::Move;
use crate::pieces::Color;
use crate::squares::Square;
use crate::variants::Rules;
use itertools::Itertools;

/// All candidate moves of the piece on `from`, deduplicated. Overlapping rules
/// (a queen slide and a beta decay, say) may emit the same move twice; exact
/// duplicates are dropped, distinct moves to the same square are all kept.
/// An empty square yields no moves.
pub fn moves_for_piece(rules: &Rules, pos: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = pos.piece_at(from) else { return vec![] };
    rules
        .piece(piece.id)
        .moves
        .iter()
        .flat_map(|rule| rule.evaluate(pos, from, &piece))
        .unique()
        .collect()
}

/// The legal moves of `side`, after forced-move resolution. The occupied
/// squares are visited in `(rank, file)` order, so the output is deterministic
/// for a given position regardless of how it was built up.
///
/// Neutral pieces are skipped here; to move one, the caller decides who
/// controls it and asks [`moves_for_piece`] directly.
pub fn legal_moves(rules: &Rules, pos: &Board, side: Color) -> Vec<Move> {
    let mut occupied = pos.pieces().collect_vec();
    occupied.sort_unstable_by_key(|(sq, _)| (sq.rank, sq.file));
    let moves = occupied
        .into_iter()
        .filter(|(_, piece)| piece.owned_by(side))
        .flat_map(|(sq, _)| moves_for_piece(rules, pos, sq))
        .collect();
    resolve_forced(moves)
}

/// If any move carries a forced priority, only the moves of the highest
/// priority band present survive. With no forced moves, this is the identity.
pub fn resolve_forced(moves: Vec<Move>) -> Vec<Move> {
    let Some(max) = moves.iter().filter_map(|m| m.forced_priority).max() else {
        return moves;
    };
    moves.into_iter().filter(|m| m.forced_priority == Some(max)).collect()
}
