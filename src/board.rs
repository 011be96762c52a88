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
use crate::moves::Move;
use crate::pieces::Piece;
use crate::squares::{GridSize, Square};
use crate::variants::Rules;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The full game state: a sparse square-to-piece mapping plus the move history.
/// One board belongs to exactly one game session; [`Board::play_move`] is the
/// sole operation that advances the game, everything else is setup or read access.
///
/// Rule evaluation only ever reads the board. The occupancy edits
/// ([`place_piece`](Board::place_piece) and friends) exist for setup and for
/// move application.
#[derive(Debug, Clone)]
#[must_use]
pub struct Board {
    size: GridSize,
    squares: HashMap<Square, Piece>,
    history: Vec<Move>,
}

impl Board {
    pub fn empty(size: GridSize) -> Self {
        Self { size, squares: HashMap::new(), history: vec![] }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn is_within_boundaries(&self, sq: Square) -> bool {
        self.size.contains(sq)
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares.get(&sq).copied()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        !self.squares.contains_key(&sq)
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares.contains_key(&sq)
    }

    /// Row-major over all coordinates, occupied or not.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        self.size.squares()
    }

    /// All occupied squares, in unspecified order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> {
        self.squares.iter().map(|(&sq, &piece)| (sq, piece))
    }

    pub fn num_pieces(&self) -> usize {
        self.squares.len()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn place_piece(&mut self, sq: Square, piece: Piece) {
        assert!(self.is_within_boundaries(sq), "placing a piece outside the {0} board: {sq}", self.size);
        assert!(self.is_empty(sq), "placing a piece on the occupied square {sq}");
        _ = self.squares.insert(sq, piece);
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares.remove(&sq)
    }

    pub fn modify_piece(&mut self, sq: Square, f: impl FnOnce(&mut Piece)) {
        let piece = self.squares.get_mut(&sq).unwrap_or_else(|| panic!("modifying the empty square {sq}"));
        f(piece);
    }

    /// The only operation that advances game state. The move must come from the
    /// current legal set; legality is *not* re-checked here (that is
    /// [`legal_moves`](crate::movegen::legal_moves)'s job). A move whose targets
    /// leave the board signals a defect in rule construction and panics before
    /// any mutation, so a failed application never leaves a half-applied board.
    pub fn play_move(&mut self, mov: Move) {
        self.validate_targets(&mov);
        // 1: the primary piece moves, implicitly replacing whatever sits on the target square
        let mut piece = self
            .remove_piece(mov.from)
            .unwrap_or_else(|| panic!("playing a move from the empty square {0}: {mov}", mov.from));
        piece.times_moved += 1;
        _ = self.squares.insert(mov.to, piece);
        // 2: captures are resolved against the board by position, not against the generation-time
        // snapshot. The occupant of `to` was already handled above, except when the mover captures
        // itself in place (`from == to`, e.g. beta decay), where the capture does remove the mover.
        for capture in &mov.captures {
            if capture.square == mov.to && mov.from != mov.to {
                continue;
            }
            _ = self.squares.remove(&capture.square);
        }
        // 3: secondary relocations, e.g. the castling rook
        for effect in &mov.side_effects {
            let piece = self
                .remove_piece(effect.from)
                .unwrap_or_else(|| panic!("side effect moves the empty square {0}: {mov}", effect.from));
            assert!(self.is_empty(effect.to), "side effect target {0} is occupied: {mov}", effect.to);
            _ = self.squares.insert(effect.to, piece);
        }
        // 4: promotion re-types the moved piece and resets its move counter
        if let Some(new_id) = mov.promotes_to {
            self.modify_piece(mov.to, |p| {
                p.id = new_id;
                p.times_moved = 0;
            });
        }
        // 5: spawned pieces appear last, on squares the rule already proved empty
        for spawn in &mov.spawns {
            self.place_piece(spawn.square, spawn.piece);
        }
        // 6: history is append-only
        self.history.push(mov);
    }

    /// All-or-nothing bounds validation, before the first mutation.
    fn validate_targets(&self, mov: &Move) {
        let check = |sq: Square, what: &str| {
            assert!(
                self.is_within_boundaries(sq),
                "move {mov} has {what} target {sq} outside the {0} board",
                self.size
            );
        };
        check(mov.from, "a source");
        check(mov.to, "a primary");
        for effect in &mov.side_effects {
            check(effect.from, "a side effect source");
            check(effect.to, "a side effect");
        }
        for spawn in &mov.spawns {
            check(spawn.square, "a spawn");
        }
    }

    /// An ASCII diagram, rendered with the variant's piece symbols.
    pub fn diagram<'a>(&'a self, rules: &'a Rules) -> BoardDiagram<'a> {
        BoardDiagram { board: self, rules }
    }
}

#[must_use]
pub struct BoardDiagram<'a> {
    board: &'a Board,
    rules: &'a Rules,
}

impl Display for BoardDiagram<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for rank in (0..self.board.size.height).rev() {
            for file in 0..self.board.size.width {
                let c = match self.board.piece_at(Square::new(file, rank)) {
                    Some(piece) => self.rules.piece(piece.id).symbol(piece.color),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Color, PieceId};

    fn piece(id: usize) -> Piece {
        Piece::new(PieceId::new(id), Some(Color::White))
    }

    #[test]
    fn occupancy_primitives() {
        let mut board = Board::empty(GridSize::chess());
        let sq = Square::algebraic('d', 4);
        assert!(board.is_empty(sq));
        board.place_piece(sq, piece(0));
        assert!(board.is_occupied(sq));
        assert_eq!(board.piece_at(sq).unwrap().id, PieceId::new(0));
        board.modify_piece(sq, |p| p.times_moved = 3);
        assert_eq!(board.piece_at(sq).unwrap().times_moved, 3);
        assert_eq!(board.remove_piece(sq), Some(Piece { times_moved: 3, ..piece(0) }));
        assert!(board.is_empty(sq));
        assert_eq!(board.squares().count(), 64);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn place_out_of_bounds_panics() {
        let mut board = Board::empty(GridSize::chess());
        board.place_piece(Square::new(8, 0), piece(0));
    }

    #[test]
    fn quiet_move_increments_counter_and_appends_history() {
        let mut board = Board::empty(GridSize::chess());
        let (from, to) = (Square::algebraic('e', 2), Square::algebraic('e', 4));
        board.place_piece(from, piece(0));
        board.play_move(Move::quiet(from, to, piece(0)));
        assert!(board.is_empty(from));
        assert_eq!(board.piece_at(to).unwrap().times_moved, 1);
        assert_eq!(board.history().len(), 1);
        assert_eq!(board.last_move().unwrap().to, to);
    }
}
