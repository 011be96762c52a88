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

//! Scenario tests for the anarchy variant, where all the irregular mechanics
//! are wired up at once.

use super::{id, sq};
use crate::board::Board;
use crate::movegen::{legal_moves, moves_for_piece};
use crate::moves::{CastleSide, Move, MoveKind};
use crate::pieces::{Color, Piece};
use crate::variants::Rules;

#[test]
fn unmoved_pawns_may_push_three_squares() {
    let rules = Rules::anarchy();
    let pos = rules.startpos();
    let pushes: Vec<Move> = moves_for_piece(&rules, &pos, sq("e2"))
        .into_iter()
        .filter(|m| !m.is_capture())
        .collect();
    assert_eq!(pushes.len(), 3);
    assert!(pushes.iter().any(|m| m.to == sq("e5")));
    // after the first move the pawn is back to single steps
    let mut pos = Board::empty(rules.size);
    let mut pawn = Piece::white(id(&rules, "pawn"));
    pawn.times_moved = 1;
    pos.place_piece(sq("e4"), pawn);
    let moves = moves_for_piece(&rules, &pos, sq("e4"));
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to, sq("e5"));
}

#[test]
fn en_passant_is_forced() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("e5"), Piece::white(id(&rules, "pawn")));
    pos.place_piece(sq("a1"), Piece::white(id(&rules, "rook")));
    pos.place_piece(sq("d7"), Piece::black(id(&rules, "pawn")));
    pos.play_move(Move::quiet(sq("d7"), sq("d5"), Piece::black(id(&rules, "pawn"))));
    let moves = legal_moves(&rules, &pos, Color::White);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.kind == MoveKind::EnPassant), "{moves:?}");
}

#[test]
fn en_passant_chains_through_stacked_pawns() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("e5"), Piece::white(id(&rules, "pawn")));
    pos.place_piece(sq("d7"), Piece::black(id(&rules, "pawn")));
    pos.place_piece(sq("c6"), Piece::black(id(&rules, "pawn")));
    pos.play_move(Move::quiet(sq("d7"), sq("d5"), Piece::black(id(&rules, "pawn"))));
    let moves = moves_for_piece(&rules, &pos, sq("e5"));
    let ep: Vec<&Move> = moves.iter().filter(|m| m.kind == MoveKind::EnPassant).collect();
    assert_eq!(ep.len(), 2);
    let long = ep.iter().find(|m| m.to == sq("c7")).unwrap();
    assert!(long.captures_square(sq("d5")));
    assert!(long.captures_square(sq("c6")));
    assert!(ep.iter().any(|m| m.to == sq("d6") && m.captures.len() == 1));
}

#[test]
fn checker_jumps_chain_and_capture_along_their_own_path() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("a1"), Piece::white(id(&rules, "checker")));
    pos.place_piece(sq("b2"), Piece::black(id(&rules, "pawn")));
    pos.place_piece(sq("b4"), Piece::black(id(&rules, "pawn")));
    let moves = moves_for_piece(&rules, &pos, sq("a1"));
    let jumps: Vec<&Move> = moves.iter().filter(|m| m.kind == MoveKind::CheckerJump).collect();
    assert_eq!(jumps.len(), 2);
    let chain = jumps.iter().find(|m| m.to == sq("a5")).unwrap();
    assert!(chain.captures_square(sq("b2")));
    assert!(chain.captures_square(sq("b4")));
    assert_eq!(chain.intermediates.last().unwrap().square, sq("a5"));
    // captures only ever come from squares the chain itself jumped over
    for jump in &jumps {
        assert!(jump.captures.iter().all(|c| jump.trigger_squares.contains(&c.square)));
    }
    pos.play_move((*chain).clone());
    assert!(pos.is_empty(sq("b2")));
    assert!(pos.is_empty(sq("b4")));
    assert_eq!(pos.piece_at(sq("a5")).unwrap().id, id(&rules, "checker"));
}

#[test]
fn checker_jumps_take_friends_too_and_are_forced() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("c3"), Piece::white(id(&rules, "checker")));
    pos.place_piece(sq("d4"), Piece::white(id(&rules, "pawn")));
    pos.place_piece(sq("a1"), Piece::white(id(&rules, "rook")));
    let moves = legal_moves(&rules, &pos, Color::White);
    assert!(moves.iter().all(|m| m.kind == MoveKind::CheckerJump));
    assert!(moves.iter().any(|m| m.to == sq("e5") && m.captures_square(sq("d4"))));
}

#[test]
fn capturing_an_own_knight_fuses_into_a_knook() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("a1"), Piece::white(id(&rules, "rook")));
    pos.place_piece(sq("a4"), Piece::white(id(&rules, "knight")));
    pos.place_piece(sq("b3"), Piece::white(id(&rules, "pawn")));
    pos.place_piece(sq("b5"), Piece::black(id(&rules, "pawn")));
    let moves = moves_for_piece(&rules, &pos, sq("a1"));
    // enemy pieces do not trigger fusion, and own non-knights still block
    assert!(moves.iter().all(|m| m.to != sq("a5")));
    let fusion = moves.iter().find(|m| m.kind == MoveKind::KnooklearFusion).cloned().unwrap();
    assert_eq!(fusion.to, sq("a4"));
    assert_eq!(fusion.promotes_to, Some(id(&rules, "knook")));
    // the explosion takes every neighbor of the destination, friend and foe
    assert!(fusion.captures_square(sq("a4")));
    assert!(fusion.captures_square(sq("b3")));
    assert!(fusion.captures_square(sq("b5")));
    pos.play_move(fusion);
    assert_eq!(pos.piece_at(sq("a4")).unwrap().id, id(&rules, "knook"));
    assert_eq!(pos.piece_at(sq("a4")).unwrap().times_moved, 0);
    assert!(pos.is_empty(sq("b3")));
    assert!(pos.is_empty(sq("b5")));
    assert_eq!(pos.num_pieces(), 1);
}

#[test]
fn knooks_can_activate_in_place() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("d4"), Piece::white(id(&rules, "knook")));
    let moves = moves_for_piece(&rules, &pos, sq("d4"));
    let activate = moves.iter().find(|m| m.kind == MoveKind::Activate).unwrap();
    assert_eq!(activate.from, activate.to);
    // rook and knight geometry coexist
    assert!(moves.iter().any(|m| m.to == sq("d8")));
    assert!(moves.iter().any(|m| m.to == sq("e6")));
}

#[test]
fn beta_decay_is_all_or_nothing() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("d4"), Piece::white(id(&rules, "queen")));
    let decay = moves_for_piece(&rules, &pos, sq("d4"))
        .into_iter()
        .find(|m| m.kind == MoveKind::BetaDecay)
        .unwrap();
    assert_eq!(decay.from, decay.to);
    assert!(decay.captures_square(sq("d4")));
    assert_eq!(decay.spawns.len(), 3);
    pos.play_move(decay);
    assert!(pos.is_empty(sq("d4")));
    assert_eq!(pos.piece_at(sq("c4")).unwrap().id, id(&rules, "rook"));
    assert_eq!(pos.piece_at(sq("e4")).unwrap().id, id(&rules, "bishop"));
    assert_eq!(pos.piece_at(sq("d5")).unwrap().id, id(&rules, "knight"));
    assert!(pos.pieces().all(|(_, p)| p.owned_by(Color::White)));
    // a single blocked spawn square suppresses the decay entirely
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("d4"), Piece::white(id(&rules, "queen")));
    pos.place_piece(sq("e4"), Piece::black(id(&rules, "pawn")));
    let moves = moves_for_piece(&rules, &pos, sq("d4"));
    assert!(moves.iter().all(|m| m.kind != MoveKind::BetaDecay));
    assert!(moves.iter().any(|m| m.captures_square(sq("e4"))));
}

#[test]
fn castling_may_capture_an_own_bishop_in_the_way() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("e1"), Piece::white(id(&rules, "king")));
    pos.place_piece(sq("h1"), Piece::white(id(&rules, "rook")));
    pos.place_piece(sq("f1"), Piece::white(id(&rules, "bishop")));
    let castle = moves_for_piece(&rules, &pos, sq("e1"))
        .into_iter()
        .find(|m| m.kind == MoveKind::Castle(CastleSide::Kingside))
        .unwrap();
    assert!(castle.captures_square(sq("f1")));
    pos.play_move(castle);
    assert_eq!(pos.piece_at(sq("g1")).unwrap().id, id(&rules, "king"));
    assert_eq!(pos.piece_at(sq("f1")).unwrap().id, id(&rules, "rook"));
    assert_eq!(pos.num_pieces(), 2);
}

#[test]
fn vertical_castling_needs_an_unmoved_rook_at_the_far_end() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("e1"), Piece::white(id(&rules, "king")));
    pos.place_piece(sq("e8"), Piece::white(id(&rules, "rook")));
    let castle = moves_for_piece(&rules, &pos, sq("e1"))
        .into_iter()
        .find(|m| m.kind == MoveKind::Castle(CastleSide::Vertical))
        .unwrap();
    assert_eq!(castle.to, sq("e3"));
    pos.play_move(castle);
    assert_eq!(pos.piece_at(sq("e3")).unwrap().id, id(&rules, "king"));
    assert_eq!(pos.piece_at(sq("e2")).unwrap().id, id(&rules, "rook"));
    // an enemy rook up there does not count
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("e1"), Piece::white(id(&rules, "king")));
    pos.place_piece(sq("e8"), Piece::black(id(&rules, "rook")));
    assert!(
        moves_for_piece(&rules, &pos, sq("e1"))
            .iter()
            .all(|m| m.kind != MoveKind::Castle(CastleSide::Vertical))
    );
}

#[test]
fn the_duck_moves_for_no_one_and_blocks_everyone() {
    let rules = Rules::anarchy();
    let pos = rules.startpos();
    let duck_sq = sq("d5");
    assert!(pos.piece_at(duck_sq).unwrap().is_neutral());
    for color in [Color::White, Color::Black] {
        assert!(legal_moves(&rules, &pos, color).iter().all(|m| m.from != duck_sq));
        // nobody may capture it either
        assert!(legal_moves(&rules, &pos, color).iter().all(|m| !m.captures_square(duck_sq)));
    }
    // asked directly, the duck moves regardless of color, and may displace anyone
    let mut pos = Board::empty(rules.size);
    pos.place_piece(duck_sq, Piece::neutral(id(&rules, "duck")));
    pos.place_piece(sq("d4"), Piece::white(id(&rules, "pawn")));
    let moves = moves_for_piece(&rules, &pos, duck_sq);
    assert!(moves.iter().any(|m| m.to == sq("d4") && m.is_capture()));
    assert!(moves.iter().any(|m| m.to == sq("e6") && !m.is_capture()));
}

#[test]
fn forced_en_passant_outranks_forced_checker_jumps() {
    let rules = Rules::anarchy();
    let mut pos = Board::empty(rules.size);
    pos.place_piece(sq("e5"), Piece::white(id(&rules, "pawn")));
    pos.place_piece(sq("a1"), Piece::white(id(&rules, "checker")));
    pos.place_piece(sq("b2"), Piece::black(id(&rules, "pawn")));
    pos.place_piece(sq("d7"), Piece::black(id(&rules, "pawn")));
    pos.play_move(Move::quiet(sq("d7"), sq("d5"), Piece::black(id(&rules, "pawn"))));
    let moves = legal_moves(&rules, &pos, Color::White);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].kind, MoveKind::EnPassant);
    assert_eq!(moves[0].to, sq("d6"));
}
