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

//! Movement rules turn the raw destination squares of
//! [`behaviours`](crate::behaviours) into fully formed [`Move`]s by applying
//! capture semantics and per-rule special mechanics. This is where every
//! irregular rule of the game lives, so this module carries most of the
//! engine's complexity.
//!
//! Rules compose: decorator rules like [`ForcedMoveRule`] and
//! [`KnooklearFusionRule`] own an ordered list of inner rules and transform
//! their output stream.

use crate::behaviours::MovementBehaviour;
use crate::board::Board;
use crate::moves::{
    CastleSide, ForcedPriority, Move, MoveCapture, MoveKind, PieceSpawn, SideEffect, Waypoint,
};
use crate::pieces::{Color, Piece, PieceId};
use crate::squares::{Offset, Square};
use arrayvec::ArrayVec;
use dyn_clone::DynClone;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// The shared contract of every movement rule: given a read-only board, an
/// origin, and the piece standing there, produce fully resolved candidate moves.
/// Evaluation never mutates the board it inspects.
pub trait MoveRule: Debug + DynClone + Send + Sync {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move>;
}

dyn_clone::clone_trait_object!(MoveRule);

pub type MovePredicate = Arc<dyn Fn(&Board, &Move) -> bool + Send + Sync>;

/// Matches moves tagged with the given kind.
pub fn when_kind(kind: MoveKind) -> MovePredicate {
    Arc::new(move |_, mov| mov.kind == kind)
}

/// Matches every capturing move.
pub fn when_capture() -> MovePredicate {
    Arc::new(|_, mov| mov.is_capture())
}

fn destinations(
    behaviours: &[Box<dyn MovementBehaviour>],
    pos: &Board,
    from: Square,
    piece: &Piece,
) -> Vec<Square> {
    behaviours.iter().flat_map(|b| b.destinations(pos, from, piece)).collect()
}

/// Keeps only destinations that are empty.
#[derive(Debug, Clone)]
#[must_use]
pub struct NoCaptureRule {
    behaviours: Vec<Box<dyn MovementBehaviour>>,
}

impl NoCaptureRule {
    pub fn new(behaviours: Vec<Box<dyn MovementBehaviour>>) -> Box<dyn MoveRule> {
        Box::new(Self { behaviours })
    }
}

impl MoveRule for NoCaptureRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        destinations(&self.behaviours, pos, from, piece)
            .into_iter()
            .filter(|&to| pos.is_empty(to))
            .map(|to| Move::quiet(from, to, *piece))
            .collect()
    }
}

/// Keeps only destinations occupied by an enemy piece; each becomes a capture.
#[derive(Debug, Clone)]
#[must_use]
pub struct CaptureOnlyRule {
    behaviours: Vec<Box<dyn MovementBehaviour>>,
}

impl CaptureOnlyRule {
    pub fn new(behaviours: Vec<Box<dyn MovementBehaviour>>) -> Box<dyn MoveRule> {
        Box::new(Self { behaviours })
    }
}

impl MoveRule for CaptureOnlyRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        destinations(&self.behaviours, pos, from, piece)
            .into_iter()
            .filter_map(|to| {
                let victim = pos.piece_at(to)?;
                victim.is_enemy_of(*piece).then(|| Move::capture(from, to, *piece, victim))
            })
            .collect()
    }
}

/// The workhorse: empty destinations become quiet moves, enemy-occupied ones
/// become captures. `friendly_fire` lists own piece types that may be captured
/// anyway, which is how self-sacrifice mechanics (and fusion, via the wrapping
/// [`KnooklearFusionRule`]) get their raw moves.
#[derive(Debug, Clone)]
#[must_use]
pub struct CaptureRule {
    behaviours: Vec<Box<dyn MovementBehaviour>>,
    friendly_fire: Vec<PieceId>,
}

impl CaptureRule {
    pub fn new(behaviours: Vec<Box<dyn MovementBehaviour>>) -> Box<dyn MoveRule> {
        Box::new(Self { behaviours, friendly_fire: vec![] })
    }

    pub fn with_friendly_fire(
        behaviours: Vec<Box<dyn MovementBehaviour>>,
        friendly_fire: Vec<PieceId>,
    ) -> Box<dyn MoveRule> {
        Box::new(Self { behaviours, friendly_fire })
    }
}

impl MoveRule for CaptureRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        destinations(&self.behaviours, pos, from, piece)
            .into_iter()
            .filter_map(|to| match pos.piece_at(to) {
                None => Some(Move::quiet(from, to, *piece)),
                Some(victim) if victim.is_enemy_of(*piece) => Some(Move::capture(from, to, *piece, victim)),
                Some(victim) if victim.is_friend_of(*piece) && self.friendly_fire.contains(&victim.id) => {
                    Some(Move::capture(from, to, *piece, victim))
                }
                Some(_) => None,
            })
            .collect()
    }
}

/// Capture of a pawn that just rushed past us. Eligibility is read off the
/// board's last move: an opposing pawn type that moved at least two squares
/// along the file next to our capture direction, such that our landing square
/// is one the pawn passed over. The destination square itself is empty, the
/// captured piece sits beside it.
///
/// Long chains extend the basic check: when further enemy pawns are stacked
/// along the capture diagonal, a single pass may take all of them.
#[derive(Debug, Clone)]
#[must_use]
pub struct EnPassantRule {
    /// Capture direction from the first player's point of view; mirrored for the second player.
    offset: Offset,
    /// Piece types that count as pawns for the eligibility check.
    pawns: Vec<PieceId>,
}

impl EnPassantRule {
    pub fn new(offset: Offset, pawns: Vec<PieceId>) -> Box<dyn MoveRule> {
        Box::new(Self { offset, pawns })
    }

    fn is_passable(&self, piece: Piece, victim: Piece) -> bool {
        victim.is_enemy_of(piece) && self.pawns.contains(&victim.id)
    }
}

impl MoveRule for EnPassantRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        let Some(color) = piece.color else { return vec![] };
        let dir = if color == Color::Black { self.offset.flip_up_down() } else { self.offset };
        let Some(last) = pos.last_move() else { return vec![] };
        let victim_sq = from + Offset::new(dir.dx, 0);
        let target = from + dir;
        if !pos.is_within_boundaries(target) || pos.is_occupied(target) {
            return vec![];
        }
        let Some(victim) = pos.piece_at(victim_sq) else { return vec![] };
        if !self.is_passable(*piece, victim) {
            return vec![];
        }
        // the last move must have been that pawn rushing >= 2 squares along its file,
        // passing over our landing square
        if last.to != victim_sq || last.from.file != victim_sq.file {
            return vec![];
        }
        if last.to.rank.abs_diff(last.from.rank) < 2 {
            return vec![];
        }
        let (lo, hi) = (last.from.rank.min(last.to.rank), last.from.rank.max(last.to.rank));
        if target.rank <= lo || target.rank >= hi {
            return vec![];
        }
        let mut captures = vec![MoveCapture { square: victim_sq, piece: victim }];
        let mut triggers = vec![victim_sq];
        let mut landing = target;
        let mut res = vec![];
        loop {
            let mut mov = Move::quiet(from, landing, *piece).with_kind(MoveKind::EnPassant);
            mov.captures = captures.clone();
            mov.trigger_squares = triggers.clone();
            res.push(mov);
            // long chain: another passable pawn stacked along the diagonal
            let next_victim_sq = landing + Offset::new(dir.dx, 0);
            let next_landing = landing + dir;
            if !pos.is_within_boundaries(next_landing) || pos.is_occupied(next_landing) {
                break;
            }
            let Some(next_victim) = pos.piece_at(next_victim_sq) else { break };
            if !self.is_passable(*piece, next_victim) {
                break;
            }
            captures.push(MoveCapture { square: next_victim_sq, piece: next_victim });
            triggers.push(next_victim_sq);
            landing = next_landing;
        }
        res
    }
}

/// One castling direction: where the unmoved partner piece has to stand,
/// relative to the mover.
#[derive(Debug, Copy, Clone)]
#[must_use]
pub struct CastleTarget {
    pub side: CastleSide,
    pub partner: PieceId,
    /// Relative position of the partner, from the first player's point of view.
    pub partner_offset: Offset,
}

/// Castling, generalized to kingside, queenside and vertical directions.
///
/// The mover and its partner must both be unmoved. The squares strictly between
/// them must be empty, except that a blocker of a configured type belonging to
/// the mover is captured as a side effect of castling. Landing squares follow
/// walk order: the mover travels 2 steps towards the partner, the partner ends
/// 1 step from the mover's origin. Directions where a landing square cannot be
/// determined (partner too close) or leaves the board yield nothing.
#[derive(Debug, Clone)]
#[must_use]
pub struct CastleRule {
    targets: Vec<CastleTarget>,
    capturable_blockers: Vec<PieceId>,
}

impl CastleRule {
    pub fn new(targets: Vec<CastleTarget>, capturable_blockers: Vec<PieceId>) -> Box<dyn MoveRule> {
        Box::new(Self { targets, capturable_blockers })
    }
}

impl MoveRule for CastleRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        let Some(color) = piece.color else { return vec![] };
        if piece.times_moved != 0 {
            return vec![];
        }
        let mut res = vec![];
        'targets: for target in &self.targets {
            let offset =
                if color == Color::Black { target.partner_offset.flip_up_down() } else { target.partner_offset };
            // the mover needs room to travel 2 steps without reaching the partner
            if offset.chebyshev_len() < 3 {
                continue;
            }
            let partner_sq = from + offset;
            if !pos.is_within_boundaries(partner_sq) {
                continue;
            }
            let Some(partner) = pos.piece_at(partner_sq) else { continue };
            if partner.id != target.partner || !partner.owned_by(color) || partner.times_moved != 0 {
                continue;
            }
            let unit = offset.unit();
            let mover_to = from + unit * 2;
            let partner_to = from + unit;
            if !pos.is_within_boundaries(mover_to) || !pos.is_within_boundaries(partner_to) {
                continue;
            }
            let mut captures = vec![];
            let mut triggers = vec![];
            let mut sq = from + unit;
            while sq != partner_sq {
                triggers.push(sq);
                if let Some(blocker) = pos.piece_at(sq) {
                    if blocker.owned_by(color) && self.capturable_blockers.contains(&blocker.id) {
                        captures.push(MoveCapture { square: sq, piece: blocker });
                    } else {
                        continue 'targets;
                    }
                }
                sq = sq + unit;
            }
            let mut mov = Move::quiet(from, mover_to, *piece).with_kind(MoveKind::Castle(target.side));
            mov.captures = captures;
            mov.trigger_squares = triggers;
            mov.side_effects = vec![SideEffect { from: partner_sq, to: partner_to }];
            res.push(mov);
        }
        res
    }
}

/// Checker-style chain captures: hop over an adjacent piece (friend or foe, it
/// is captured either way) onto the empty square behind it, then keep jumping
/// from there. Every completed jump emits a move, so one call yields all
/// divergent multi-jump chains.
///
/// The search is an explicit worklist DFS. Each branch owns copies of its
/// accumulators; in particular the visited set is per branch, so two sibling
/// chains may legally revisit each other's squares. Termination is structural:
/// a branch only grows by adding an unvisited landing square, and there are
/// finitely many squares.
#[derive(Debug, Clone)]
#[must_use]
pub struct CheckerJumpRule {
    offsets: Vec<Offset>,
}

#[derive(Clone)]
struct JumpBranch {
    at: Square,
    visited: Vec<Square>,
    waypoints: Vec<Waypoint>,
    captures: Vec<MoveCapture>,
    triggers: Vec<Square>,
}

impl CheckerJumpRule {
    pub fn new(offsets: Vec<Offset>) -> Box<dyn MoveRule> {
        Box::new(Self { offsets })
    }
}

impl MoveRule for CheckerJumpRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        let mut res = vec![];
        let mut stack = vec![JumpBranch {
            at: from,
            visited: vec![from],
            waypoints: vec![],
            captures: vec![],
            triggers: vec![],
        }];
        while let Some(branch) = stack.pop() {
            for &offset in &self.offsets {
                let over = branch.at + offset;
                let landing = over + offset;
                if !pos.is_within_boundaries(landing) || !pos.is_empty(landing) {
                    continue;
                }
                if branch.visited.contains(&landing) {
                    continue;
                }
                let Some(victim) = pos.piece_at(over) else { continue };
                if branch.captures.iter().any(|c| c.square == over) {
                    continue;
                }
                let mut next = branch.clone();
                next.at = landing;
                next.visited.push(landing);
                next.waypoints.push(Waypoint { square: landing, is_capture: true });
                next.captures.push(MoveCapture { square: over, piece: victim });
                next.triggers.push(over);
                let mut mov = Move::quiet(from, landing, *piece).with_kind(MoveKind::CheckerJump);
                mov.captures = next.captures.clone();
                mov.intermediates = next.waypoints.clone();
                mov.trigger_squares = next.triggers.clone();
                res.push(mov);
                stack.push(next);
            }
        }
        res
    }
}

/// Wraps other rules and tags every move matching the predicate with a forced
/// priority: if such a move is available, it must be played (resolution happens
/// in [`movegen`](crate::movegen), across all of the side's pieces).
#[derive(Clone)]
#[must_use]
pub struct ForcedMoveRule {
    priority: ForcedPriority,
    predicate: MovePredicate,
    rules: Vec<Box<dyn MoveRule>>,
}

impl ForcedMoveRule {
    pub fn new(
        priority: ForcedPriority,
        predicate: MovePredicate,
        rules: Vec<Box<dyn MoveRule>>,
    ) -> Box<dyn MoveRule> {
        Box::new(Self { priority, predicate, rules })
    }
}

impl Debug for ForcedMoveRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ForcedMoveRule {{ priority: {0:?}, rules: {1:?} }}", self.priority, self.rules)
    }
}

impl MoveRule for ForcedMoveRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        let mut res = vec![];
        for rule in &self.rules {
            for mut mov in rule.evaluate(pos, from, piece) {
                if (self.predicate)(pos, &mov) {
                    mov.forced_priority = Some(self.priority);
                }
                res.push(mov);
            }
        }
        res
    }
}

/// Wraps other rules; a move that captures an own piece of the `fuse_with` type
/// becomes a fusion: the mover promotes to the fused type and everything in the
/// 3x3 neighborhood of the destination (except the origin square) is captured
/// in the explosion.
#[derive(Debug, Clone)]
#[must_use]
pub struct KnooklearFusionRule {
    fuse_with: PieceId,
    fused: PieceId,
    rules: Vec<Box<dyn MoveRule>>,
}

impl KnooklearFusionRule {
    pub fn new(fuse_with: PieceId, fused: PieceId, rules: Vec<Box<dyn MoveRule>>) -> Box<dyn MoveRule> {
        Box::new(Self { fuse_with, fused, rules })
    }
}

impl MoveRule for KnooklearFusionRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        let mut res = vec![];
        for rule in &self.rules {
            for mut mov in rule.evaluate(pos, from, piece) {
                let fuses = mov
                    .captures
                    .iter()
                    .any(|c| c.piece.id == self.fuse_with && c.piece.color == piece.color);
                if fuses {
                    mov.kind = MoveKind::KnooklearFusion;
                    mov.promotes_to = Some(self.fused);
                    let mut neighborhood = ArrayVec::<Square, 9>::new();
                    for dy in -1..=1 {
                        for dx in -1..=1 {
                            neighborhood.push(mov.to + Offset::new(dx, dy));
                        }
                    }
                    for sq in neighborhood {
                        if sq == mov.from || !pos.is_within_boundaries(sq) || mov.captures_square(sq) {
                            continue;
                        }
                        if let Some(bystander) = pos.piece_at(sq) {
                            mov.captures.push(MoveCapture { square: sq, piece: bystander });
                        }
                    }
                }
                res.push(mov);
            }
        }
        res
    }
}

/// The piece decays in place: it captures itself and spawns new pieces at fixed
/// offsets. All-or-nothing: if any spawn square is occupied or off the board,
/// the rule yields nothing at all.
#[derive(Debug, Clone)]
#[must_use]
pub struct RadioactiveBetaDecayRule {
    decays: Vec<(Offset, PieceId)>,
}

impl RadioactiveBetaDecayRule {
    pub fn new(decays: Vec<(Offset, PieceId)>) -> Box<dyn MoveRule> {
        Box::new(Self { decays })
    }
}

impl MoveRule for RadioactiveBetaDecayRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        let mut spawns = vec![];
        for &(offset, id) in &self.decays {
            let sq = from + offset;
            if !pos.is_within_boundaries(sq) || pos.is_occupied(sq) {
                return vec![];
            }
            spawns.push(PieceSpawn { square: sq, piece: Piece::new(id, piece.color) });
        }
        let mut mov = Move::quiet(from, from, *piece).with_kind(MoveKind::BetaDecay);
        mov.captures = vec![MoveCapture { square: from, piece: *piece }];
        mov.spawns = spawns;
        vec![mov]
    }
}

/// Movement for pieces with no fixed owner: legality ignores color entirely.
/// Who gets to move such a piece is decided elsewhere, by counting adjacent
/// pieces of each color; that is not this rule's concern.
#[derive(Debug, Clone)]
#[must_use]
pub struct NeutralRule {
    behaviours: Vec<Box<dyn MovementBehaviour>>,
}

impl NeutralRule {
    pub fn new(behaviours: Vec<Box<dyn MovementBehaviour>>) -> Box<dyn MoveRule> {
        Box::new(Self { behaviours })
    }
}

impl MoveRule for NeutralRule {
    fn evaluate(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        destinations(&self.behaviours, pos, from, piece)
            .into_iter()
            .map(|to| match pos.piece_at(to) {
                None => Move::quiet(from, to, *piece),
                Some(victim) => Move::capture(from, to, *piece, victim),
            })
            .collect()
    }
}

/// A single null-op move, `from == to`, representing "activate this piece in
/// place" actions such as splitting a fused piece.
#[derive(Debug, Clone)]
#[must_use]
pub struct MoveToSelfRule;

impl MoveToSelfRule {
    pub fn new() -> Box<dyn MoveRule> {
        Box::new(Self)
    }
}

impl MoveRule for MoveToSelfRule {
    fn evaluate(&self, _pos: &Board, from: Square, piece: &Piece) -> Vec<Move> {
        vec![Move::quiet(from, from, *piece).with_kind(MoveKind::Activate)]
    }
}
