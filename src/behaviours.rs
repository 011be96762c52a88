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
use crate::pieces::{Color, Piece};
use crate::squares::{Offset, Square};
use dyn_clone::DynClone;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A pure geometry generator: candidate destination squares with no knowledge of
/// capture semantics. Behaviours may look at occupancy only where geometry requires
/// it (a [`Slide`] stops at the first blocker, but does not judge friend or foe).
///
/// Behaviours are pure functions of `(board, position, piece)`: re-evaluating one
/// against an unchanged board replays exactly the same squares, which is what lets
/// the enclosing rule restart a candidate sequence at will.
pub trait MovementBehaviour: Debug + DynClone + Send + Sync {
    fn destinations(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Square>;
}

dyn_clone::clone_trait_object!(MovementBehaviour);

/// A single hop by a fixed offset, yielded only when it stays on the board.
#[derive(Debug, Clone)]
#[must_use]
pub struct Step {
    offset: Offset,
}

impl Step {
    pub fn new(offset: Offset) -> Self {
        Self { offset }
    }

    pub fn boxed(offset: Offset) -> Box<dyn MovementBehaviour> {
        Box::new(Self::new(offset))
    }
}

impl MovementBehaviour for Step {
    fn destinations(&self, pos: &Board, from: Square, _piece: &Piece) -> Vec<Square> {
        let to = from + self.offset;
        if pos.is_within_boundaries(to) { vec![to] } else { vec![] }
    }
}

/// Repeats an offset until blocked: yields every empty square reached, *plus* the
/// first occupied square (the enclosing rule decides whether that is a capture),
/// then stops. An optional `max_steps` bounds the walk before the board edge does.
#[derive(Debug, Clone)]
#[must_use]
pub struct Slide {
    offset: Offset,
    max_steps: Option<usize>,
}

impl Slide {
    pub fn new(offset: Offset) -> Self {
        Self { offset, max_steps: None }
    }

    pub fn bounded(offset: Offset, max_steps: usize) -> Self {
        Self { offset, max_steps: Some(max_steps) }
    }

    pub fn boxed(offset: Offset) -> Box<dyn MovementBehaviour> {
        Box::new(Self::new(offset))
    }
}

impl MovementBehaviour for Slide {
    fn destinations(&self, pos: &Board, from: Square, _piece: &Piece) -> Vec<Square> {
        let mut res = vec![];
        let mut sq = from + self.offset;
        let max = self.max_steps.unwrap_or(usize::MAX);
        while pos.is_within_boundaries(sq) && res.len() < max {
            res.push(sq);
            if pos.is_occupied(sq) {
                break;
            }
            sq = sq + self.offset;
        }
        res
    }
}

pub type BehaviourPredicate = Arc<dyn Fn(&Board, Square, &Piece) -> bool + Send + Sync>;

/// Evaluates a predicate once per call and fully delegates to the chosen branch.
/// This is how a piece gets a longer first move or per-color geometry.
#[derive(Clone)]
#[must_use]
pub struct Conditional {
    predicate: BehaviourPredicate,
    if_true: Box<dyn MovementBehaviour>,
    if_false: Box<dyn MovementBehaviour>,
}

impl Conditional {
    pub fn new(
        predicate: BehaviourPredicate,
        if_true: Box<dyn MovementBehaviour>,
        if_false: Box<dyn MovementBehaviour>,
    ) -> Self {
        Self { predicate, if_true, if_false }
    }

    pub fn boxed(
        predicate: BehaviourPredicate,
        if_true: Box<dyn MovementBehaviour>,
        if_false: Box<dyn MovementBehaviour>,
    ) -> Box<dyn MovementBehaviour> {
        Box::new(Self::new(predicate, if_true, if_false))
    }
}

impl Debug for Conditional {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Conditional {{ if_true: {0:?}, if_false: {1:?} }}", self.if_true, self.if_false)
    }
}

impl MovementBehaviour for Conditional {
    fn destinations(&self, pos: &Board, from: Square, piece: &Piece) -> Vec<Square> {
        if (self.predicate)(pos, from, piece) {
            self.if_true.destinations(pos, from, piece)
        } else {
            self.if_false.destinations(pos, from, piece)
        }
    }
}

/// True while the piece has never moved.
pub fn unmoved() -> BehaviourPredicate {
    Arc::new(|_, _, piece| piece.times_moved == 0)
}

pub fn is_color(color: Color) -> BehaviourPredicate {
    Arc::new(move |_, _, piece| piece.color == Some(color))
}

/// One [`Step`] per offset, the usual wiring for leapers.
pub fn steps(offsets: impl IntoIterator<Item = Offset>) -> Vec<Box<dyn MovementBehaviour>> {
    offsets.into_iter().map(Step::boxed).collect()
}

/// One unbounded [`Slide`] per offset, the usual wiring for riders.
pub fn slides(offsets: impl IntoIterator<Item = Offset>) -> Vec<Box<dyn MovementBehaviour>> {
    offsets.into_iter().map(Slide::boxed).collect()
}

/// A first-player behaviour paired with its mirrored second-player version,
/// selected by the mover's color. Neutral pieces take the first-player branch.
pub fn side_relative(
    white: Box<dyn MovementBehaviour>,
    black: Box<dyn MovementBehaviour>,
) -> Box<dyn MovementBehaviour> {
    Conditional::boxed(Arc::new(|_, _, piece: &Piece| piece.color != Some(Color::Black)), white, black)
}
