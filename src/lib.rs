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

//! The rule composition core of a board game that generalizes chess.
//!
//! The organization is that of a pipeline: [`behaviours`] produce raw candidate squares,
//! [`rules`] turn them into fully resolved [`moves::Move`]s with captures, side effects,
//! spawns and promotions attached, [`variants`] wire ordered rule lists to piece types,
//! and [`movegen`] aggregates per-piece candidates and resolves forced-move precedence.
//! [`board::Board::play_move`] is the single state transition primitive.
//!
//! Everything outside of move generation and move application -- win/draw detection,
//! notation, persistence, networking, matchmaking -- lives in external collaborators
//! that consume this crate through [`movegen::legal_moves`] and
//! [`board::Board::play_move`].

pub mod behaviours;
pub mod board;
pub mod common;
pub mod movegen;
pub mod moves;
pub mod pieces;
pub mod rules;
pub mod squares;
pub mod variants;

pub use common::{DimT, Res};
pub use movegen::{legal_moves, moves_for_piece, resolve_forced};
