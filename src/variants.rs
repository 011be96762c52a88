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

//! Variant definitions. A [`Rules`] value is a piece table plus a board size and
//! a starting placement; all variant-specific behavior is data wired up in the
//! constructors here, the engine itself has no hardcoded game knowledge.

use crate::behaviours::{
    Conditional, MovementBehaviour, Slide, Step, side_relative, slides, steps, unmoved,
};
use crate::board::Board;
use crate::common::Res;
use crate::moves::{CastleSide, ForcedPriority, MoveKind};
use crate::pieces::{Piece, PieceId, PieceInfo};
use crate::rules::{
    CaptureOnlyRule, CaptureRule, CastleRule, CastleTarget, CheckerJumpRule, EnPassantRule,
    ForcedMoveRule, KnooklearFusionRule, MoveToSelfRule, NeutralRule, NoCaptureRule,
    RadioactiveBetaDecayRule, when_capture, when_kind,
};
use crate::squares::{GridSize, Offset, Square};
use anyhow::bail;
use colored::Colorize;

/// The complete static description of a variant. Immutable once constructed;
/// a [`Board`] is the matching mutable state.
#[derive(Debug, Clone)]
#[must_use]
pub struct Rules {
    pub name: String,
    pub size: GridSize,
    pieces: Vec<PieceInfo>,
    starting: Vec<(Square, Piece)>,
}

impl Rules {
    pub fn pieces(&self) -> &[PieceInfo] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> &PieceInfo {
        &self.pieces[id.val()]
    }

    pub fn piece_by_name(&self, name: &str) -> Option<PieceId> {
        self.pieces.iter().position(|p| p.name.eq_ignore_ascii_case(name)).map(PieceId::new)
    }

    pub fn from_name(name: &str) -> Res<Rules> {
        match name.to_ascii_lowercase().as_str() {
            "chess" | "standard" => Ok(Self::chess()),
            "anarchy" => Ok(Self::anarchy()),
            _ => bail!(
                "unknown variant '{0}', valid names are {1} and {2}",
                name.red(),
                "chess".bold(),
                "anarchy".bold()
            ),
        }
    }

    pub fn startpos(&self) -> Board {
        let mut board = Board::empty(self.size);
        for &(sq, piece) in &self.starting {
            board.place_piece(sq, piece);
        }
        board
    }

    /// Standard chess movement. No check rules: the king is an ordinary piece
    /// here, win conditions are an external concern.
    pub fn chess() -> Rules {
        const PAWN: PieceId = PieceId::new(0);
        const KNIGHT: PieceId = PieceId::new(1);
        const BISHOP: PieceId = PieceId::new(2);
        const ROOK: PieceId = PieceId::new(3);
        const QUEEN: PieceId = PieceId::new(4);
        const KING: PieceId = PieceId::new(5);
        let pieces = vec![
            PieceInfo::new(
                "pawn",
                'p',
                vec![
                    NoCaptureRule::new(vec![pawn_push(2)]),
                    CaptureOnlyRule::new(pawn_takes()),
                    EnPassantRule::new(Offset::new(1, 1), vec![PAWN]),
                    EnPassantRule::new(Offset::new(-1, 1), vec![PAWN]),
                ],
            ),
            PieceInfo::new("knight", 'n', vec![CaptureRule::new(steps(Offset::KNIGHT_LEAPS))]),
            PieceInfo::new("bishop", 'b', vec![CaptureRule::new(slides(Offset::DIAGONALS))]),
            PieceInfo::new("rook", 'r', vec![CaptureRule::new(slides(Offset::ORTHOGONALS))]),
            PieceInfo::new("queen", 'q', vec![CaptureRule::new(queen_slides())]),
            PieceInfo::new(
                "king",
                'k',
                vec![
                    CaptureRule::new(steps(king_steps())),
                    CastleRule::new(
                        vec![
                            CastleTarget {
                                side: CastleSide::Kingside,
                                partner: ROOK,
                                partner_offset: Offset::new(3, 0),
                            },
                            CastleTarget {
                                side: CastleSide::Queenside,
                                partner: ROOK,
                                partner_offset: Offset::new(-4, 0),
                            },
                        ],
                        vec![],
                    ),
                ],
            ),
        ];
        let mut starting = vec![];
        let back_rank = [ROOK, KNIGHT, BISHOP, QUEEN, KING, BISHOP, KNIGHT, ROOK];
        for (file, &id) in back_rank.iter().enumerate() {
            place_symmetric(&mut starting, Square::new(file as _, 0), id, 8);
            place_symmetric(&mut starting, Square::new(file as _, 1), PAWN, 8);
        }
        Rules { name: "chess".to_string(), size: GridSize::chess(), pieces, starting }
    }

    /// Chess with the gloves off: triple-step pawns with forced en passant,
    /// checkers that must keep jumping, rooks that fuse with knights into
    /// knooks, beta-decaying queens, a neutral duck, and vertical castling.
    pub fn anarchy() -> Rules {
        const PAWN: PieceId = PieceId::new(0);
        const KNIGHT: PieceId = PieceId::new(1);
        const BISHOP: PieceId = PieceId::new(2);
        const ROOK: PieceId = PieceId::new(3);
        const QUEEN: PieceId = PieceId::new(4);
        const KING: PieceId = PieceId::new(5);
        const KNOOK: PieceId = PieceId::new(6);
        const CHECKER: PieceId = PieceId::new(7);
        const DUCK: PieceId = PieceId::new(8);
        // en passant outranks every other obligation, including checker jumps
        const FORCED_JUMP: ForcedPriority = ForcedPriority(1);
        const FORCED_EN_PASSANT: ForcedPriority = ForcedPriority(2);
        let forced_ep = |offset| {
            ForcedMoveRule::new(
                FORCED_EN_PASSANT,
                when_kind(MoveKind::EnPassant),
                vec![EnPassantRule::new(offset, vec![PAWN])],
            )
        };
        let knook_moves = || {
            let mut behaviours = slides(Offset::ORTHOGONALS);
            behaviours.extend(steps(Offset::KNIGHT_LEAPS));
            behaviours
        };
        let pieces = vec![
            PieceInfo::new(
                "pawn",
                'p',
                vec![
                    NoCaptureRule::new(vec![pawn_push(3)]),
                    CaptureOnlyRule::new(pawn_takes()),
                    forced_ep(Offset::new(1, 1)),
                    forced_ep(Offset::new(-1, 1)),
                ],
            ),
            PieceInfo::new("knight", 'n', vec![CaptureRule::new(steps(Offset::KNIGHT_LEAPS))]),
            PieceInfo::new("bishop", 'b', vec![CaptureRule::new(slides(Offset::DIAGONALS))]),
            PieceInfo::new(
                "rook",
                'r',
                vec![KnooklearFusionRule::new(
                    KNIGHT,
                    KNOOK,
                    vec![CaptureRule::with_friendly_fire(slides(Offset::ORTHOGONALS), vec![KNIGHT])],
                )],
            ),
            PieceInfo::new(
                "queen",
                'q',
                vec![
                    CaptureRule::new(queen_slides()),
                    RadioactiveBetaDecayRule::new(vec![
                        (Offset::new(-1, 0), ROOK),
                        (Offset::new(1, 0), BISHOP),
                        (Offset::new(0, 1), KNIGHT),
                    ]),
                ],
            ),
            PieceInfo::new(
                "king",
                'k',
                vec![
                    CaptureRule::new(steps(king_steps())),
                    CastleRule::new(
                        vec![
                            CastleTarget {
                                side: CastleSide::Kingside,
                                partner: ROOK,
                                partner_offset: Offset::new(3, 0),
                            },
                            CastleTarget {
                                side: CastleSide::Queenside,
                                partner: ROOK,
                                partner_offset: Offset::new(-4, 0),
                            },
                            // fires after an own rook appears, unmoved, at the far end of the file
                            CastleTarget {
                                side: CastleSide::Vertical,
                                partner: ROOK,
                                partner_offset: Offset::new(0, 7),
                            },
                        ],
                        vec![BISHOP],
                    ),
                ],
            ),
            PieceInfo::new(
                "knook",
                'o',
                vec![CaptureRule::new(knook_moves()), MoveToSelfRule::new()],
            ),
            PieceInfo::new(
                "checker",
                'c',
                vec![
                    NoCaptureRule::new(steps(Offset::DIAGONALS)),
                    ForcedMoveRule::new(
                        FORCED_JUMP,
                        when_capture(),
                        vec![CheckerJumpRule::new(Offset::DIAGONALS.to_vec())],
                    ),
                ],
            ),
            PieceInfo::new_uncolored("duck", 'd', vec![NeutralRule::new(steps(king_steps()))]),
        ];
        let mut starting = vec![];
        let back_rank = [ROOK, KNIGHT, BISHOP, QUEEN, KING, BISHOP, KNIGHT, ROOK];
        for (file, &id) in back_rank.iter().enumerate() {
            place_symmetric(&mut starting, Square::new(file as _, 0), id, 8);
            place_symmetric(&mut starting, Square::new(file as _, 1), PAWN, 8);
        }
        place_symmetric(&mut starting, Square::algebraic('b', 3), CHECKER, 8);
        starting.push((Square::algebraic('d', 5), Piece::neutral(DUCK)));
        Rules { name: "anarchy".to_string(), size: GridSize::chess(), pieces, starting }
    }
}

fn place_symmetric(starting: &mut Vec<(Square, Piece)>, sq: Square, id: PieceId, height: i16) {
    starting.push((sq, Piece::white(id)));
    starting.push((Square::new(sq.file, height - 1 - sq.rank), Piece::black(id)));
}

/// Forward push, longer on the first move, never capturing.
fn pawn_push(initial_distance: usize) -> Box<dyn MovementBehaviour> {
    let forward = |max| {
        side_relative(Box::new(Slide::bounded(Offset::UP, max)), Box::new(Slide::bounded(Offset::DOWN, max)))
    };
    Conditional::boxed(unmoved(), forward(initial_distance), forward(1))
}

fn pawn_takes() -> Vec<Box<dyn MovementBehaviour>> {
    vec![
        side_relative(Step::boxed(Offset::new(1, 1)), Step::boxed(Offset::new(1, -1))),
        side_relative(Step::boxed(Offset::new(-1, 1)), Step::boxed(Offset::new(-1, -1))),
    ]
}

fn queen_slides() -> Vec<Box<dyn MovementBehaviour>> {
    let mut res = slides(Offset::ORTHOGONALS);
    res.extend(slides(Offset::DIAGONALS));
    res
}

fn king_steps() -> impl IntoIterator<Item = Offset> {
    Offset::ORTHOGONALS.into_iter().chain(Offset::DIAGONALS)
}
