//! # Evaluation Constants - Piece Values & Piece-Square Tables
//!
//! ## Centipawn Valuation
//!
//! - **Pawn**: 100
//! - **Knight**: 350
//! - **Bishop**: 350
//! - **Rook**: 525
//! - **Queen**: 1000
//! - **King**: 20000 (dominates every other term, so losing it outweighs any material)
//!
//! ## Piece-Square Tables
//!
//! Each table is a flat slice indexed by square number (0 = a1 ... 63 = h8) and is read as-is for
//! White. Black reads the same slice back to front, see [`crate::evaluation::square_value`].
//! Note that this is a linear reversal of the slice, not a rank flip.
//!
//! `BISHOP_PST` deliberately has seven rows. Squares past its end score zero.

use crate::types::{PieceKind, Score};

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 350;
pub const BISHOP_VALUE: Score = 350;
pub const ROOK_VALUE: Score = 525;
pub const QUEEN_VALUE: Score = 1000;
pub const KING_VALUE: Score = 20000;

/// Moves kept per interior search node after shallow ranking
pub const CANDIDATE_COUNT: usize = 3;

/// Search depth used when none is configured
pub const DEFAULT_DEPTH: u32 = 9;

#[rustfmt::skip]
pub const PAWN_PST: [Score; 64] = [
    100, 100, 100, 100, 105, 100, 100, 100,
     78,  83,  86,  73, 102,  82,  85,  90,
      7,  29,  21,  44,  40,  31,  44,   7,
    -17,  16,  -2,  15,  14,   0,  15, -13,
    -26,   3,  10,   9,   6,   1,   0, -23,
    -22,   9,   5, -11, -10,  -2,   3, -19,
    -31,   8,  -7, -37, -36, -14,   3, -31,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
pub const BISHOP_PST: [Score; 56] = [
    -14, -10, -11,  -6,  -6, -11, -10, -14,
    -10,   1,   2,   3,   3,   2,   1, -10,
    -10,   2,   8,   9,   9,   8,   2, -10,
    -10,   3,   9,  12,  12,   9,   3, -10,
    -10,   2,   9,  12,  12,   9,   2, -10,
    -10,   1,   2,   3,   3,   2,   1, -10,
    -14, -10, -11,  -6,  -6, -11, -10, -14,
];

#[rustfmt::skip]
pub const KNIGHT_PST: [Score; 64] = [
    -35, -25, -20, -20, -20, -20, -25, -35,
    -25, -15,  10,   5,   5,  10, -15, -25,
    -20,   5,  20,  15,  15,  20,   5, -20,
    -20,   0,  15,  20,  20,  15,   0, -20,
    -20,   5,  15,  20,  20,  15,   5, -20,
    -20,   0,  10,  15,  15,  10,   0, -20,
    -25, -15,   5,   0,   0,   5, -15, -25,
    -35, -25, -20, -20, -20, -20, -25, -35,
];

#[rustfmt::skip]
pub const ROOK_PST: [Score; 64] = [
      5,   5,   5,   5,   5,   5,   5,   5,
     10,  10,  10,  10,  10,  10,  10,  10,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      0,   0,   0,   5,   5,   0,   0,   0,
];

#[rustfmt::skip]
pub const QUEEN_PST: [Score; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
pub const KING_PST: [Score; 64] = [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
];

/// Material value of a piece kind (side-independent)
#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Piece-square table for a piece kind, as authored for White
#[inline]
pub fn square_table(kind: PieceKind) -> &'static [Score] {
    match kind {
        PieceKind::Pawn => &PAWN_PST,
        PieceKind::Knight => &KNIGHT_PST,
        PieceKind::Bishop => &BISHOP_PST,
        PieceKind::Rook => &ROOK_PST,
        PieceKind::Queen => &QUEEN_PST,
        PieceKind::King => &KING_PST,
    }
}
