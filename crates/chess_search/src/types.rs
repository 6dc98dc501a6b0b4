//! # Core Types - Pieces, Sides and Scores
//!
//! ## Overview
//!
//! The search never looks inside the rules engine's own board representation. Everything it needs
//! to score a position is a piece kind and a side per occupied square, so those are the only board
//! concepts defined here. Moves stay opaque (see [`crate::rules::SearchPosition::Move`]).
//!
//! ## Score Convention
//!
//! A [`Score`] is a signed centipawn count. Positive values favor White, negative values favor
//! Black, regardless of whose turn it is. The search bounds use [`SCORE_INF`] and its negation as
//! the unreached sentinels, which keeps negation overflow-free.

use std::fmt;

/// Centipawn evaluation, always from White's point of view
pub type Score = i32;

/// Upper search bound; `-SCORE_INF` is the lower bound
pub const SCORE_INF: Score = i32::MAX;

/// Number of squares on the board
pub const SQUARE_COUNT: usize = 64;

/// Side to move (White moves first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Black => f.write_str("black"),
        }
    }
}

/// Piece type without color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/// A colored piece as seen on one square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, Side::White)
    }

    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, Side::Black)
    }
}

/// Counters collected during one best-move computation
///
/// Purely informational: nothing in the search reads them back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the alpha-beta searcher
    pub nodes: u64,
    /// Static evaluations (leaves plus candidate scoring)
    pub evaluations: u64,
    /// Times a node stopped early because alpha met beta
    pub cutoffs: u64,
}
