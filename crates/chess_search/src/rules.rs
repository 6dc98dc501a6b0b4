//! Rules-engine capability used by the search
//!
//! The search does not know chess rules. It asks a [`SearchPosition`] for legal moves, applies and
//! reverts them in strict LIFO order, and reads piece occupancy to evaluate.
//! [`crate::board::Board`] is the production implementation; tests plug in synthetic trees.

use crate::error::ChessEngineResult;
use crate::types::{Piece, Side};
use std::fmt::Debug;

/// A mutable position the search can walk through
pub trait SearchPosition {
    /// Opaque move value produced by [`SearchPosition::legal_moves`]
    type Move: Clone + Debug;

    /// Legal moves for the side to move, in the rules engine's enumeration order
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move. Fails with `IllegalMove` when the move is not legal here.
    fn push(&mut self, mv: &Self::Move) -> ChessEngineResult<()>;

    /// Revert the most recently applied move. Fails with `StackUnderflow` when nothing is applied.
    fn pop(&mut self) -> ChessEngineResult<()>;

    /// Checkmate, stalemate, insufficient material or the seventy-five-move draw
    fn is_game_over(&self) -> bool;

    /// Occupant of a square (0 = a1 ... 63 = h8); `None` when empty or out of range
    fn piece_at(&self, square: usize) -> Option<Piece>;

    fn side_to_move(&self) -> Side;
}
