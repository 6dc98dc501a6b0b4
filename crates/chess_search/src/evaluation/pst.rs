//! Piece-square lookup
//!
//! White reads a table front to back. Black reads the same flat table back to front, which is a
//! linear reversal and not a rank flip: a black pawn on e2 reads the entry White would get on d7.

use crate::constants::square_table;
use crate::types::{Piece, Score, Side};

/// Positional bonus of `piece` standing on `square`
///
/// Returns 0 when `square` lies past the end of the piece's table.
#[inline]
pub fn square_value(piece: Piece, square: usize) -> Score {
    let table = square_table(piece.kind);
    if square >= table.len() {
        return 0;
    }

    match piece.side {
        Side::White => table[square],
        Side::Black => table[table.len() - 1 - square],
    }
}
