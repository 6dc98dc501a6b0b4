//! Material evaluation
//!
//! Counts piece values for each side.

use crate::constants::piece_value;
use crate::rules::SearchPosition;
use crate::types::{Score, Side, SQUARE_COUNT};

/// Total piece value held by White and by Black, in that order
pub fn material_totals<P: SearchPosition + ?Sized>(position: &P) -> (Score, Score) {
    (0..SQUARE_COUNT)
        .filter_map(|square| position.piece_at(square))
        .fold((0, 0), |(white, black), piece| match piece.side {
            Side::White => (white + piece_value(piece.kind), black),
            Side::Black => (white, black + piece_value(piece.kind)),
        })
}
