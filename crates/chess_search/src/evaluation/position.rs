//! Full position evaluation
//!
//! Evaluates positions using material and piece-square tables. The result is always relative to
//! White, whoever is to move.

use super::material::material_totals;
use super::pst::square_value;
use crate::rules::SearchPosition;
use crate::types::{Score, Side, SQUARE_COUNT};

/// Per-side totals behind a position score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub white_material: Score,
    pub black_material: Score,
    pub white_positional: Score,
    pub black_positional: Score,
}

impl Breakdown {
    /// Material difference plus positional difference
    pub fn total(&self) -> Score {
        (self.white_material - self.black_material)
            + (self.white_positional - self.black_positional)
    }
}

/// Material and positional totals for both sides over all 64 squares
pub fn evaluate_breakdown<P: SearchPosition + ?Sized>(position: &P) -> Breakdown {
    let (white_material, black_material) = material_totals(position);
    let mut totals = Breakdown {
        white_material,
        black_material,
        ..Breakdown::default()
    };

    for square in 0..SQUARE_COUNT {
        let Some(piece) = position.piece_at(square) else {
            continue;
        };

        let positional = square_value(piece, square);
        match piece.side {
            Side::White => totals.white_positional += positional,
            Side::Black => totals.black_positional += positional,
        }
    }

    totals
}

/// Evaluate full position (material + positional)
#[inline]
pub fn evaluate_position<P: SearchPosition + ?Sized>(position: &P) -> Score {
    evaluate_breakdown(position).total()
}
