//! Move making and unmaking for search
//!
//! Every applied move is reverted before control returns to the caller, so sibling branches
//! always start from the same position.

use crate::error::ChessEngineResult;
use crate::evaluation::evaluate_position;
use crate::rules::SearchPosition;
use crate::types::{Score, SearchStats};

/// Apply `mv`, run `f` on the resulting position, then revert
///
/// The move is reverted even when `f` fails; the first error wins.
pub fn with_move<P, T, F>(position: &mut P, mv: &P::Move, f: F) -> ChessEngineResult<T>
where
    P: SearchPosition + ?Sized,
    F: FnOnce(&mut P) -> ChessEngineResult<T>,
{
    position.push(mv)?;
    let result = f(position);
    let reverted = position.pop();
    let value = result?;
    reverted?;
    Ok(value)
}

/// Static score of the position reached by `mv`
pub fn score_move<P>(
    position: &mut P,
    mv: &P::Move,
    stats: &mut SearchStats,
) -> ChessEngineResult<Score>
where
    P: SearchPosition + ?Sized,
{
    with_move(position, mv, |after| {
        stats.evaluations += 1;
        Ok(evaluate_position(after))
    })
}
