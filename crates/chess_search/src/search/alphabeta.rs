//! Alpha-beta search over forward-pruned candidate lists
//!
//! Plain minimax with explicit maximizing/minimizing turns (not negamax): scores are
//! White-relative, White's plies maximize and Black's plies minimize. Recursion depth is bounded
//! by the requested depth.

use super::make_unmake::with_move;
use super::ordering::select_candidates;
use crate::error::ChessEngineResult;
use crate::evaluation::evaluate_position;
use crate::rules::SearchPosition;
use crate::types::{Score, SearchStats, SCORE_INF};

/// Depth-limited minimax with alpha-beta pruning
///
/// Leaves are positions at `depth == 0` or where the game is over; they return the static
/// evaluation. Interior nodes only search the candidates from [`select_candidates`], in ranked
/// order, and stop once `alpha >= beta`.
///
/// # Errors
///
/// Propagates search invariant errors from the position (illegal move, unbalanced pop).
pub fn alphabeta<P>(
    position: &mut P,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    stats: &mut SearchStats,
) -> ChessEngineResult<Score>
where
    P: SearchPosition + ?Sized,
{
    stats.nodes += 1;

    if depth == 0 || position.is_game_over() {
        stats.evaluations += 1;
        return Ok(evaluate_position(position));
    }

    let moves = position.legal_moves();
    let candidates = select_candidates(position, moves, maximizing, stats)?;

    if maximizing {
        let mut best = -SCORE_INF;
        for candidate in &candidates {
            let score = with_move(position, &candidate.mv, |child| {
                alphabeta(child, depth - 1, alpha, beta, false, stats)
            })?;

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = SCORE_INF;
        for candidate in &candidates {
            let score = with_move(position, &candidate.mv, |child| {
                alphabeta(child, depth - 1, alpha, beta, true, stats)
            })?;

            best = best.min(score);
            beta = beta.min(score);
            if alpha >= beta {
                stats.cutoffs += 1;
                break;
            }
        }
        Ok(best)
    }
}
