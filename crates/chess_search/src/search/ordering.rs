//! Candidate selection for interior nodes
//!
//! Ranks every legal move by the static score of the position it leads to and keeps only the
//! first [`CANDIDATE_COUNT`]. This is forward pruning: a move outside the shallow top three is
//! never searched, however good it would prove deeper down.

use super::make_unmake::score_move;
use crate::constants::CANDIDATE_COUNT;
use crate::error::ChessEngineResult;
use crate::rules::SearchPosition;
use crate::types::{Score, SearchStats};

/// A move together with its shallow score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<M> {
    pub mv: M,
    pub score: Score,
}

/// Rank `moves` by shallow score and keep the best few for the side at this ply
///
/// Sorts descending when `maximizing`, ascending otherwise. The sort is stable, so equal scores
/// keep the order in which `moves` were given.
pub fn select_candidates<P>(
    position: &mut P,
    moves: Vec<P::Move>,
    maximizing: bool,
    stats: &mut SearchStats,
) -> ChessEngineResult<Vec<Candidate<P::Move>>>
where
    P: SearchPosition + ?Sized,
{
    let mut ranked = Vec::with_capacity(moves.len());
    for mv in moves {
        let score = score_move(position, &mv, stats)?;
        ranked.push(Candidate { mv, score });
    }

    if maximizing {
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
    } else {
        ranked.sort_by_key(|c| c.score);
    }
    ranked.truncate(CANDIDATE_COUNT);

    Ok(ranked)
}
