//! Best-move selection at the root
//!
//! The root searches every legal move (no candidate truncation) and keeps the first move with
//! the strictly best score.

use super::alphabeta::alphabeta;
use super::make_unmake::with_move;
use crate::constants::DEFAULT_DEPTH;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::rules::SearchPosition;
use crate::types::{Score, SearchStats, Side, SCORE_INF};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace};

/// Whose score the root optimizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootPerspective {
    /// Maximize when White is to move, minimize when Black is to move
    #[default]
    SideToMove,
    /// Always maximize the White-relative score and treat the next ply as Black's,
    /// even when Black is to move
    FirstMover,
}

impl RootPerspective {
    fn root_maximizes(self, to_move: Side) -> bool {
        match self {
            RootPerspective::SideToMove => to_move == Side::White,
            RootPerspective::FirstMover => true,
        }
    }
}

impl fmt::Display for RootPerspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootPerspective::SideToMove => f.write_str("side-to-move"),
            RootPerspective::FirstMover => f.write_str("first-mover"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown root perspective {0:?} (expected \"side-to-move\" or \"first-mover\")")]
pub struct ParsePerspectiveError(String);

impl FromStr for RootPerspective {
    type Err = ParsePerspectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "side-to-move" | "side_to_move" => Ok(RootPerspective::SideToMove),
            "first-mover" | "first_mover" | "white" => Ok(RootPerspective::FirstMover),
            _ => Err(ParsePerspectiveError(s.to_string())),
        }
    }
}

/// Search parameters for one best-move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Plies searched, counting the root move
    pub depth: u32,
    pub perspective: RootPerspective,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            perspective: RootPerspective::default(),
        }
    }
}

/// Chosen root move with its search score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMove<M> {
    pub mv: M,
    pub score: Score,
    pub stats: SearchStats,
}

/// Find the best move for the position at the given depth
///
/// Each legal move is applied and searched to `depth - 1` with a full window. A later move
/// replaces the current best only with a strictly better score, so ties go to the move the rules
/// engine listed first. A depth of 0 scores each move statically.
///
/// # Errors
///
/// Returns `NoLegalMoves` for checkmate or stalemate positions, and propagates search invariant
/// errors.
pub fn find_best_move<P>(
    position: &mut P,
    depth: u32,
    perspective: RootPerspective,
) -> ChessEngineResult<BestMove<P::Move>>
where
    P: SearchPosition + ?Sized,
{
    let moves = position.legal_moves();
    if moves.is_empty() {
        return Err(ChessEngineError::NoLegalMoves);
    }

    let maximizing = perspective.root_maximizes(position.side_to_move());
    let child_depth = depth.saturating_sub(1);
    let mut stats = SearchStats::default();
    let mut best: Option<(P::Move, Score)> = None;

    for mv in moves {
        let score = with_move(position, &mv, |child| {
            alphabeta(child, child_depth, -SCORE_INF, SCORE_INF, !maximizing, &mut stats)
        })?;
        trace!(?mv, score, "root move searched");

        let improves = match &best {
            None => true,
            Some((_, best_score)) if maximizing => score > *best_score,
            Some((_, best_score)) => score < *best_score,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    let (mv, score) = best.ok_or(ChessEngineError::NoLegalMoves)?;
    debug!(
        depth,
        %perspective,
        score,
        nodes = stats.nodes,
        evaluations = stats.evaluations,
        cutoffs = stats.cutoffs,
        "search finished"
    );

    Ok(BestMove { mv, score, stats })
}
