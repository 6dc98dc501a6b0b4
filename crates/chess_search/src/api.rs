//! Request-level API
//!
//! One call answers one request: decode the FEN, pick a move, play it, encode the result. Each
//! call owns its own [`Board`], so concurrent callers never share a position.

use crate::board::Board;
use crate::error::ChessEngineResult;
use crate::rules::SearchPosition;
use crate::search::{find_best_move, SearchSettings};
use crate::types::{Score, SearchStats};
use tracing::debug;

/// Outcome of a best-move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Position after the chosen move
    pub fen: String,
    /// Chosen move in UCI notation
    pub best_move: String,
    /// White-relative search score of the chosen move
    pub score: Score,
    pub stats: SearchStats,
}

/// Play the engine's move in the position given as FEN
///
/// # Errors
///
/// - `InvalidFen` if `fen` cannot be decoded
/// - `NoLegalMoves` if the position is already checkmate or stalemate
/// - `IllegalMove` / `StackUnderflow` if the search broke its push/pop discipline
pub fn reply(fen: &str, settings: &SearchSettings) -> ChessEngineResult<Reply> {
    let mut board = Board::from_fen(fen)?;
    let best = find_best_move(&mut board, settings.depth, settings.perspective)?;
    let best_move = Board::move_to_uci(&best.mv);

    board.push(&best.mv)?;
    debug!(%best_move, score = best.score, "move played");

    Ok(Reply {
        fen: board.to_fen(),
        best_move,
        score: best.score,
        stats: best.stats,
    })
}
