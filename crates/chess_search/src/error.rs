//! Error types for the search engine
//!
//! Every error aborts the current best-move computation. The three kinds a
//! caller has to tell apart (bad input, terminal position, broken search
//! discipline) are exposed through [`ChessEngineError::kind`].

use thiserror::Error;

/// Errors that can occur while answering a best-move request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// FEN text is malformed or describes an impossible position
    #[error("Invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Best move requested for a position where the side to move has no moves
    #[error("No legal moves: position is already checkmate or stalemate")]
    NoLegalMoves,

    /// A move handed to the board was not legal in the current position
    #[error("Search applied an illegal move: {mv}")]
    IllegalMove { mv: String },

    /// Revert requested with no applied move left to undo
    #[error("Stack underflow in search algorithm at depth {depth}")]
    StackUnderflow { depth: usize },
}

/// Coarse classification of [`ChessEngineError`] for callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    NoLegalMove,
    SearchInvariant,
}

impl ErrorKind {
    /// Stable machine-readable tag
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Decode => "decode_error",
            ErrorKind::NoLegalMove => "no_legal_moves",
            ErrorKind::SearchInvariant => "search_invariant",
        }
    }
}

impl ChessEngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChessEngineError::InvalidFen { .. } => ErrorKind::Decode,
            ChessEngineError::NoLegalMoves => ErrorKind::NoLegalMove,
            ChessEngineError::IllegalMove { .. } | ChessEngineError::StackUnderflow { .. } => {
                ErrorKind::SearchInvariant
            }
        }
    }
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
