//! # Chess Search - Best Move for a Single Position
//!
//! Picks one move for a chess position at a fixed depth, for use behind a synchronous
//! request/response API.
//!
//! ## Architecture
//!
//! - [`constants`] - Piece values and piece-square tables
//! - [`evaluation`] - Static, White-relative position score (material + positional)
//! - [`search`] - Candidate selection, alpha-beta search, root move selection
//! - [`rules`] - The capability the search needs from a rules engine
//! - [`board`] - That capability implemented on top of `shakmaty`
//! - [`api`] - FEN in, FEN out
//!
//! Chess rules (legality, check, special moves) come from the rules engine; this crate only
//! scores positions and walks the move tree it is given.
//!
//! ## Example
//!
//! ```no_run
//! use chess_search::{reply, SearchSettings};
//!
//! let start = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let out = reply(start, &SearchSettings { depth: 3, ..Default::default() }).unwrap();
//! println!("{} -> {}", out.best_move, out.fen);
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod rules;
pub mod search;
pub mod types;

pub use api::{reply, Reply};
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult, ErrorKind};
pub use evaluation::evaluate_position;
pub use rules::SearchPosition;
pub use search::{
    alphabeta, find_best_move, score_move, select_candidates, BestMove, Candidate,
    RootPerspective, SearchSettings,
};
pub use types::{Piece, PieceKind, Score, SearchStats, Side, SCORE_INF};
