//! Forward-pruned alpha-beta search
//!
//! This module picks one move for a position at a fixed depth:
//! - Minimax with alpha-beta pruning (recursive, depth-first)
//! - Forward pruning: interior nodes only expand the best few moves by static score
//! - Root move selection over every legal move, with no pruning at the root
//!
//! The position is walked with strictly nested push/pop. No position copies are taken per branch,
//! so memory stays proportional to the depth.
//!
//! ## Module Organization
//!
//! - `make_unmake` - Scoped move application and single-move scoring
//! - `ordering` - Candidate ranking and truncation
//! - `alphabeta` - Core alpha-beta search over the candidate lists
//! - `root` - Best-move selection at the root

mod alphabeta;
mod make_unmake;
mod ordering;
mod root;

pub use alphabeta::alphabeta;
pub use make_unmake::{score_move, with_move};
pub use ordering::{select_candidates, Candidate};
pub use root::{
    find_best_move, BestMove, ParsePerspectiveError, RootPerspective, SearchSettings,
};
