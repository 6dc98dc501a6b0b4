//! Static position evaluation
//!
//! Scores positions from White's point of view using:
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables)
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square lookup with color mirroring
//! - `material` - Material totals per side
//! - `position` - Full position evaluation (material + positional)

mod material;
mod position;
mod pst;

pub use material::material_totals;
pub use position::{evaluate_breakdown, evaluate_position, Breakdown};
pub use pst::square_value;
