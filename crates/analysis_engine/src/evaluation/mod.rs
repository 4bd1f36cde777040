//! Position evaluation
//!
//! Evaluates chess positions using:
//! - Material count and piece-square tables (king table by game phase)
//! - Weighted mobility for both sides
//! - Pawn structure (doubled, isolated, passed)
//! - King safety (middlegame only)
//! - Bishop pair and rook file placement
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material balance and game phase
//! - `mobility` - Weighted legal-move counts
//! - `structure` - Pawn structure, bishop pair, rook files
//! - `king_safety` - Pawn shield and king-zone pressure
//! - `position` - Full position evaluation (sum of all terms)

mod king_safety;
mod material;
mod mobility;
mod position;
mod pst;
mod structure;

pub use material::is_endgame;
pub use position::evaluate_position;
pub use pst::pst_value;
