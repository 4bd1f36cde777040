//! # Engine Constants - Piece Values & Search Parameters
//!
//! Centralizes the centipawn valuation scheme, the search limits and the
//! move-ordering offsets used throughout the engine.
//!
//! ## Centipawn Valuation
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330 (slightly above the knight; the bishop pair earns more)
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 0 (never traded; mate is scored separately)
//!
//! ## Mate Scores
//!
//! A checkmated side to move scores `-MATE_SCORE + ply`, so shorter mates
//! score higher. Anything beyond `MATE_THRESHOLD` in magnitude is treated as
//! a forced mate by iterative deepening.

use shakmaty::Role;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 0;

/// Base material value of a piece kind in centipawns
pub const fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => PAWN_VALUE,
        Role::Knight => KNIGHT_VALUE,
        Role::Bishop => BISHOP_VALUE,
        Role::Rook => ROOK_VALUE,
        Role::Queen => QUEEN_VALUE,
        Role::King => KING_VALUE,
    }
}

/// Score of a checkmate at ply 0
pub const MATE_SCORE: i32 = 9999;
/// Scores beyond this magnitude signal a forced mate
pub const MATE_THRESHOLD: i32 = 5000;
/// Bound of the full alpha-beta window
pub const SEARCH_INFINITY: i32 = 10_000;

/// Hard ceiling on the requested search depth
pub const MAX_SEARCH_DEPTH: u8 = 12;
/// Quiescence horizon below the main search
pub const QUIESCENCE_HORIZON: i32 = 4;
/// Wall clock budget checked between iterative deepening depths
pub const TIME_BUDGET_SECS: f64 = 5.0;
/// Longest PV continuation followed after the root move
pub const MAX_PV_EXTENSION: usize = 6;

/// Transposition table entry cap; inserts beyond it are dropped
pub const TT_CAPACITY: usize = 200_000;
/// Killer slots per ply
pub const MAX_KILLERS: usize = 2;
/// Plies tracked by the killer table
pub const MAX_PLY: usize = 64;

/// Number of ranked moves reported
pub const RESULT_COUNT: usize = 3;
/// Penalty applied to moves padded in after the search
pub const PADDING_PENALTY: i32 = 50;
/// Fixed evaluation (centipawns) of an opening book hit
pub const BOOK_EVALUATION_CP: i32 = 15;

/// Captures losing more than this (SEE) are skipped in quiescence
pub const SEE_PRUNE_MARGIN: i32 = -50;

// Game phase thresholds (non-king material / non-king piece count)
pub const ENDGAME_MATERIAL: i32 = 1800;
pub const ENDGAME_PIECE_COUNT: u32 = 12;

// Move ordering offsets
pub const ORDER_TT_MOVE: i32 = 10_000;
pub const ORDER_GOOD_CAPTURE: i32 = 8_000;
pub const ORDER_PROMOTION: i32 = 7_000;
pub const ORDER_CHECK: i32 = 5_000;
pub const ORDER_KILLER: i32 = 4_000;
pub const ORDER_KILLER_SLOT_STEP: i32 = 100;
pub const ORDER_BAD_CAPTURE: i32 = 2_000;
pub const ORDER_CASTLE: i32 = 1_000;
pub const ORDER_HISTORY_DIVISOR: i32 = 10;
pub const ORDER_DEVELOPMENT: i32 = 50;

// Quiescence tactical weighting
pub const TACTICAL_CHECK_BONUS: i32 = 100;
pub const TACTICAL_MATE_BONUS: i32 = 10_000;
