//! Alpha-beta search with iterative deepening
//!
//! This module implements the analysis search using:
//! - Negamax variant of alpha-beta pruning with principal-variation search
//! - Late-move reductions
//! - Quiescence search over captures, checks and promotions
//! - Transposition table, killer and history heuristics for move ordering
//! - Iterative deepening for time management
//!
//! ## Module Organization
//!
//! - `context` - Per-call tables and counters
//! - `make_unmake` - Move making/unmaking guard
//! - `ordering` - Move ordering heuristics and static exchange evaluation
//! - `quiescence` - Quiescence search to avoid horizon effect
//! - `alphabeta` - Core negamax search
//! - `root` - Root move loop and principal variations
//! - `iterative` - Iterative deepening driver ([`Analyzer`])

mod alphabeta;
mod context;
mod iterative;
mod make_unmake;
mod ordering;
mod quiescence;
mod root;

pub use context::{HistoryTable, KillerTable, SearchContext, SearchStats};
pub use iterative::Analyzer;
pub use make_unmake::MadeMove;
pub use ordering::{see, tactical_value};
