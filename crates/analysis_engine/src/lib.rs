//! # Analysis Engine
//!
//! Chess position analysis: given a FEN and a depth, returns the top
//! candidate moves with scores and principal variations.
//!
//! ## Search
//!
//! - Iterative deepening with a wall-clock budget checked between depths
//! - Negamax alpha-beta with principal-variation search and late-move reductions
//! - Quiescence search over captures, checks and promotions, pruned by SEE
//! - Transposition table, killer moves and history heuristic
//!
//! ## Evaluation
//!
//! Material, piece-square tables (phase-dependent king table), weighted
//! mobility, pawn structure, king safety, bishop pair and rook files.
//!
//! Chess rules come from [`shakmaty`] through the [`Board`] adapter.
//!
//! ## Example
//!
//! ```no_run
//! use analysis_engine::{analyze_position, AnalyzeRequest, Analyzer};
//!
//! let analyzer = Analyzer::default();
//! let request = AnalyzeRequest::new("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", Some(6));
//! let response = analyze_position(&analyzer, &request);
//! println!("{}", serde_json::to_string_pretty(&response).unwrap());
//! ```

pub mod api;
pub mod board;
pub mod book;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod hash;
pub mod search;
pub mod types;

pub use api::{analyze_position, AnalysisResponse, AnalyzeRequest, EngineInfo};
pub use board::Board;
pub use book::OpeningBook;
pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use search::{Analyzer, SearchStats};
pub use types::{AnalysisResult, AnalysisSource, MoveResult};
