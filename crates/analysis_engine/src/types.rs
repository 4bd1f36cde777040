//! Analysis result types
//!
//! Scores are centipawns relative to the side to move in the analyzed
//! position. Conversion to the pawn-unit wire format happens in `api`.

use crate::board::Board;
use crate::search::SearchStats;
use shakmaty::{CastlingMode, Move};
use std::time::Duration;

/// One candidate move at the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub mv: Move,
    pub eval_score: i32,
    /// Starts with `mv` itself
    pub principal_variation: Vec<Move>,
}

impl MoveResult {
    pub fn uci(&self) -> String {
        self.mv.to_uci(CastlingMode::Standard).to_string()
    }

    pub fn principal_variation_uci(&self) -> Vec<String> {
        self.principal_variation
            .iter()
            .map(|mv| mv.to_uci(CastlingMode::Standard).to_string())
            .collect()
    }
}

/// Where the reported moves came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    OpeningBook,
    Search,
}

impl AnalysisSource {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisSource::OpeningBook => "opening_book",
            AnalysisSource::Search => "engine_search",
        }
    }
}

/// Outcome of one analysis call
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// The analyzed position (needed to render SAN)
    pub root: Board,
    /// Best evaluation of the deepest completed iteration
    pub evaluation: i32,
    /// Deepest completed iteration; 0 for book hits
    pub depth: u8,
    /// Best first, at most the configured result count
    pub moves: Vec<MoveResult>,
    pub stats: SearchStats,
    pub elapsed: Duration,
    pub source: AnalysisSource,
}

impl AnalysisResult {
    pub fn best_move(&self) -> Option<&MoveResult> {
        self.moves.first()
    }

    pub fn is_book(&self) -> bool {
        self.source == AnalysisSource::OpeningBook
    }
}
