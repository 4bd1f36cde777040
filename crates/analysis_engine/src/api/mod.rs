//! Public API for the analysis engine
//!
//! Turns an [`AnalyzeRequest`] into the JSON-ready [`AnalysisResponse`].
//! Engine failures never escape as `Err`: they become the error variant of
//! the response, which carries the message.
//!
//! ## Module Organization
//!
//! - `request` - Inbound request and depth normalization
//! - `response` - Success/error wire format
//! - `info` - Engine description

mod info;
mod request;
mod response;

pub use info::EngineInfo;
pub use request::{AnalyzeRequest, DEFAULT_REQUEST_DEPTH, MAX_REQUEST_DEPTH};
pub use response::{
    display_pawns, to_pawns, AnalysisReport, AnalysisResponse, BestMove, ErrorReport, Evaluation,
    MoveKind, SearchInfo,
};

use crate::search::Analyzer;
use tracing::warn;

/// Analyze the request's position and build the response
pub fn analyze_position(analyzer: &Analyzer, request: &AnalyzeRequest) -> AnalysisResponse {
    let Some(fen) = request.fen() else {
        return AnalysisResponse::error("FEN string is required");
    };

    match analyzer.analyze(fen, request.normalized_depth()) {
        Ok(result) => AnalysisResponse::from(&result),
        Err(e) => {
            warn!("[API] Analysis failed: {}", e);
            AnalysisResponse::error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fen_is_an_error_response() {
        let response = analyze_position(&Analyzer::default(), &AnalyzeRequest::new("", Some(3)));
        assert_eq!(response, AnalysisResponse::error("FEN string is required"));
    }

    #[test]
    fn test_invalid_fen_is_an_error_response() {
        let response =
            analyze_position(&Analyzer::default(), &AnalyzeRequest::new("garbage", Some(3)));
        match response {
            AnalysisResponse::Error(report) => {
                assert!(report.error.contains("garbage"));
                assert_eq!(report.evaluation, 0);
                assert!(report.best_moves.is_empty());
            }
            AnalysisResponse::Success(_) => panic!("invalid FEN must not succeed"),
        }
    }

    #[test]
    fn test_book_response_shape() {
        let request = AnalyzeRequest::new(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            Some(8),
        );
        let json = serde_json::to_value(analyze_position(&Analyzer::default(), &request)).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["evaluation"]["value"], 0.15);
        assert_eq!(json["evaluation"]["type"], "cp");
        assert_eq!(json["evaluation"]["display"], "+0.15");
        assert_eq!(json["depth"], 0);
        assert_eq!(json["bestMoves"][0]["move"], "e2e4");
        assert_eq!(json["bestMoves"][0]["san"], "e4");
        assert_eq!(json["bestMoves"][0]["type"], "book");
        assert_eq!(json["bestMoves"][0]["principalVariation"][0], "e2e4");
        assert_eq!(json["searchInfo"]["totalNodes"], 0);
        assert_eq!(json["searchInfo"]["source"], "opening_book");
    }

    #[test]
    fn test_search_response_shape() {
        let request = AnalyzeRequest::new("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1", Some(2));
        let response = analyze_position(&Analyzer::default(), &request);
        let AnalysisResponse::Success(report) = response else {
            panic!("expected a search result");
        };

        assert_eq!(report.depth, 2);
        assert_eq!(report.best_moves.len(), 3);
        assert_eq!(report.best_moves[0].uci, "e4d5");
        assert_eq!(report.best_moves[0].san, "exd5");
        assert_eq!(report.best_moves[0].kind, MoveKind::Search);
        assert_eq!(report.search_info.source, "engine_search");
        assert!(report.search_info.total_nodes > 0);
        assert_eq!(report.best_moves[0].nodes, report.search_info.total_nodes);
        assert_eq!(report.evaluation.value, report.best_moves[0].eval_score);
    }
}
