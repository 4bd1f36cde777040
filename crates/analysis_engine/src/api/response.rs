//! Wire format of analysis responses
//!
//! Scores are reported in pawns rounded to two decimals, with a signed
//! display string (`+0.15`, `-1.20`). Field names follow the JSON contract
//! consumed by the front end, including its duplicated snake/camel keys.

use crate::types::{AnalysisResult, AnalysisSource, MoveResult};
use serde::{Deserialize, Serialize};

/// Centipawns to pawns, two decimals
pub fn to_pawns(centipawns: i32) -> f64 {
    f64::from(centipawns) / 100.0
}

/// Signed two-decimal pawn display
pub fn display_pawns(centipawns: i32) -> String {
    format!("{:+.2}", to_pawns(centipawns))
}

/// Top-level response, tagged by `status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisResponse {
    Success(AnalysisReport),
    Error(ErrorReport),
}

impl AnalysisResponse {
    pub fn error(message: impl Into<String>) -> Self {
        AnalysisResponse::Error(ErrorReport {
            error: message.into(),
            evaluation: 0,
            best_moves: Vec::new(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResponse::Success(_))
    }
}

impl From<&AnalysisResult> for AnalysisResponse {
    fn from(result: &AnalysisResult) -> Self {
        AnalysisResponse::Success(AnalysisReport::from(result))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub evaluation: Evaluation,
    pub depth: u8,
    #[serde(rename = "bestMoves")]
    pub best_moves: Vec<BestMove>,
    #[serde(rename = "searchInfo")]
    pub search_info: SearchInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Search,
    Book,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestMove {
    #[serde(rename = "move")]
    pub uci: String,
    pub san: String,
    pub eval_score: f64,
    #[serde(rename = "evaluationRaw")]
    pub evaluation_raw: f64,
    pub evaluation: String,
    pub principal_variation: Vec<String>,
    #[serde(rename = "principalVariation")]
    pub principal_variation_camel: Vec<String>,
    pub depth: u8,
    pub nodes: u64,
    #[serde(rename = "type")]
    pub kind: MoveKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInfo {
    /// Milliseconds
    pub total_time: u64,
    pub total_nodes: u64,
    pub nodes_per_second: u64,
    pub depth: u8,
    pub tt_hits: u64,
    pub beta_cutoffs: u64,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    pub evaluation: i32,
    pub best_moves: Vec<BestMove>,
}

fn best_move(result: &AnalysisResult, candidate: &MoveResult, kind: MoveKind) -> BestMove {
    let pv = candidate.principal_variation_uci();
    BestMove {
        uci: candidate.uci(),
        san: result.root.san(&candidate.mv),
        eval_score: to_pawns(candidate.eval_score),
        evaluation_raw: to_pawns(candidate.eval_score),
        evaluation: display_pawns(candidate.eval_score),
        principal_variation: pv.clone(),
        principal_variation_camel: pv,
        depth: result.depth,
        nodes: result.stats.nodes,
        kind,
    }
}

impl From<&AnalysisResult> for AnalysisReport {
    fn from(result: &AnalysisResult) -> Self {
        let kind = match result.source {
            AnalysisSource::OpeningBook => MoveKind::Book,
            AnalysisSource::Search => MoveKind::Search,
        };
        let secs = result.elapsed.as_secs_f64();
        let nodes = result.stats.nodes;

        AnalysisReport {
            evaluation: Evaluation {
                value: to_pawns(result.evaluation),
                kind: "cp".to_string(),
                display: display_pawns(result.evaluation),
            },
            depth: result.depth,
            best_moves: result
                .moves
                .iter()
                .map(|candidate| best_move(result, candidate, kind))
                .collect(),
            search_info: SearchInfo {
                total_time: result.elapsed.as_millis() as u64,
                total_nodes: nodes,
                nodes_per_second: (nodes as f64 / (secs + 0.001)) as u64,
                depth: result.depth,
                tt_hits: result.stats.tt_hits,
                beta_cutoffs: result.stats.beta_cutoffs,
                source: result.source.as_str().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_conversion_and_display() {
        assert_eq!(to_pawns(15), 0.15);
        assert_eq!(to_pawns(-120), -1.2);
        assert_eq!(display_pawns(15), "+0.15");
        assert_eq!(display_pawns(-120), "-1.20");
        assert_eq!(display_pawns(0), "+0.00");
    }

    #[test]
    fn test_error_shape() {
        let json = serde_json::to_value(AnalysisResponse::error("FEN string is required")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "error",
                "error": "FEN string is required",
                "evaluation": 0,
                "best_moves": []
            })
        );
    }
}
