//! Inbound analysis requests

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Depth used when the request omits it or asks for something unusable
pub const DEFAULT_REQUEST_DEPTH: u8 = 8;
/// Highest depth a request may ask for before falling back to the default
pub const MAX_REQUEST_DEPTH: i64 = 15;

/// `{ "fen": "...", "depth": 8 }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub fen: String,
    /// Accepts integers, floats and numeric strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<Value>,
}

impl AnalyzeRequest {
    pub fn new(fen: impl Into<String>, depth: Option<u8>) -> Self {
        Self {
            fen: fen.into(),
            depth: depth.map(Value::from),
        }
    }

    /// Requested depth, or 8 when missing, unparseable or outside `1..=15`
    pub fn normalized_depth(&self) -> u8 {
        let requested = match &self.depth {
            Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        match requested {
            Some(depth @ 1..=MAX_REQUEST_DEPTH) => depth as u8,
            _ => DEFAULT_REQUEST_DEPTH,
        }
    }

    /// The FEN to analyze, or `None` if the request carries none
    pub fn fen(&self) -> Option<&str> {
        let fen = self.fen.trim();
        (!fen.is_empty()).then_some(fen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> AnalyzeRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_depth_defaults_to_eight() {
        let req = request(r#"{ "fen": "8/8/8/8/8/8/8/8 w - - 0 1" }"#);
        assert_eq!(req.normalized_depth(), 8);
    }

    #[test]
    fn test_depth_validation() {
        assert_eq!(request(r#"{ "fen": "x", "depth": 5 }"#).normalized_depth(), 5);
        assert_eq!(request(r#"{ "fen": "x", "depth": 15 }"#).normalized_depth(), 15);
        assert_eq!(request(r#"{ "fen": "x", "depth": 16 }"#).normalized_depth(), 8);
        assert_eq!(request(r#"{ "fen": "x", "depth": 0 }"#).normalized_depth(), 8);
        assert_eq!(request(r#"{ "fen": "x", "depth": -3 }"#).normalized_depth(), 8);
        assert_eq!(request(r#"{ "fen": "x", "depth": "6" }"#).normalized_depth(), 6);
        assert_eq!(request(r#"{ "fen": "x", "depth": 4.9 }"#).normalized_depth(), 4);
        assert_eq!(request(r#"{ "fen": "x", "depth": "deep" }"#).normalized_depth(), 8);
        assert_eq!(request(r#"{ "fen": "x", "depth": null }"#).normalized_depth(), 8);
    }

    #[test]
    fn test_empty_fen_is_missing() {
        assert_eq!(request(r#"{ "depth": 3 }"#).fen(), None);
        assert_eq!(request(r#"{ "fen": "   " }"#).fen(), None);
        assert_eq!(AnalyzeRequest::new(" abc ", Some(2)).fen(), Some("abc"));
    }
}
