//! Engine description

use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInfo {
    pub name: String,
    pub version: String,
    pub features: Vec<String>,
    pub max_depth: u8,
    pub supported_formats: Vec<String>,
}

impl EngineInfo {
    pub fn new(config: &EngineConfig) -> Self {
        let features = [
            "evaluation",
            "best_moves",
            "principal_variation",
            "opening_book",
            "quiescence_search",
            "transposition_table",
        ];

        Self {
            name: "analysis_engine".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            max_depth: config.max_depth,
            supported_formats: vec!["FEN".to_string(), "UCI".to_string(), "SAN".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_reports_configured_depth() {
        let config = EngineConfig {
            max_depth: 7,
            ..EngineConfig::default()
        };
        let info = EngineInfo::new(&config);
        assert_eq!(info.max_depth, 7);
        assert!(info.supported_formats.iter().any(|f| f == "FEN"));

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
