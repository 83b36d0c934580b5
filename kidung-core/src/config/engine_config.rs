use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum classifier max-probability required to accept a prediction.
    pub confidence_floor: f64,
    /// How many ranked candidates a prediction carries.
    pub top_candidates: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence_floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
            top_candidates: defaults::DEFAULT_TOP_CANDIDATES,
        }
    }
}

impl EngineConfig {
    /// Parse a TOML config document. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_named_constants() {
        let config = EngineConfig::default();
        assert_eq!(config.confidence_floor, defaults::DEFAULT_CONFIDENCE_FLOOR);
        assert_eq!(config.top_candidates, defaults::DEFAULT_TOP_CANDIDATES);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = EngineConfig::from_toml_str("confidence_floor = 0.01").unwrap();
        assert_eq!(config.confidence_floor, 0.01);
        assert_eq!(config.top_candidates, defaults::DEFAULT_TOP_CANDIDATES);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config.confidence_floor, defaults::DEFAULT_CONFIDENCE_FLOOR);
    }
}
