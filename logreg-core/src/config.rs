//! Neuron configuration (neuron.toml)
//!
//! ```toml
//! [neuron]
//! algorithm = "linear_algebra"
//! threshold = 0.5
//! weights = [1.0, 1.0, 0.0]
//! bias = false
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LogRegError, Result};
use crate::neuron::{Algorithm, Neuron, NeuronBuilder};

/// Parsed neuron.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronConfig {
    pub neuron: NeuronSection,
}

/// `[neuron]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronSection {
    /// Scoring algorithm member name (default: linear_algebra)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Firing threshold
    pub threshold: f64,

    /// Weight vector
    pub weights: Vec<f64>,

    /// Decide through the bias unit (`decide_bias`) instead of `decide`
    #[serde(default)]
    pub bias: bool,
}

fn default_algorithm() -> String {
    Algorithm::default().name().to_string()
}

/// Outcome of [`NeuronConfig::classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Decision {
    /// From `decide`: 1 or -1
    Fired(i8),

    /// From `decide_bias`
    Biased(bool),
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Fired(value) => write!(f, "{}", value),
            Decision::Biased(value) => write!(f, "{}", value),
        }
    }
}

impl FromStr for NeuronConfig {
    type Err = LogRegError;

    fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl NeuronConfig {
    pub fn new(threshold: f64, weights: Vec<f64>) -> Self {
        NeuronConfig {
            neuron: NeuronSection {
                algorithm: default_algorithm(),
                threshold,
                weights,
                bias: false,
            },
        }
    }

    /// Load config from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LogRegError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        content.parse()
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build a neuron bound to the configured algorithm.
    pub fn build(&self) -> Result<Neuron> {
        self.build_with(NeuronBuilder::new())
    }

    /// Build through a builder that may carry extra scorers.
    pub fn build_with(&self, builder: NeuronBuilder) -> Result<Neuron> {
        builder.build(&self.neuron.algorithm)
    }

    /// Run the configured decision rule on `inputs`.
    pub fn classify(&self, neuron: &Neuron, inputs: &[f64]) -> Result<Decision> {
        let section = &self.neuron;
        if section.bias {
            let fired = neuron.decide_bias(&section.weights, inputs, section.threshold)?;
            Ok(Decision::Biased(fired))
        } else {
            let fired = neuron.decide(&section.weights, inputs, section.threshold)?;
            Ok(Decision::Fired(fired))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[neuron]
threshold = 0.5
weights = [1.0, 1.0, 0.0]
"#;

    #[test]
    fn test_parse_defaults() {
        let config: NeuronConfig = SAMPLE.parse().unwrap();
        assert_eq!(config.neuron.algorithm, "linear_algebra");
        assert_eq!(config.neuron.threshold, 0.5);
        assert_eq!(config.neuron.weights, vec![1.0, 1.0, 0.0]);
        assert!(!config.neuron.bias);
    }

    #[test]
    fn test_classify() {
        let config: NeuronConfig = SAMPLE.parse().unwrap();
        let neuron = config.build().unwrap();
        let decision = config.classify(&neuron, &[0.25, 0.3, 0.1]).unwrap();
        assert_eq!(decision, Decision::Fired(1));
        assert_eq!(decision.to_string(), "1");
    }

    #[test]
    fn test_classify_with_bias() {
        let mut config: NeuronConfig = SAMPLE.parse().unwrap();
        config.neuron.bias = true;
        let neuron = config.build().unwrap();
        let decision = config.classify(&neuron, &[0.25, 0.3, 0.1]).unwrap();
        assert_eq!(decision, Decision::Biased(true));
        assert_eq!(decision.to_string(), "true");
    }

    #[test]
    fn test_unknown_algorithm() {
        let config: NeuronConfig = r#"
[neuron]
algorithm = "quadratic"
threshold = 0.5
weights = [1.0]
"#
        .parse()
        .unwrap();
        assert!(matches!(
            config.build(),
            Err(LogRegError::InvalidReference { .. })
        ));
    }

    #[test]
    fn test_missing_threshold() {
        let result = "[neuron]\nweights = [1.0]\n".parse::<NeuronConfig>();
        match result {
            Err(LogRegError::Config(message)) => {
                assert!(message.starts_with("Failed to parse neuron config"));
                assert!(message.contains("threshold"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = NeuronConfig::new(0.25, vec![0.5, -1.0]);
        config.neuron.bias = true;
        let text = config.to_toml().unwrap();
        let parsed: NeuronConfig = text.parse().unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_file() {
        let result = NeuronConfig::from_file(Path::new("/nonexistent/neuron.toml"));
        assert!(matches!(result, Err(LogRegError::Config(_))));
    }
}
