use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use crate::{evaluator::EvaluatorType, Error, InternalResult};

/// Top-level calculator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Capacity of a spawned session's key event channel.
    #[serde(default = "default_key_buffer_size")]
    pub key_buffer_size: usize,

    #[serde(default)]
    pub evaluator_configs: EvaluatorConfigs,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            key_buffer_size: default_key_buffer_size(),
            evaluator_configs: EvaluatorConfigs::default(),
        }
    }
}

impl CalculatorConfig {
    pub fn from_file(path: &str) -> InternalResult<Self> {
        from_file(path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfigs {
    #[serde(default)]
    pub evaluators: HashMap<String, EvaluatorConfig>,
    #[serde(default = "some_default_evaluator_name")]
    pub primary_evaluator: Option<String>,
}

impl Default for EvaluatorConfigs {
    fn default() -> Self {
        Self {
            evaluators: {
                let mut map = HashMap::new();
                map.insert(default_evaluator_name(), EvaluatorConfig::default());
                map
            },
            primary_evaluator: some_default_evaluator_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    #[serde(default = "EvaluatorType::default")]
    pub evaluator_type: EvaluatorType,

    #[serde(default = "default_evaluator_name")]
    pub name: String,

    /// Knobs owned by the evaluator collaborator (e.g. its own request
    /// timeout), passed through opaquely.
    #[serde(default)]
    pub eval_specific: HashMap<String, serde_json::Value>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            evaluator_type: EvaluatorType::default(),
            name: default_evaluator_name(),
            eval_specific: HashMap::new(),
        }
    }
}

fn default_key_buffer_size() -> usize {
    32
}

fn default_evaluator_name() -> String {
    "local".to_string()
}

fn some_default_evaluator_name() -> Option<String> {
    Some(default_evaluator_name())
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::Internal(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::Internal(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::Internal(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}
