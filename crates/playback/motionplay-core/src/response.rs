//! Computation service envelope.
//!
//! The service wraps results in an envelope that has used both Spanish and English keys over
//! time (`resultados`/`results`, `mensaje`/`message`, ...). Both are accepted. A failed call
//! (`success: false`, or an `error` string) degrades to an empty result.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MotionError;
use crate::raw::RawResult;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    #[serde(default, alias = "tipo_simulacion")]
    pub simulation_type: Option<String>,
    #[serde(default, alias = "parametros_entrada")]
    pub input_parameters: Option<IndexMap<String, Value>>,
    #[serde(default, alias = "resultados")]
    pub results: Option<Value>,
    /// Some endpoints publish states next to, not inside, `results`.
    #[serde(default, alias = "estados_simulacion")]
    pub states: Option<Value>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default, alias = "mensaje")]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SimulationResponse {
    pub fn from_value(value: Value) -> Result<Self, MotionError> {
        Ok(serde_json::from_value(value)?)
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        self.success == Some(false) || self.error.is_some()
    }

    /// Human-readable failure reason: `error`, else `message`.
    pub fn failure_message(&self) -> Option<String> {
        if !self.is_failure() {
            return None;
        }
        Some(
            self.error
                .clone()
                .or_else(|| self.message.clone())
                .unwrap_or_else(|| "simulation failed".to_string()),
        )
    }

    /// Classify the payload. `results` wins; top-level states are the fallback.
    pub fn raw_result(&self) -> RawResult {
        if self.is_failure() {
            return RawResult::Empty;
        }
        let from_results = self
            .results
            .as_ref()
            .map(RawResult::from_json)
            .unwrap_or_default();
        if !from_results.is_empty() {
            return from_results;
        }
        match self.states.as_ref() {
            Some(states) => {
                let from_states = RawResult::from_json(states);
                if from_states.is_empty() {
                    from_results
                } else {
                    from_states
                }
            }
            None => from_results,
        }
    }

    /// Scalar numeric results (e.g. `tiempo_vuelo`, `altura_maxima`) shown beside the animation.
    pub fn summary(&self) -> IndexMap<String, f64> {
        let Some(Value::Object(results)) = self.results.as_ref() else {
            return IndexMap::new();
        };
        results
            .iter()
            .filter_map(|(k, v)| v.as_f64().map(|n| (k.clone(), n)))
            .collect()
    }
}

/// Parse a response envelope from JSON text.
pub fn parse_simulation_response_json(text: &str) -> Result<SimulationResponse, MotionError> {
    Ok(serde_json::from_str(text)?)
}
