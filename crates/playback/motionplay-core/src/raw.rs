//! Raw result payloads as received from the computation service.
//!
//! A result carries exactly one of three shapes:
//! - `Framed`: per-instant objects `{ "time": 0.0, "height": 10.0, ... }`
//! - `Parallel`: named arrays addressed by a shared sample index (`times`, `heights`, ...)
//! - `StateRows`: positional rows `[t, v1, v2, ...]`, columns named by the kind's descriptor
//!
//! `from_json` classifies an arbitrary `serde_json::Value`. Anything unrecognizable becomes
//! `Empty`, which normalizes to zero frames.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{canonical_array, TIMES_ARRAY};

/// Keys under which per-instant states are published (current and legacy).
const STATE_KEYS: &[&str] = &["states", "frames", "estados_simulacion"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawResult {
    #[default]
    Empty,
    Framed(Vec<Map<String, Value>>),
    /// Canonical array name → samples.
    Parallel(IndexMap<String, Vec<f64>>),
    StateRows(Vec<Vec<f64>>),
}

impl RawResult {
    /// Build a parallel payload; array names are canonicalized.
    pub fn from_arrays<I, S>(arrays: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: AsRef<str>,
    {
        let map = arrays
            .into_iter()
            .map(|(name, samples)| (canonical_array(name.as_ref()).to_string(), samples))
            .collect();
        RawResult::Parallel(map)
    }

    /// Build a framed payload from JSON objects.
    pub fn from_states(states: Vec<Map<String, Value>>) -> Self {
        RawResult::Framed(states)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            RawResult::Empty => true,
            RawResult::Framed(states) => states.is_empty(),
            RawResult::Parallel(arrays) => arrays
                .get(TIMES_ARRAY)
                .map(|t| t.is_empty())
                .unwrap_or(true),
            RawResult::StateRows(rows) => rows.is_empty(),
        }
    }

    /// Classify a results object (or a bare state array).
    ///
    /// States win over arrays when both are present and the state list is non-empty.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::from_state_list(items),
            Value::Object(obj) => {
                for key in STATE_KEYS {
                    if let Some(Value::Array(items)) = obj.get(*key) {
                        if !items.is_empty() {
                            return Self::from_state_list(items);
                        }
                    }
                }
                Self::from_array_object(obj)
            }
            _ => RawResult::Empty,
        }
    }

    fn from_state_list(items: &[Value]) -> Self {
        match items.first() {
            Some(Value::Object(_)) => RawResult::Framed(
                items
                    .iter()
                    .filter_map(|item| item.as_object().cloned())
                    .collect(),
            ),
            Some(Value::Array(_)) => RawResult::StateRows(
                items
                    .iter()
                    .filter_map(|item| item.as_array().map(|cells| numeric_prefix(cells)))
                    .collect(),
            ),
            _ => RawResult::Empty,
        }
    }

    fn from_array_object(obj: &Map<String, Value>) -> Self {
        let mut arrays: IndexMap<String, Vec<f64>> = IndexMap::new();
        for (name, value) in obj {
            if let Value::Array(cells) = value {
                // Non-numeric samples read as 0, matching how short arrays are padded.
                let samples = cells.iter().map(|c| c.as_f64().unwrap_or(0.0)).collect();
                arrays.insert(canonical_array(name).to_string(), samples);
            }
        }
        if arrays.contains_key(TIMES_ARRAY) {
            RawResult::Parallel(arrays)
        } else {
            RawResult::Empty
        }
    }
}

/// Leading numeric cells of a positional row; the row ends at the first non-number.
fn numeric_prefix(cells: &[Value]) -> Vec<f64> {
    cells.iter().map_while(|c| c.as_f64()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_states_classify_as_framed() {
        let raw = RawResult::from_json(&json!({
            "estados_simulacion": [{ "tiempo": 0.0, "altura": 10.0 }],
            "tiempos": [0.0]
        }));
        assert!(matches!(raw, RawResult::Framed(ref s) if s.len() == 1));
    }

    #[test]
    fn positional_states_classify_as_rows() {
        let raw = RawResult::from_json(&json!({
            "estados_simulacion": [[0.0, 10.0, 0.0], [0.5, 8.8, "n/a"]]
        }));
        assert_eq!(
            raw,
            RawResult::StateRows(vec![vec![0.0, 10.0, 0.0], vec![0.5, 8.8]])
        );
    }

    #[test]
    fn arrays_are_canonicalized() {
        let raw = RawResult::from_json(&json!({
            "tiempos": [0.0, 1.0],
            "alturas": [10.0, 5.0],
            "periodo": 2.0
        }));
        match raw {
            RawResult::Parallel(arrays) => {
                assert_eq!(arrays.get("times"), Some(&vec![0.0, 1.0]));
                assert_eq!(arrays.get("heights"), Some(&vec![10.0, 5.0]));
                assert!(!arrays.contains_key("periodo"));
            }
            other => panic!("expected parallel arrays, got {other:?}"),
        }
    }

    #[test]
    fn empty_state_list_falls_through_to_arrays() {
        let raw = RawResult::from_json(&json!({
            "estados_simulacion": [],
            "times": [0.0],
            "positions": [1.0]
        }));
        assert!(matches!(raw, RawResult::Parallel(_)));
    }

    #[test]
    fn unrecognized_payloads_are_empty() {
        assert_eq!(RawResult::from_json(&json!(null)), RawResult::Empty);
        assert_eq!(RawResult::from_json(&json!({ "v1_final": 2.0 })), RawResult::Empty);
        assert_eq!(RawResult::from_json(&json!([1, 2, 3])), RawResult::Empty);
        assert!(RawResult::Empty.is_empty());
    }
}
