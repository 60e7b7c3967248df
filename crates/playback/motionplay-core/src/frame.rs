//! Normalized time-stamped frame.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One snapshot of simulation state. `fields` keeps payload order and never contains `time`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub time: f64,
    #[serde(flatten)]
    pub fields: IndexMap<String, f64>,
}

impl Frame {
    pub fn new(time: f64) -> Self {
        Self {
            time,
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: f64) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    #[inline]
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }

    #[inline]
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }
}
