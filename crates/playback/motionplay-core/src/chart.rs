//! Static chart formatting, independent of playback state.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// One chart row; serializes flat as `{"time": 0.0, "height": 10.0, ...}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub time: f64,
    #[serde(flatten)]
    pub values: IndexMap<String, f64>,
}

impl From<&Frame> for ChartRow {
    fn from(frame: &Frame) -> Self {
        Self {
            time: frame.time,
            values: frame.fields.clone(),
        }
    }
}

/// One row per frame, every field carried over. No resampling.
pub fn to_chart_rows(frames: &[Frame]) -> Vec<ChartRow> {
    frames.iter().map(ChartRow::from).collect()
}

/// Union of field names across frames, in first-seen order (for the chart legend).
pub fn chart_columns(frames: &[Frame]) -> Vec<String> {
    let mut seen: IndexSet<&str> = IndexSet::new();
    for frame in frames {
        seen.extend(frame.fields.keys().map(String::as_str));
    }
    seen.into_iter().map(str::to_string).collect()
}

/// `(time, value)` pairs for a single field, skipping frames that lack it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub field: String,
    pub points: Vec<[f64; 2]>,
}

/// One series per column, in `chart_columns` order.
pub fn to_chart_series(frames: &[Frame]) -> Vec<ChartSeries> {
    chart_columns(frames)
        .into_iter()
        .map(|field| {
            let points = frames
                .iter()
                .filter_map(|f| f.get(&field).map(|v| [f.time, v]))
                .collect();
            ChartSeries { field, points }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_serialize_flat() {
        let rows = to_chart_rows(&[Frame::new(0.0).with("height", 10.0)]);
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json, serde_json::json!([{ "time": 0.0, "height": 10.0 }]));
    }

    #[test]
    fn columns_are_first_seen_union() {
        let frames = vec![
            Frame::new(0.0).with("position", 0.0),
            Frame::new(1.0).with("velocity", 2.0).with("position", 2.0),
        ];
        assert_eq!(chart_columns(&frames), vec!["position", "velocity"]);
    }

    #[test]
    fn series_skip_missing_samples() {
        let frames = vec![
            Frame::new(0.0).with("position", 0.0),
            Frame::new(1.0).with("velocity", 2.0),
        ];
        let series = to_chart_series(&frames);
        assert_eq!(series[0].points, vec![[0.0, 0.0]]);
        assert_eq!(series[1].field, "velocity");
        assert_eq!(series[1].points, vec![[1.0, 2.0]]);
    }
}
