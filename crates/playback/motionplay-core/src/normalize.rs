//! Frame normalizer: raw payload → ordered frame sequence.
//!
//! Pure function of its inputs. Ordering is preserved exactly as received; timestamps are
//! assumed non-decreasing upstream and are not re-sorted or validated here.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::catalog::{canonical_field, descriptor, MotionDescriptor, TIMES_ARRAY, TIME_FIELD};
use crate::frame::Frame;
use crate::kind::MotionKind;
use crate::raw::RawResult;

/// Normalize a raw result for the given kind. Unrecognized payloads yield an empty sequence.
pub fn normalize(raw: &RawResult, kind: MotionKind) -> Vec<Frame> {
    let desc = descriptor(kind);
    match raw {
        RawResult::Empty => Vec::new(),
        RawResult::Framed(states) => normalize_framed(states),
        RawResult::Parallel(arrays) => normalize_parallel(arrays, desc),
        RawResult::StateRows(rows) => normalize_rows(rows, desc),
    }
}

fn normalize_framed(states: &[Map<String, Value>]) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(states.len());
    for (idx, state) in states.iter().enumerate() {
        let mut time = None;
        let mut fields = IndexMap::with_capacity(state.len());
        for (key, value) in state {
            // Numbers only; strings, nulls and nested values are dropped.
            let Some(v) = value.as_f64() else { continue };
            let name = canonical_field(key);
            if name == TIME_FIELD {
                time = Some(v);
            } else {
                fields.insert(name.to_string(), v);
            }
        }
        match time {
            Some(time) => frames.push(Frame { time, fields }),
            None => log::debug!("state {idx} has no numeric time; skipped"),
        }
    }
    frames
}

fn normalize_parallel(arrays: &IndexMap<String, Vec<f64>>, desc: &MotionDescriptor) -> Vec<Frame> {
    let Some(times) = arrays.get(TIMES_ARRAY) else {
        log::warn!("parallel result without a '{TIMES_ARRAY}' array");
        return Vec::new();
    };

    // Resolve each binding to the first array the payload actually carries.
    let columns: Vec<(&str, &[f64])> = desc
        .arrays
        .iter()
        .filter_map(|binding| {
            binding
                .arrays
                .iter()
                .find_map(|name| arrays.get(*name))
                .map(|samples| (binding.field, samples.as_slice()))
        })
        .collect();

    times
        .iter()
        .enumerate()
        .map(|(i, &time)| {
            let fields = columns
                .iter()
                .map(|(field, samples)| (field.to_string(), samples.get(i).copied().unwrap_or(0.0)))
                .collect();
            Frame { time, fields }
        })
        .collect()
}

fn normalize_rows(rows: &[Vec<f64>], desc: &MotionDescriptor) -> Vec<Frame> {
    rows.iter()
        .filter_map(|row| {
            let (&time, rest) = row.split_first()?;
            let fields = desc
                .state_columns
                .iter()
                .zip(rest)
                .map(|(field, &v)| (field.to_string(), v))
                .collect();
            Some(Frame { time, fields })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn states(v: Value) -> RawResult {
        RawResult::from_json(&json!({ "states": v }))
    }

    #[test]
    fn framed_renames_time_and_drops_non_numeric() {
        let raw = states(json!([
            { "tiempo": 0.0, "posicion": 1.0, "label": "start", "extra": null },
            { "time": 1.0, "position": 2.0 }
        ]));
        let frames = normalize(&raw, MotionKind::UniformLinear);
        assert_eq!(
            frames,
            vec![
                Frame::new(0.0).with("position", 1.0),
                Frame::new(1.0).with("position", 2.0),
            ]
        );
    }

    #[test]
    fn framed_preserves_order_without_sorting() {
        let raw = states(json!([{ "time": 2.0 }, { "time": 1.0 }]));
        let times: Vec<f64> = normalize(&raw, MotionKind::Generic)
            .iter()
            .map(|f| f.time)
            .collect();
        assert_eq!(times, vec![2.0, 1.0]);
    }

    #[test]
    fn parallel_pads_short_arrays_with_zero() {
        let raw = RawResult::from_arrays([
            ("times", vec![0.0, 1.0, 2.0]),
            ("positions", vec![0.0, 5.0]),
            ("velocities", vec![5.0, 5.0, 5.0]),
        ]);
        let frames = normalize(&raw, MotionKind::UniformLinear);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2].get("position"), Some(0.0));
        assert_eq!(frames[2].get("velocity"), Some(5.0));
    }

    #[test]
    fn parallel_omits_absent_arrays() {
        let raw = RawResult::from_arrays([("times", vec![0.0]), ("heights", vec![10.0])]);
        let frames = normalize(&raw, MotionKind::FreeFall);
        assert_eq!(frames, vec![Frame::new(0.0).with("height", 10.0)]);
        assert!(!frames[0].has("velocity"));
    }

    #[test]
    fn parallel_uses_first_present_candidate() {
        let raw = RawResult::from_arrays([
            ("tiempos", vec![0.0]),
            ("posiciones_x_cartesianas", vec![0.3]),
            ("posiciones_y_cartesianas", vec![-1.0]),
        ]);
        let frames = normalize(&raw, MotionKind::SimplePendulum);
        assert_eq!(frames[0].get("position_x"), Some(0.3));
        assert_eq!(frames[0].get("position_y"), Some(-1.0));
    }

    #[test]
    fn parallel_without_times_is_empty() {
        let mut arrays = IndexMap::new();
        arrays.insert("positions".to_string(), vec![1.0, 2.0]);
        assert!(normalize(&RawResult::Parallel(arrays), MotionKind::UniformLinear).is_empty());
    }

    #[test]
    fn rows_map_columns_through_descriptor() {
        let raw = RawResult::StateRows(vec![vec![0.0, 0.1, 0.0, -9.8, 0.2, -1.0], vec![0.5]]);
        let frames = normalize(&raw, MotionKind::SimplePendulum);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].get("angular_position"), Some(0.1));
        assert_eq!(frames[0].get("position_y"), Some(-1.0));
        assert_eq!(frames[1], Frame::new(0.5));
    }

    #[test]
    fn rows_drop_extra_columns_and_empty_rows() {
        let raw = RawResult::StateRows(vec![vec![], vec![1.0, 4.0, 9.0, 9.0]]);
        let frames = normalize(&raw, MotionKind::UniformLinear);
        assert_eq!(
            frames,
            vec![Frame::new(1.0).with("position", 4.0).with("velocity", 9.0)]
        );
    }
}
