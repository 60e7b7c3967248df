//! Per-axis physical ranges over a frame sequence.

use serde::{Deserialize, Serialize};

use crate::catalog::descriptor;
use crate::frame::Frame;
use crate::kind::MotionKind;

/// Closed range `[min, max]` of observed values on one axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn point(v: f64) -> Self {
        Self { min: v, max: v }
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Zero (or non-positive) span: cannot be scaled, only centered.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span.is_nan() || span <= 0.0
    }

    #[inline]
    pub fn include(&mut self, v: f64) {
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
    }
}

/// Observed ranges of the plotted axes. `None` means the axis is unused by the layout or no
/// frame carried a finite value for it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x: Option<AxisRange>,
    pub y: Option<AxisRange>,
}

impl Extent {
    pub fn min_x(&self) -> Option<f64> {
        self.x.map(|r| r.min)
    }
    pub fn max_x(&self) -> Option<f64> {
        self.x.map(|r| r.max)
    }
    pub fn min_y(&self) -> Option<f64> {
        self.y.map(|r| r.min)
    }
    pub fn max_y(&self) -> Option<f64> {
        self.y.map(|r| r.max)
    }
}

/// Single pass over `frames` collecting min/max of the fields the kind plots.
pub fn compute_extent(frames: &[Frame], kind: MotionKind) -> Extent {
    let desc = descriptor(kind);
    let x_field = desc.plotted_x();
    let y_field = desc.plotted_y();

    let mut extent = Extent::default();
    for frame in frames {
        if let Some(v) = x_field.and_then(|f| frame.get(f)) {
            observe(&mut extent.x, v);
        }
        if let Some(v) = y_field.and_then(|f| frame.get(f)) {
            observe(&mut extent.y, v);
        }
    }

    if desc.anchor_origin {
        for range in [&mut extent.x, &mut extent.y] {
            if let Some(r) = range.as_mut() {
                r.include(0.0);
            }
        }
    }
    extent
}

fn observe(range: &mut Option<AxisRange>, v: f64) {
    if !v.is_finite() {
        return;
    }
    match range {
        Some(r) => r.include(v),
        None => *range = Some(AxisRange::point(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_kind_reports_only_x() {
        let frames = vec![
            Frame::new(0.0).with("position", 3.0).with("height", 99.0),
            Frame::new(1.0).with("position", -2.0),
        ];
        let e = compute_extent(&frames, MotionKind::UniformLinear);
        assert_eq!(e.x, Some(AxisRange { min: -2.0, max: 3.0 }));
        assert_eq!(e.y, None);
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        let frames = vec![
            Frame::new(0.0).with("height", f64::NAN),
            Frame::new(1.0).with("height", 4.0),
        ];
        let e = compute_extent(&frames, MotionKind::FreeFall);
        assert_eq!(e.min_y(), Some(4.0));
        assert!(e.y.is_some_and(|r| r.is_degenerate()));
    }

    #[test]
    fn projectile_ranges_include_origin() {
        let frames = vec![
            Frame::new(0.0).with("position_x", 2.0).with("position_y", 1.0),
            Frame::new(1.0).with("position_x", 8.0).with("position_y", 5.0),
        ];
        let e = compute_extent(&frames, MotionKind::Projectile);
        assert_eq!(e.min_x(), Some(0.0));
        assert_eq!(e.max_x(), Some(8.0));
        assert_eq!(e.min_y(), Some(0.0));
    }

    #[test]
    fn unobserved_axis_is_absent() {
        let frames = vec![Frame::new(0.0).with("velocity", 1.0)];
        assert_eq!(compute_extent(&frames, MotionKind::UniformLinear), Extent::default());
    }
}
