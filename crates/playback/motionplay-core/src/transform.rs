//! Physical units → normalized viewport coordinates.
//!
//! `viewport = physical * scale + offset` per axis. The Y axis is NOT flipped here; surfaces
//! with a downward Y call [`Viewport::flip_y`] as a separate render step.

use serde::{Deserialize, Serialize};

use crate::extent::{compute_extent, AxisRange};
use crate::frame::Frame;
use crate::kind::MotionKind;

/// Fixed-size drawing area with uniform padding on every side.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            padding: 10.0,
        }
    }
}

impl Viewport {
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Upward-Y viewport coordinate → downward-Y surface coordinate.
    #[inline]
    pub fn flip_y(&self, y: f64) -> f64 {
        self.height - y
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale_x: f64,
    pub offset_x: f64,
    pub scale_y: f64,
    pub offset_y: f64,
}

impl Transform {
    /// Both axes pinned to the viewport center.
    pub fn centered(viewport: &Viewport) -> Self {
        Self {
            scale_x: 0.0,
            offset_x: viewport.center_x(),
            scale_y: 0.0,
            offset_y: viewport.center_y(),
        }
    }

    #[inline]
    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.scale_x + self.offset_x
    }

    #[inline]
    pub fn apply_y(&self, y: f64) -> f64 {
        y * self.scale_y + self.offset_y
    }

    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.apply_x(x), self.apply_y(y))
    }

    #[inline]
    pub fn is_x_centered(&self) -> bool {
        self.scale_x == 0.0
    }

    #[inline]
    pub fn is_y_centered(&self) -> bool {
        self.scale_y == 0.0
    }

    /// Viewport X → physical X. `None` when the axis is centered (no information survives).
    pub fn invert_x(&self, vx: f64) -> Option<f64> {
        if self.is_x_centered() {
            None
        } else {
            Some((vx - self.offset_x) / self.scale_x)
        }
    }

    pub fn invert_y(&self, vy: f64) -> Option<f64> {
        if self.is_y_centered() {
            None
        } else {
            Some((vy - self.offset_y) / self.scale_y)
        }
    }

    /// Both axes; `None` if either is centered.
    pub fn invert(&self, vx: f64, vy: f64) -> Option<(f64, f64)> {
        Some((self.invert_x(vx)?, self.invert_y(vy)?))
    }
}

/// Transform for the default 100×100 viewport with padding 10.
pub fn compute_transform(frames: &[Frame], kind: MotionKind) -> Transform {
    compute_transform_with(frames, kind, &Viewport::default())
}

/// Fit the kind's plotted axes into `viewport`. Deterministic; never divides by zero.
pub fn compute_transform_with(frames: &[Frame], kind: MotionKind, viewport: &Viewport) -> Transform {
    let extent = compute_extent(frames, kind);
    let (scale_x, offset_x) = fit_axis(extent.x, viewport.width, viewport.padding);
    let (scale_y, offset_y) = fit_axis(extent.y, viewport.height, viewport.padding);
    Transform {
        scale_x,
        offset_x,
        scale_y,
        offset_y,
    }
}

fn fit_axis(range: Option<AxisRange>, size: f64, padding: f64) -> (f64, f64) {
    match range {
        Some(r) if !r.is_degenerate() => {
            let scale = (size - 2.0 * padding) / r.span();
            (scale, padding - r.min * scale)
        }
        _ => (0.0, size / 2.0),
    }
}
