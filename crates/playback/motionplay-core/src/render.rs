//! Render-side values: marker/trajectory points, per-tick updates, axis guides, and the
//! `RenderSurface` seam between the scheduler and whatever actually draws.
//!
//! All coordinates here are surface coordinates: transformed into the viewport and already
//! flipped to downward Y.

use std::fmt::Write as _;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{AxisLayout, MotionDescriptor};
use crate::frame::Frame;
use crate::transform::{Transform, Viewport};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One surface point per frame, index-aligned with the frame sequence.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<Point>,
}

impl Trajectory {
    /// Transform every frame once. Kinds without an animated layout get no points.
    /// A frame missing a plotted field is placed at physical 0 on that axis.
    pub fn build(
        frames: &[Frame],
        desc: &MotionDescriptor,
        transform: &Transform,
        viewport: &Viewport,
    ) -> Self {
        if !desc.is_animated() {
            return Self::default();
        }
        let x_field = desc.plotted_x();
        let y_field = desc.plotted_y();
        let points = frames
            .iter()
            .map(|f| {
                let px = x_field.and_then(|name| f.get(name)).unwrap_or(0.0);
                let py = y_field.and_then(|name| f.get(name)).unwrap_or(0.0);
                let (vx, vy) = transform.apply(px, py);
                Point::new(vx, viewport.flip_y(vy))
            })
            .collect();
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// SVG path data: `M x,y L x,y ...`. Empty trajectories give an empty string.
    pub fn to_svg_path(&self) -> String {
        let mut d = String::with_capacity(self.points.len() * 12);
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            let cmd = if i == 0 { 'M' } else { 'L' };
            // Writing to a String cannot fail.
            let _ = write!(d, "{cmd}{},{}", p.x, p.y);
        }
        d
    }
}

/// Everything a surface needs to draw one tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderUpdate {
    /// Elapsed playback time (may sit between frame timestamps).
    pub time: f64,
    pub frame_index: usize,
    pub marker_x: f64,
    pub marker_y: f64,
    /// Shared per result; never rebuilt per tick.
    pub trajectory: Arc<Trajectory>,
    pub readout: String,
}

/// Drawing backend driven by the player. Scheduling never depends on a surface being present.
pub trait RenderSurface {
    fn apply(&mut self, update: &RenderUpdate);

    /// Called when the loaded result has nothing to animate.
    fn unavailable(&mut self) {}
}

/// One axis line with its label, in surface coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisLine {
    pub from: Point,
    pub to: Point,
    pub label: String,
    pub label_at: Point,
}

/// Which axis lines a surface should show for a layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisGuides {
    pub x_axis: Option<AxisLine>,
    pub y_axis: Option<AxisLine>,
}

impl AxisGuides {
    const LABEL_INSET: f64 = 2.0;
    const TOP_LABEL_Y: f64 = 5.0;

    pub fn for_layout(layout: AxisLayout, transform: &Transform, viewport: &Viewport) -> Self {
        let inset = Self::LABEL_INSET;
        let (w, h) = (viewport.width, viewport.height);
        let (cx, cy) = (viewport.center_x(), viewport.center_y());
        match layout {
            AxisLayout::Horizontal => Self {
                x_axis: Some(AxisLine {
                    from: Point::new(0.0, cy),
                    to: Point::new(w, cy),
                    label: "Position (m)".into(),
                    label_at: Point::new(w - inset, cy + inset),
                }),
                y_axis: None,
            },
            AxisLayout::Vertical => Self {
                x_axis: None,
                y_axis: Some(AxisLine {
                    from: Point::new(cx, 0.0),
                    to: Point::new(cx, h),
                    label: "Height (m)".into(),
                    label_at: Point::new(cx + inset, Self::TOP_LABEL_Y),
                }),
            },
            AxisLayout::Planar => {
                // Axes cross at the transformed physical origin.
                let ox = transform.apply_x(0.0);
                let oy = viewport.flip_y(transform.apply_y(0.0));
                Self {
                    x_axis: Some(AxisLine {
                        from: Point::new(ox, oy),
                        to: Point::new(w, oy),
                        label: "X".into(),
                        label_at: Point::new(w - inset, oy + inset),
                    }),
                    y_axis: Some(AxisLine {
                        from: Point::new(ox, 0.0),
                        to: Point::new(ox, h),
                        label: "Y".into(),
                        label_at: Point::new(ox - inset, Self::TOP_LABEL_Y),
                    }),
                }
            }
            AxisLayout::None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::descriptor;
    use crate::kind::MotionKind;
    use crate::transform::compute_transform;

    #[test]
    fn trajectory_is_flipped_and_index_aligned() {
        let frames = vec![
            Frame::new(0.0).with("height", 10.0),
            Frame::new(1.0).with("height", 0.0),
        ];
        let t = compute_transform(&frames, MotionKind::FreeFall);
        let traj = Trajectory::build(
            &frames,
            descriptor(MotionKind::FreeFall),
            &t,
            &Viewport::default(),
        );
        // Top of the fall is near the top of the surface.
        assert_eq!(traj.point(0), Some(Point::new(50.0, 10.0)));
        assert_eq!(traj.point(1), Some(Point::new(50.0, 90.0)));
        assert_eq!(traj.to_svg_path(), "M50,10 L50,90");
    }

    #[test]
    fn chart_only_kinds_have_no_trajectory() {
        let frames = vec![Frame::new(0.0).with("current", 1.0)];
        let t = compute_transform(&frames, MotionKind::RcCircuit);
        let traj = Trajectory::build(
            &frames,
            descriptor(MotionKind::RcCircuit),
            &t,
            &Viewport::default(),
        );
        assert!(traj.is_empty());
        assert_eq!(traj.to_svg_path(), "");
    }

    #[test]
    fn planar_guides_cross_at_origin() {
        let t = Transform {
            scale_x: 8.0,
            offset_x: 10.0,
            scale_y: 8.0,
            offset_y: 10.0,
        };
        let g = AxisGuides::for_layout(AxisLayout::Planar, &t, &Viewport::default());
        let x = g.x_axis.expect("x axis");
        let y = g.y_axis.expect("y axis");
        assert_eq!(x.from, Point::new(10.0, 90.0));
        assert_eq!(y.from.x, 10.0);
        assert_eq!(x.label, "X");
    }

    #[test]
    fn one_axis_guides_hide_the_other_axis() {
        let vp = Viewport::default();
        let t = Transform::centered(&vp);
        let h = AxisGuides::for_layout(AxisLayout::Horizontal, &t, &vp);
        assert!(h.y_axis.is_none());
        assert_eq!(h.x_axis.map(|a| a.label), Some("Position (m)".to_string()));
        let v = AxisGuides::for_layout(AxisLayout::Vertical, &t, &vp);
        assert!(v.x_axis.is_none());
        assert_eq!(AxisGuides::for_layout(AxisLayout::None, &t, &vp), AxisGuides::default());
    }
}
