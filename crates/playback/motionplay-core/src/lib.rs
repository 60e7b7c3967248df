//! motionplay core (renderer-agnostic)
//!
//! Turns simulation result payloads into replayable animations:
//! - `normalize`: raw payload (framed states, parallel arrays or positional rows) → frames
//! - `extent` / `transform`: frames → affine mapping onto a bounded viewport
//! - `timeline`: play/pause/reset/seek scheduler emitting per-tick render updates
//! - `chart`: frames → flat rows for a static XY plot
//!
//! Every per-kind decision (plotted axes, readout fields, array names) comes from the
//! single descriptor table in `catalog`.

pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod extent;
pub mod frame;
pub mod ids;
pub mod kind;
pub mod normalize;
pub mod outputs;
pub mod player;
pub mod raw;
pub mod readout;
pub mod render;
pub mod response;
pub mod timeline;
pub mod transform;

// Re-exports for consumers (adapters)
pub use catalog::{descriptor, AxisLayout, MotionDescriptor};
pub use chart::{chart_columns, to_chart_rows, to_chart_series, ChartRow, ChartSeries};
pub use config::Config;
pub use error::MotionError;
pub use extent::{compute_extent, AxisRange, Extent};
pub use frame::Frame;
pub use ids::{IdAllocator, SessionId};
pub use kind::MotionKind;
pub use normalize::normalize;
pub use outputs::{Notice, TickOutput};
pub use player::{MotionPlayer, PlayerStatus, Session};
pub use raw::RawResult;
pub use readout::{build_readout, format_readout, ReadoutLine};
pub use render::{AxisGuides, Point, RenderSurface, RenderUpdate, Trajectory};
pub use response::{parse_simulation_response_json, SimulationResponse};
pub use timeline::{Timeline, TimelineEvent, TimelineState};
pub use transform::{compute_transform, compute_transform_with, Transform, Viewport};
