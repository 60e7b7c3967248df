//! Playback timeline: a host-clocked scheduler over a normalized frame sequence.
//!
//! The host calls [`Timeline::tick`] from its refresh callback with the wall-clock delta.
//! Elapsed time advances only while `Playing`; the current frame is the last one whose
//! timestamp is `<= elapsed`. While playing, lookup walks a cached cursor forward; any jump
//! backwards (seek, reset) falls back to a binary search.
//!
//! State machine:
//! - `Idle → Playing` on `play()` (non-empty only)
//! - `Playing ⇄ Paused` on `pause()` / `play()`
//! - `Playing → Completed` when elapsed reaches the last timestamp
//! - any → `Paused` at the first timestamp on `reset()`
//! - `seek()` stops advancing: `Playing`/`Completed` → `Paused`, `Idle` stays `Idle`

use std::collections::VecDeque;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{descriptor, MotionDescriptor};
use crate::config::Config;
use crate::frame::Frame;
use crate::kind::MotionKind;
use crate::readout::format_readout;
use crate::render::{Point, RenderUpdate, Trajectory};
use crate::transform::{compute_transform_with, Transform, Viewport};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TimelineState {
    #[default]
    Idle,
    Playing,
    Paused,
    Completed,
}

impl TimelineState {
    pub fn name(&self) -> &'static str {
        match self {
            TimelineState::Idle => "idle",
            TimelineState::Playing => "playing",
            TimelineState::Paused => "paused",
            TimelineState::Completed => "completed",
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, TimelineState::Playing)
    }

    #[inline]
    pub fn can_play(&self) -> bool {
        matches!(self, TimelineState::Idle | TimelineState::Paused)
    }

    #[inline]
    pub fn can_pause(&self) -> bool {
        matches!(self, TimelineState::Playing)
    }
}

/// Discrete transitions, drained by the player once per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TimelineEvent {
    Started { time: f64 },
    Paused { time: f64 },
    Resumed { time: f64 },
    Reset { time: f64 },
    Seeked { from: f64, to: f64 },
    Completed { time: f64 },
}

pub struct Timeline {
    frames: Vec<Frame>,
    desc: &'static MotionDescriptor,
    transform: Transform,
    viewport: Viewport,
    trajectory: Arc<Trajectory>,
    precision: usize,

    state: TimelineState,
    elapsed: f64,
    speed: f64,
    cursor: usize,

    events: VecDeque<TimelineEvent>,
    max_events: usize,
    disposed: bool,
}

impl Timeline {
    /// Build a timeline; transform and trajectory are computed once here.
    pub fn new(frames: Vec<Frame>, kind: MotionKind, cfg: &Config) -> Self {
        let desc = descriptor(kind);
        let transform = compute_transform_with(&frames, kind, &cfg.viewport);
        let trajectory = Arc::new(Trajectory::build(&frames, desc, &transform, &cfg.viewport));
        let elapsed = frames.first().map(|f| f.time).unwrap_or(0.0);
        // Repeated leading timestamps resolve to the latest frame, same as a lookup.
        let cursor = frames
            .partition_point(|f| f.time <= elapsed)
            .saturating_sub(1);
        Self {
            frames,
            desc,
            transform,
            viewport: cfg.viewport,
            trajectory,
            precision: cfg.readout_precision,
            state: TimelineState::Idle,
            elapsed,
            speed: cfg.default_speed,
            cursor,
            events: VecDeque::new(),
            max_events: cfg.max_events_per_tick.max(1),
            disposed: false,
        }
    }

    // ---- queries ----

    #[inline]
    pub fn state(&self) -> TimelineState {
        self.state
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn frame_index(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn trajectory(&self) -> Arc<Trajectory> {
        Arc::clone(&self.trajectory)
    }

    pub fn descriptor(&self) -> &'static MotionDescriptor {
        self.desc
    }

    /// First and last timestamps, `None` when empty.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        Some((self.frames.first()?.time, self.frames.last()?.time))
    }

    /// Index of the last frame whose time is `<= time`; 0 when `time` precedes every frame.
    /// Binary search, so frames must be in non-decreasing time order.
    pub fn lookup_index(&self, time: f64) -> usize {
        self.frames
            .partition_point(|f| f.time <= time)
            .saturating_sub(1)
    }

    // ---- controls ----

    pub fn play(&mut self) {
        if self.disposed || self.frames.is_empty() {
            return;
        }
        match self.state {
            TimelineState::Idle => {
                self.state = TimelineState::Playing;
                self.push_event(TimelineEvent::Started { time: self.elapsed });
            }
            TimelineState::Paused => {
                self.state = TimelineState::Playing;
                self.push_event(TimelineEvent::Resumed { time: self.elapsed });
            }
            TimelineState::Playing | TimelineState::Completed => {}
        }
    }

    pub fn pause(&mut self) {
        if self.disposed || !self.state.can_pause() {
            return;
        }
        self.state = TimelineState::Paused;
        self.push_event(TimelineEvent::Paused { time: self.elapsed });
    }

    /// Rewind to the first frame and hold there. Idempotent; an empty timeline stays `Idle`.
    pub fn reset(&mut self) -> Option<RenderUpdate> {
        if self.disposed {
            return None;
        }
        let first = self.frames.first()?.time;
        let index = self.lookup_index(first);
        let unchanged =
            self.state == TimelineState::Paused && self.elapsed == first && self.cursor == index;
        if !unchanged {
            self.elapsed = first;
            self.cursor = index;
            self.state = TimelineState::Paused;
            self.push_event(TimelineEvent::Reset { time: first });
        }
        self.current_update()
    }

    /// Jump to `time` (clamped into the frame range) without advancing the clock.
    pub fn seek(&mut self, time: f64) -> Option<RenderUpdate> {
        if self.disposed {
            return None;
        }
        if !time.is_finite() {
            log::warn!("ignoring seek to non-finite time {time}");
            return None;
        }
        let (first, last) = self.time_range()?;
        let to = time.clamp(first, last);
        let from = self.elapsed;
        self.elapsed = to;
        self.cursor = self.lookup_index(to);
        if matches!(self.state, TimelineState::Playing | TimelineState::Completed) {
            self.state = TimelineState::Paused;
        }
        self.push_event(TimelineEvent::Seeked { from, to });
        self.current_update()
    }

    /// Playback speed multiplier applied to every tick's `dt`. Must be finite and `>= 0`.
    pub fn set_speed(&mut self, speed: f64) {
        if !speed.is_finite() || speed < 0.0 {
            log::warn!("ignoring invalid playback speed {speed}");
            return;
        }
        self.speed = speed;
    }

    /// Stop the clock for good. Later calls are no-ops and ticks yield nothing.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.events.clear();
    }

    // ---- clock ----

    /// Advance by `dt` seconds of host time. Returns an update only while playing
    /// (including the tick that completes playback).
    pub fn tick(&mut self, dt: f64) -> Option<RenderUpdate> {
        if self.disposed {
            log::debug!("tick on disposed timeline dropped");
            return None;
        }
        if !self.state.is_playing() {
            return None;
        }
        let (_, last) = self.time_range()?;
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        self.elapsed += dt * self.speed;
        if self.elapsed >= last {
            self.elapsed = last;
            self.state = TimelineState::Completed;
            self.push_event(TimelineEvent::Completed { time: last });
        }
        self.advance_cursor();
        self.current_update()
    }

    /// Update describing the frame under the cursor, regardless of state.
    pub fn current_update(&self) -> Option<RenderUpdate> {
        if self.disposed {
            return None;
        }
        let frame = self.frames.get(self.cursor)?;
        let marker = self
            .trajectory
            .point(self.cursor)
            .unwrap_or_else(|| Point::new(self.viewport.center_x(), self.viewport.center_y()));
        Some(RenderUpdate {
            time: self.elapsed,
            frame_index: self.cursor,
            marker_x: marker.x,
            marker_y: marker.y,
            trajectory: Arc::clone(&self.trajectory),
            readout: format_readout(frame, self.desc, self.precision),
        })
    }

    /// Events since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<TimelineEvent> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: TimelineEvent) {
        log::debug!("timeline {:?}", event);
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn advance_cursor(&mut self) {
        let Some(current) = self.frames.get(self.cursor) else {
            self.cursor = self.lookup_index(self.elapsed);
            return;
        };
        if current.time > self.elapsed {
            self.cursor = self.lookup_index(self.elapsed);
            return;
        }
        while self
            .frames
            .get(self.cursor + 1)
            .is_some_and(|next| next.time <= self.elapsed)
        {
            self.cursor += 1;
        }
    }
}
