//! MotionPlayer: owns the active playback session and its public API.
//!
//! Methods:
//! - load / load_response / load_response_json / unload (session lifecycle)
//! - play / pause / reset / seek / set_speed (controls, forwarded to the timeline)
//! - update / update_for / drive (per-tick clock)
//! - status / timeline_state / chart_rows / is_chartable / axis_guides (queries)
//!
//! Loading a result always disposes the previous session before the new one is built, so no
//! update from an old result can be observed after a replacement.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::descriptor;
use crate::chart::{chart_columns, to_chart_rows, ChartRow};
use crate::config::Config;
use crate::error::MotionError;
use crate::ids::{IdAllocator, SessionId};
use crate::kind::MotionKind;
use crate::normalize::normalize;
use crate::outputs::{Notice, TickOutput};
use crate::raw::RawResult;
use crate::render::{AxisGuides, RenderSurface, RenderUpdate};
use crate::response::{parse_simulation_response_json, SimulationResponse};
use crate::timeline::{Timeline, TimelineState};

/// Coarse player status for UI controls.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// No result has been loaded yet (or it was unloaded).
    NotLoaded,
    /// A result was loaded but yielded no frames: "no animation available".
    Empty,
    /// Frames are loaded and the timeline can play.
    Ready,
}

impl PlayerStatus {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerStatus::NotLoaded => "not_loaded",
            PlayerStatus::Empty => "empty",
            PlayerStatus::Ready => "ready",
        }
    }
}

/// Everything derived from one loaded result. Torn down wholesale on replacement.
pub struct Session {
    id: SessionId,
    kind: MotionKind,
    timeline: Timeline,
    chart_rows: Vec<ChartRow>,
    notices: Vec<Notice>,
    summary: IndexMap<String, f64>,
}

impl Session {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn chart_rows(&self) -> &[ChartRow] {
        &self.chart_rows
    }

    /// Chart legend columns in first-seen order.
    pub fn chart_columns(&self) -> Vec<String> {
        chart_columns(self.timeline.frames())
    }

    pub fn is_chartable(&self) -> bool {
        descriptor(self.kind).chartable
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Scalar results reported next to the series (empty when loaded from a bare payload).
    pub fn summary(&self) -> &IndexMap<String, f64> {
        &self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}

pub struct MotionPlayer {
    cfg: Config,
    ids: IdAllocator,
    session: Option<Session>,
    outputs: TickOutput,
}

impl Default for MotionPlayer {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl MotionPlayer {
    /// Create a player. The config is used as given; see [`MotionPlayer::try_new`].
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            session: None,
            outputs: TickOutput::default(),
        }
    }

    /// Create a player after validating `cfg`.
    pub fn try_new(cfg: Config) -> Result<Self, MotionError> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    // ---- session lifecycle ----

    /// Replace the active result with `raw` interpreted as `kind`.
    pub fn load(&mut self, raw: &RawResult, kind: MotionKind) -> SessionId {
        self.install(raw, kind, Vec::new(), IndexMap::new())
    }

    /// Replace the active result with a service response. Unknown slugs and failed calls
    /// degrade (generic plot, empty result) and are reported as notices.
    pub fn load_response(&mut self, resp: &SimulationResponse, slug: &str) -> SessionId {
        let mut notices = Vec::new();
        let kind = match MotionKind::from_slug(slug) {
            Some(kind) => kind,
            None => {
                log::warn!("unknown motion kind '{slug}', using generic position plot");
                notices.push(Notice::UnknownMotionKind {
                    slug: slug.to_string(),
                });
                MotionKind::Generic
            }
        };
        if let Some(message) = resp.failure_message() {
            log::warn!("simulation service reported failure: {message}");
            notices.push(Notice::ServiceError { message });
        }
        self.install(&resp.raw_result(), kind, notices, resp.summary())
    }

    /// Parse `text` as a service response and load it.
    pub fn load_response_json(&mut self, text: &str, slug: &str) -> Result<SessionId, MotionError> {
        let resp = parse_simulation_response_json(text)?;
        Ok(self.load_response(&resp, slug))
    }

    /// Drop the active session; status returns to `NotLoaded`.
    pub fn unload(&mut self) {
        if let Some(mut old) = self.session.take() {
            old.timeline.dispose();
            log::debug!("session {:?} disposed", old.id);
        }
        self.outputs.clear();
    }

    fn install(
        &mut self,
        raw: &RawResult,
        kind: MotionKind,
        mut notices: Vec<Notice>,
        summary: IndexMap<String, f64>,
    ) -> SessionId {
        // Old session goes first; nothing it produced may leak into the new one.
        self.unload();

        let frames = normalize(raw, kind);
        if frames.is_empty() {
            if !notices.iter().any(|n| matches!(n, Notice::ServiceError { .. })) {
                log::warn!("result for {kind:?} has no frames; nothing to animate");
            }
            notices.push(Notice::MalformedPayload);
        } else if !descriptor(kind).is_animated() {
            notices.push(Notice::NotAnimated { kind });
        }

        let id = self.ids.alloc_session();
        let chart_rows = to_chart_rows(&frames);
        let timeline = Timeline::new(frames, kind, &self.cfg);
        log::debug!(
            "session {:?} loaded: {:?}, {} frames",
            id,
            kind,
            timeline.frames().len()
        );
        self.session = Some(Session {
            id,
            kind,
            timeline,
            chart_rows,
            notices,
            summary,
        });
        id
    }

    // ---- controls ----

    pub fn play(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.timeline.play();
        }
    }

    pub fn pause(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.timeline.pause();
        }
    }

    pub fn reset(&mut self) -> Option<RenderUpdate> {
        self.session.as_mut()?.timeline.reset()
    }

    pub fn seek(&mut self, time: f64) -> Option<RenderUpdate> {
        self.session.as_mut()?.timeline.seek(time)
    }

    pub fn set_speed(&mut self, speed: f64) {
        if let Some(s) = self.session.as_mut() {
            s.timeline.set_speed(speed);
        }
    }

    // ---- clock ----

    /// Advance the active session by `dt` seconds.
    pub fn update(&mut self, dt: f64) -> &TickOutput {
        self.outputs.clear();
        if let Some(s) = self.session.as_mut() {
            self.outputs.session = Some(s.id);
            self.outputs.update = s.timeline.tick(dt);
            self.outputs.events = s.timeline.drain_events();
        }
        &self.outputs
    }

    /// Tick addressed to a specific session. Returns `None` (and mutates nothing) when that
    /// session has since been replaced.
    pub fn update_for(&mut self, session: SessionId, dt: f64) -> Option<&TickOutput> {
        if self.session.as_ref().map(|s| s.id) != Some(session) {
            log::debug!("tick for stale session {:?} dropped", session);
            return None;
        }
        Some(self.update(dt))
    }

    /// Tick and forward the resulting update (if any) to `surface`.
    pub fn drive(&mut self, dt: f64, surface: &mut dyn RenderSurface) -> &TickOutput {
        if self.status() == PlayerStatus::Empty {
            self.outputs.clear();
            surface.unavailable();
            return &self.outputs;
        }
        let out = self.update(dt);
        if let Some(update) = out.update.as_ref() {
            surface.apply(update);
        }
        out
    }

    // ---- queries ----

    pub fn status(&self) -> PlayerStatus {
        match &self.session {
            None => PlayerStatus::NotLoaded,
            Some(s) if s.is_empty() => PlayerStatus::Empty,
            Some(_) => PlayerStatus::Ready,
        }
    }

    pub fn timeline_state(&self) -> TimelineState {
        self.session
            .as_ref()
            .map(|s| s.timeline.state())
            .unwrap_or_default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether the active result should be offered to the static chart.
    pub fn is_chartable(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_chartable())
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn chart_rows(&self) -> &[ChartRow] {
        self.session.as_ref().map(|s| s.chart_rows()).unwrap_or(&[])
    }

    pub fn notices(&self) -> &[Notice] {
        self.session.as_ref().map(|s| s.notices()).unwrap_or(&[])
    }

    /// Update for the frame under the cursor without advancing the clock.
    pub fn current_update(&self) -> Option<RenderUpdate> {
        self.session.as_ref()?.timeline.current_update()
    }

    /// Axis lines for the active kind's layout, mapped through its transform.
    pub fn axis_guides(&self) -> Option<AxisGuides> {
        let s = self.session.as_ref()?;
        Some(AxisGuides::for_layout(
            descriptor(s.kind).layout,
            s.timeline.transform(),
            &self.cfg.viewport,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform() -> RawResult {
        RawResult::from_arrays([
            ("times", vec![0.0, 1.0, 2.0]),
            ("positions", vec![0.0, 5.0, 10.0]),
        ])
    }

    #[test]
    fn status_tracks_lifecycle() {
        let mut p = MotionPlayer::default();
        assert_eq!(p.status(), PlayerStatus::NotLoaded);
        p.load(&uniform(), MotionKind::UniformLinear);
        assert_eq!(p.status(), PlayerStatus::Ready);
        p.load(&RawResult::Empty, MotionKind::UniformLinear);
        assert_eq!(p.status(), PlayerStatus::Empty);
        assert_eq!(p.notices(), &[Notice::MalformedPayload]);
        p.unload();
        assert_eq!(p.status(), PlayerStatus::NotLoaded);
    }

    #[test]
    fn chartable_follows_the_loaded_kind() {
        let mut p = MotionPlayer::default();
        assert!(!p.is_chartable());
        p.load(&uniform(), MotionKind::UniformLinear);
        assert!(p.is_chartable());
        p.load(&uniform(), MotionKind::ElasticCollision1d);
        assert!(!p.is_chartable());
        assert_eq!(p.chart_rows().len(), 3);
    }

    #[test]
    fn replacement_resets_timeline_state() {
        let mut p = MotionPlayer::default();
        p.load(&uniform(), MotionKind::UniformLinear);
        p.play();
        p.update(0.5);
        assert_eq!(p.timeline_state(), TimelineState::Playing);
        p.load(&uniform(), MotionKind::UniformLinear);
        assert_eq!(p.timeline_state(), TimelineState::Idle);
    }

    #[test]
    fn stale_session_ticks_are_dropped() {
        let mut p = MotionPlayer::default();
        let old = p.load(&uniform(), MotionKind::UniformLinear);
        let new = p.load(&uniform(), MotionKind::UniformLinear);
        assert_ne!(old, new);
        p.play();
        assert!(p.update_for(old, 1.0).is_none());
        assert_eq!(p.session().map(|s| s.timeline().elapsed()), Some(0.0));
        let out = p.update_for(new, 1.0).expect("current session ticks");
        assert_eq!(out.session, Some(new));
    }

    #[test]
    fn try_new_rejects_invalid_config() {
        let cfg = Config {
            max_events_per_tick: 0,
            ..Config::default()
        };
        assert!(MotionPlayer::try_new(cfg).is_err());
    }
}
