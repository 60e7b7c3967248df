//! Output contracts from the player.
//!
//! `TickOutput` carries at most one render update for this tick plus the timeline events
//! that fired since the previous tick. `Notice` reports load-time degradations that are
//! never fatal.

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;
use crate::kind::MotionKind;
use crate::render::RenderUpdate;
use crate::timeline::TimelineEvent;

/// Returned by `MotionPlayer::update()`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickOutput {
    /// Session that produced this output; `None` when nothing is loaded.
    #[serde(default)]
    pub session: Option<SessionId>,
    #[serde(default)]
    pub update: Option<RenderUpdate>,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

impl TickOutput {
    #[inline]
    pub fn clear(&mut self) {
        self.session = None;
        self.update = None;
        self.events.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.update.is_none() && self.events.is_empty()
    }
}

/// Degradations observed while loading a result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Notice {
    /// Payload matched no known shape (or had no timestamps); nothing to animate.
    MalformedPayload,
    /// Identifier not in the catalog; the generic position plot is used.
    UnknownMotionKind { slug: String },
    /// The computation service reported a failure.
    ServiceError { message: String },
    /// Frames loaded, but the kind is chart-only.
    NotAnimated { kind: MotionKind },
}
