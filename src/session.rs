//! Tracking session lifecycle and the coordinator wiring estimator
//! output to the pointer indicator and the scroll policy.
//!
//! The tracking provider sits behind `TrackingSession`; its frame
//! callbacks are handed off to the single coordinating context as
//! `FrameEvent`s (fire-and-forget, the simulator uses a channel). All
//! shared state — rolling histories, pointer position, scroll offset —
//! is touched only from that context.

use tracing::info;

use crate::estimator::{FaceAnchor, GazeEstimator};
use crate::math::{Transform3D, Vec2};
use crate::page::PageSurface;
use crate::pointer::PointerIndicator;
use crate::screen::ScreenPlane;

// ── Session seam ─────────────────────────────────────────────

/// Tracking session configuration, mirroring the face-tracking
/// provider's surface.
#[derive(Debug, Clone)]
pub struct TrackingConfig {
    pub light_estimation: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            light_estimation: true,
        }
    }
}

/// The face-tracking provider: an opaque, capability-gated collaborator.
pub trait TrackingSession {
    /// Whether the tracking capability is available at all.
    fn is_supported(&self) -> bool;
    /// Begin (or restart) tracking, discarding any prior tracking state.
    fn run(&mut self, config: &TrackingConfig);
    /// Pause tracking; no further frame callbacks are delivered.
    fn pause(&mut self);
}

/// One callback from the tracking provider, re-dispatched onto the
/// coordinating context.
#[derive(Debug, Clone)]
pub enum FrameEvent {
    /// Device camera pose changed; the virtual screen plane follows it.
    CameraMoved(Transform3D),
    /// A face anchor was added.
    FaceAdded(FaceAnchor),
    /// An existing face anchor was updated.
    FaceUpdated(FaceAnchor),
}

// ── Coordinator ──────────────────────────────────────────────

/// Coordinator lifecycle state. A failed start (capability unsupported)
/// stays in `Stopped` silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    Stopped,
    Tracking,
}

/// Owns the session lifecycle and connects estimator output to the
/// pointer indicator and the page's scroll policy.
pub struct Coordinator<S: TrackingSession> {
    session: S,
    state: TrackingState,
    pub estimator: GazeEstimator,
    pub screen: ScreenPlane,
    pub pointer: PointerIndicator,
    pub page: PageSurface,
}

impl<S: TrackingSession> Coordinator<S> {
    pub fn new(session: S, screen: ScreenPlane, page: PageSurface) -> Self {
        Self {
            session,
            state: TrackingState::Stopped,
            estimator: GazeEstimator::new(),
            screen,
            pointer: PointerIndicator::new(Vec2::new(24.0, 24.0)),
            page,
        }
    }

    /// Begin tracking. Gated on capability: an unsupported session
    /// leaves the coordinator stopped with no error. Calling while
    /// already tracking restarts the session (prior tracking state is
    /// reset) with no other side effects.
    pub fn start(&mut self, config: &TrackingConfig) {
        if !self.session.is_supported() {
            info!("face tracking unsupported, staying stopped");
            return;
        }
        self.session.run(config);
        self.state = TrackingState::Tracking;
        info!("tracking started");
    }

    /// Pause tracking. A no-op when already stopped.
    pub fn stop(&mut self) {
        if self.state == TrackingState::Stopped {
            return;
        }
        self.session.pause();
        self.state = TrackingState::Stopped;
        info!("tracking stopped");
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    /// Handle one tracking-frame callback on the coordinating context.
    ///
    /// Face events (added and updated alike) run the estimator, move the
    /// pointer to the new looking point, and feed the pointer's top edge
    /// to the scroll policy.
    pub fn handle_frame(&mut self, event: FrameEvent) {
        match event {
            FrameEvent::CameraMoved(pose) => self.screen.follow(pose),
            FrameEvent::FaceAdded(anchor) | FrameEvent::FaceUpdated(anchor) => {
                let point = self.estimator.update(&anchor, &self.screen);
                self.pointer.move_to(point);
                self.page.scroll_by_looking_at(self.pointer.frame_min_y());
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────
