//! Bounded scroll policy — converts a vertical gaze position into
//! incremental offset adjustments on a scrollable surface.
//!
//! Looking past the viewport bottom nudges the content down in small
//! fixed steps; past the top nudges it up. Each nudge performs at most
//! ten single-point steps and stops early at the clamp boundary, which
//! yields a smooth creep rather than a jump.

use tracing::debug;

/// Maximum single-point sub-steps per nudge.
pub const MAX_STEPS_PER_NUDGE: u32 = 10;

/// Offset change per sub-step, in points.
pub const STEP_POINTS: f32 = 1.0;

// ── Surface seam ─────────────────────────────────────────────

/// A vertically scrollable content surface.
///
/// The embedder's scroll view (or the built-in [`ScrollRegion`]) sits
/// behind this trait; all mutation happens on the single coordinating
/// context, so implementations need no internal locking.
pub trait ScrollSurface {
    fn content_height(&self) -> f32;
    fn viewport_height(&self) -> f32;
    fn top_inset(&self) -> f32;
    fn bottom_inset(&self) -> f32;
    fn offset_y(&self) -> f32;
    fn set_offset_y(&mut self, y: f32);
}

/// The largest allowed offset: content bottom aligned with the viewport
/// bottom, plus the bottom inset.
fn bottom_limit(surface: &dyn ScrollSurface) -> f32 {
    surface.content_height() - surface.viewport_height() + surface.bottom_inset()
}

/// The smallest allowed offset.
fn top_limit(surface: &dyn ScrollSurface) -> f32 {
    -surface.top_inset()
}

// ── Policy ───────────────────────────────────────────────────

/// Nudge the surface downward, at most [`MAX_STEPS_PER_NUDGE`] steps,
/// never past the bottom limit.
pub fn scroll_down(surface: &mut dyn ScrollSurface) {
    for _ in 0..MAX_STEPS_PER_NUDGE {
        if bottom_limit(surface) <= surface.offset_y() {
            return;
        }
        surface.set_offset_y(surface.offset_y() + STEP_POINTS);
    }
}

/// Nudge the surface upward, at most [`MAX_STEPS_PER_NUDGE`] steps,
/// never past the top limit.
pub fn scroll_up(surface: &mut dyn ScrollSurface) {
    for _ in 0..MAX_STEPS_PER_NUDGE {
        if top_limit(surface) >= surface.offset_y() {
            return;
        }
        surface.set_offset_y(surface.offset_y() - STEP_POINTS);
    }
}

/// Apply the edge policy for a vertical gaze position: below the
/// viewport bottom edge scrolls down, above the top edge scrolls up,
/// in-bounds is a no-op.
pub fn nudge(surface: &mut dyn ScrollSurface, position_y: f32) {
    if position_y >= surface.viewport_height() {
        debug!(position_y, "gaze below viewport, nudging down");
        scroll_down(surface);
    } else if position_y < 0.0 {
        debug!(position_y, "gaze above viewport, nudging up");
        scroll_up(surface);
    }
}

// ── Plain surface state ──────────────────────────────────────

/// In-memory scrollable region for the simulator and tests.
#[derive(Debug, Clone)]
pub struct ScrollRegion {
    pub content_height: f32,
    pub viewport_height: f32,
    pub top_inset: f32,
    pub bottom_inset: f32,
    pub offset: f32,
}

impl ScrollRegion {
    pub fn new(content_height: f32, viewport_height: f32) -> Self {
        Self {
            content_height,
            viewport_height,
            top_inset: 0.0,
            bottom_inset: 0.0,
            offset: 0.0,
        }
    }
}

impl ScrollSurface for ScrollRegion {
    fn content_height(&self) -> f32 {
        self.content_height
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn top_inset(&self) -> f32 {
        self.top_inset
    }

    fn bottom_inset(&self) -> f32 {
        self.bottom_inset
    }

    fn offset_y(&self) -> f32 {
        self.offset
    }

    fn set_offset_y(&mut self, y: f32) {
        self.offset = y;
    }
}

// ── Tests ────────────────────────────────────────────────────
