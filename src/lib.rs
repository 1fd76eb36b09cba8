//! lookscroll — gaze-driven auto-scroll.
//!
//! Estimates where a user is looking on screen from per-frame eye
//! transforms (geometric ray-casting against a virtual screen plane,
//! smoothed by a rolling-window average) and nudges an embedded page
//! surface when the gaze nears a viewport edge. The tracking provider
//! and page renderer are opaque collaborators behind trait seams; a
//! simulated session drives everything headlessly.

pub mod estimator;
pub mod math;
pub mod page;
pub mod pointer;
pub mod screen;
pub mod scroll;
pub mod session;
pub mod sim;
