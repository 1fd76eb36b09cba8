//! Gaze estimation — raw per-frame eye transforms to a stabilized
//! screen-space looking point.
//!
//! Per eye: cast a segment from a virtual target 0.8 m ahead of the eye
//! back through the eye position, intersect it with the screen plane,
//! and convert the plane-local hit to logical points. The left/right
//! average lands in a 10-sample rolling window per axis; the reported
//! point is the per-axis mean.

use std::collections::VecDeque;

use crate::math::{Mat4, Transform3D, Vec2, Vec3};
use crate::screen::ScreenPlane;

/// Forward offset of the virtual gaze target in eye-local space (meters).
pub const EYE_TARGET_OFFSET_M: f32 = 0.8;

/// Rolling window length per axis.
pub const HISTORY_CAPACITY: usize = 10;

// ── Frame input ──────────────────────────────────────────────

/// One frame of face-tracking output: the face pose in tracking space
/// plus the face-local left/right eye transforms. Ephemeral; a new
/// anchor arrives every tracking frame.
#[derive(Debug, Clone, Copy)]
pub struct FaceAnchor {
    pub transform: Transform3D,
    pub left_eye: Transform3D,
    pub right_eye: Transform3D,
}

// ── Rolling window ───────────────────────────────────────────

/// Fixed-capacity FIFO window of recent samples, oldest evicted first.
///
/// Touched only from the coordinating context; no synchronization
/// is required under that discipline.
#[derive(Debug)]
struct RollingWindow {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl RollingWindow {
    fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, value: f32) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    fn mean(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

// ── Estimator ────────────────────────────────────────────────

/// Turns per-frame eye transforms into a smoothed looking point.
pub struct GazeEstimator {
    xs: RollingWindow,
    ys: RollingWindow,
    target_offset: f32,
}

impl Default for GazeEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl GazeEstimator {
    pub fn new() -> Self {
        Self {
            xs: RollingWindow::new(HISTORY_CAPACITY),
            ys: RollingWindow::new(HISTORY_CAPACITY),
            target_offset: EYE_TARGET_OFFSET_M,
        }
    }

    /// Process one tracking frame and return the smoothed looking point.
    ///
    /// An eye whose segment misses the plane contributes (0, 0) for the
    /// frame. This biases the average toward the origin on tracking
    /// dropout; the behavior is kept deliberately.
    pub fn update(&mut self, anchor: &FaceAnchor, screen: &ScreenPlane) -> Vec2 {
        let face = Mat4::from_transform(&anchor.transform);

        let left = self.eye_screen_point(&face, &anchor.left_eye, screen);
        let right = self.eye_screen_point(&face, &anchor.right_eye, screen);

        self.xs.push((left.x + right.x) / 2.0);
        // Y sign inverted here to match the UI coordinate convention.
        self.ys.push(-(left.y + right.y) / 2.0);

        Vec2::new(self.xs.mean(), self.ys.mean())
    }

    /// Screen point for one eye, or `Vec2::ZERO` when the gaze segment
    /// misses the plane.
    fn eye_screen_point(&self, face: &Mat4, eye: &Transform3D, screen: &ScreenPlane) -> Vec2 {
        let eye_model = face.mul(&Mat4::from_transform(eye));
        let eye_pos = eye_model.transform_point(&Vec3::ZERO);
        let target = eye_model.transform_point(&Vec3::new(0.0, 0.0, self.target_offset));

        screen
            .hit_test_segment(target, eye_pos)
            .map(|local| screen.to_points(local))
            .unwrap_or(Vec2::ZERO)
    }

    /// Number of samples currently retained per axis.
    pub fn history_len(&self) -> usize {
        debug_assert_eq!(self.xs.len(), self.ys.len());
        self.xs.len()
    }
}

// ── Tests ────────────────────────────────────────────────────
