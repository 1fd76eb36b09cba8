//! Gaze pointer indicator — the on-screen marker that tracks the
//! looking point. Repositioning is a pure translation; no animation.

use crate::math::Vec2;

/// Visual pointer indicator state.
#[derive(Debug, Clone)]
pub struct PointerIndicator {
    /// Untranslated frame origin in screen points.
    pub origin: Vec2,
    /// Frame size in screen points.
    pub size: Vec2,
    /// Current translation applied to the frame.
    pub translation: Vec2,
}

impl PointerIndicator {
    pub fn new(size: Vec2) -> Self {
        Self {
            origin: Vec2::ZERO,
            size,
            translation: Vec2::ZERO,
        }
    }

    /// Translate the indicator frame to the given looking point.
    pub fn move_to(&mut self, point: Vec2) {
        self.translation = point;
    }

    /// Top edge of the translated frame; this is the coordinate the
    /// scroll policy consumes.
    pub fn frame_min_y(&self) -> f32 {
        self.origin.y + self.translation.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_is_pure_translation() {
        let mut ptr = PointerIndicator::new(Vec2::new(24.0, 24.0));
        ptr.move_to(Vec2::new(180.0, -320.0));
        assert_eq!(ptr.translation, Vec2::new(180.0, -320.0));
        assert_eq!(ptr.origin, Vec2::ZERO);
    }

    #[test]
    fn test_frame_min_y_tracks_translation() {
        let mut ptr = PointerIndicator::new(Vec2::new(24.0, 24.0));
        ptr.origin = Vec2::new(0.0, 10.0);
        ptr.move_to(Vec2::new(0.0, 850.0));
        assert!((ptr.frame_min_y() - 860.0).abs() < 1e-6);
    }
}
