//! Virtual screen plane — a 3D proxy for the physical device screen.
//!
//! The plane exists purely for ray-intersection math: it follows the
//! device camera pose every frame and converts plane-local hit
//! coordinates (meters) into logical screen points.

use crate::math::{Mat4, Transform3D, Vec2, Vec3};

/// Virtual screen plane in tracking space.
///
/// Local convention: the plane spans the XY axes at Z=0 with its origin
/// at the screen center; `extent` bounds the hit-testable quad.
#[derive(Debug, Clone)]
pub struct ScreenPlane {
    /// Pose in tracking space; updated every frame to follow the device.
    pub pose: Transform3D,
    /// Physical screen size in meters.
    pub meter_size: Vec2,
    /// Logical screen size in points.
    pub point_size: Vec2,
    /// Vertical correction for non-visible screen area
    /// (status bar, home indicator) in points.
    pub height_compensation: f32,
    /// Hit-testable quad extent in meters.
    pub extent: Vec2,
}

impl ScreenPlane {
    /// iPhone 12 mini: the calibration target of the original pipeline.
    pub fn iphone_12_mini() -> Self {
        Self {
            pose: Transform3D::default(),
            meter_size: Vec2::new(0.062_390_83, 0.135_096_94),
            point_size: Vec2::new(375.0, 812.0),
            height_compensation: 106.0,
            extent: Vec2::new(1.0, 1.0),
        }
    }

    /// Follow the device pose for this frame.
    pub fn follow(&mut self, pose: Transform3D) {
        self.pose = pose;
    }

    /// Intersect a world-space segment with the plane.
    ///
    /// Returns the plane-local intersection coordinates in meters, or
    /// `None` when the segment is parallel to the plane, the crossing
    /// lies outside the segment, or the hit falls outside `extent`.
    pub fn hit_test_segment(&self, from: Vec3, to: Vec3) -> Option<Vec2> {
        let model = Mat4::from_transform(&self.pose);
        let inv = model.rigid_inverse();

        let a = inv.transform_point(&from);
        let b = inv.transform_point(&to);

        let dz = b.z - a.z;
        if dz.abs() < 1e-8 {
            return None; // segment parallel to plane
        }

        let t = -a.z / dz;
        if !(0.0..=1.0).contains(&t) {
            return None; // plane not crossed within the segment
        }

        let x = a.x + (b.x - a.x) * t;
        let y = a.y + (b.y - a.y) * t;

        let hw = self.extent.x * 0.5;
        let hh = self.extent.y * 0.5;
        if x < -hw || x > hw || y < -hh || y > hh {
            return None;
        }

        Some(Vec2::new(x, y))
    }

    /// Convert plane-local meters to logical screen points.
    ///
    /// Linear scale by the physical:logical size ratio, plus the fixed
    /// vertical calibration offset.
    pub fn to_points(&self, local_m: Vec2) -> Vec2 {
        Vec2::new(
            local_m.x / self.meter_size.x * self.point_size.x,
            local_m.y / self.meter_size.y * self.point_size.y + self.height_compensation,
        )
    }
}

// ── Tests ────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Quat;

    #[test]
    fn test_segment_direct_hit_center() {
        let plane = ScreenPlane::iphone_12_mini();
        let hit = plane.hit_test_segment(Vec3::new(0.0, 0.0, 0.5), Vec3::new(0.0, 0.0, -0.3));
        assert!(hit.is_some(), "segment crossing Z=0 should hit");
        let local = hit.unwrap();
        assert!(local.x.abs() < 1e-6);
        assert!(local.y.abs() < 1e-6);
    }

    #[test]
    fn test_segment_off_center_hit() {
        let plane = ScreenPlane::iphone_12_mini();
        // Straight segment at constant (x, y) crosses the plane at (x, y).
        let hit = plane.hit_test_segment(
            Vec3::new(0.02, -0.05, 0.5),
            Vec3::new(0.02, -0.05, -0.3),
        );
        let local = hit.expect("should hit");
        assert!((local.x - 0.02).abs() < 1e-6, "x={}", local.x);
        assert!((local.y + 0.05).abs() < 1e-6, "y={}", local.y);
    }

    #[test]
    fn test_segment_miss_outside_extent() {
        let plane = ScreenPlane::iphone_12_mini();
        let hit = plane.hit_test_segment(Vec3::new(0.8, 0.0, 0.5), Vec3::new(0.8, 0.0, -0.3));
        assert!(hit.is_none(), "hit beyond the 1m quad should miss");
    }

    #[test]
    fn test_segment_miss_not_crossing() {
        let plane = ScreenPlane::iphone_12_mini();
        // Both endpoints on the same side of the plane.
        let hit = plane.hit_test_segment(Vec3::new(0.0, 0.0, 0.5), Vec3::new(0.0, 0.0, 0.1));
        assert!(hit.is_none());
    }

    #[test]
    fn test_segment_parallel_miss() {
        let plane = ScreenPlane::iphone_12_mini();
        let hit = plane.hit_test_segment(Vec3::new(-0.1, 0.0, 0.2), Vec3::new(0.1, 0.0, 0.2));
        assert!(hit.is_none(), "segment parallel to the plane should miss");
    }

    #[test]
    fn test_hit_follows_plane_pose() {
        let mut plane = ScreenPlane::iphone_12_mini();
        plane.follow(Transform3D {
            position: Vec3::new(0.0, 0.0, -0.1),
            rotation: Quat::IDENTITY,
            ..Default::default()
        });
        // Segment crossing Z=-0.1 in world space at x=0.01.
        let hit = plane.hit_test_segment(
            Vec3::new(0.01, 0.0, 0.4),
            Vec3::new(0.01, 0.0, -0.4),
        );
        let local = hit.expect("should hit the moved plane");
        assert!((local.x - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_to_points_scale_and_offset() {
        let plane = ScreenPlane::iphone_12_mini();
        // Known conversion: half the physical screen in each axis maps to
        // half the point size, plus the vertical compensation.
        let pt = plane.to_points(Vec2::new(0.031_195_4, 0.067_548_5));
        assert!((pt.x - 187.5).abs() < 1e-3, "x={}", pt.x);
        assert!((pt.y - 512.0).abs() < 1e-2, "y={}", pt.y);
    }

    #[test]
    fn test_to_points_origin() {
        let plane = ScreenPlane::iphone_12_mini();
        let pt = plane.to_points(Vec2::ZERO);
        assert!((pt.x).abs() < 1e-6);
        assert!((pt.y - 106.0).abs() < 1e-6, "y={}", pt.y);
    }
}
