//! Minimal linear algebra for the gaze pipeline.
//!
//! Core types:
//! - `Vec2` / `Vec3`: screen points and tracking-space positions
//! - `Quat`: rotations (face and eye orientation)
//! - `Mat4`: column-major 4x4 transforms with rigid inverse
//! - `Transform3D`: position + rotation + scale

// ── Vec2 ─────────────────────────────────────────────────────

/// 2D vector for screen-space points (logical points or plane-local meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ── Vec3 ─────────────────────────────────────────────────────

/// 3D vector in tracking space (meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

// ── Quat ─────────────────────────────────────────────────────

/// Quaternion for rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create quaternion from Euler angles (yaw, pitch, roll) in radians.
    pub fn from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sr, cr) = (roll * 0.5).sin_cos();

        Self {
            x: cr * sp * cy + sr * cp * sy,
            y: cr * cp * sy - sr * sp * cy,
            z: sr * cp * cy - cr * sp * sy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }
}

// ── Mat4 ─────────────────────────────────────────────────────

/// 4x4 matrix (column-major, OpenGL convention).
#[derive(Debug, Clone, Copy)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Create translation matrix.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.data[12] = x;
        m.data[13] = y;
        m.data[14] = z;
        m
    }

    /// Create scale matrix.
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::IDENTITY;
        m.data[0] = x;
        m.data[5] = y;
        m.data[10] = z;
        m
    }

    /// Create rotation matrix from quaternion.
    pub fn from_quat(q: &Quat) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Self {
            data: [
                1.0 - (yy + zz),
                xy + wz,
                xz - wy,
                0.0,
                xy - wz,
                1.0 - (xx + zz),
                yz + wx,
                0.0,
                xz + wy,
                yz - wx,
                1.0 - (xx + yy),
                0.0,
                0.0,
                0.0,
                0.0,
                1.0,
            ],
        }
    }

    /// Multiply two matrices.
    pub fn mul(&self, other: &Self) -> Self {
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[k * 4 + row] * other.data[col * 4 + k];
                }
                out[col * 4 + row] = sum;
            }
        }
        Self { data: out }
    }

    /// Build model matrix from Transform3D.
    pub fn from_transform(t: &Transform3D) -> Self {
        let trans = Self::translation(t.position.x, t.position.y, t.position.z);
        let rot = Self::from_quat(&t.rotation);
        let scl = Self::scale(t.scale.x, t.scale.y, t.scale.z);
        trans.mul(&rot).mul(&scl)
    }

    /// Compute inverse of a rigid transform (rotation + translation):
    /// transpose the rotation block and counter-rotate the translation.
    pub fn rigid_inverse(&self) -> Self {
        let mut inv = [0.0f32; 16];

        inv[0] = self.data[0];
        inv[1] = self.data[4];
        inv[2] = self.data[8];
        inv[4] = self.data[1];
        inv[5] = self.data[5];
        inv[6] = self.data[9];
        inv[8] = self.data[2];
        inv[9] = self.data[6];
        inv[10] = self.data[10];

        let tx = self.data[12];
        let ty = self.data[13];
        let tz = self.data[14];
        inv[12] = -(inv[0] * tx + inv[4] * ty + inv[8] * tz);
        inv[13] = -(inv[1] * tx + inv[5] * ty + inv[9] * tz);
        inv[14] = -(inv[2] * tx + inv[6] * ty + inv[10] * tz);

        inv[15] = 1.0;

        Self { data: inv }
    }

    /// Transform a point (applies rotation, scale, and translation).
    pub fn transform_point(&self, p: &Vec3) -> Vec3 {
        let d = &self.data;
        Vec3::new(
            d[0] * p.x + d[4] * p.y + d[8] * p.z + d[12],
            d[1] * p.x + d[5] * p.y + d[9] * p.z + d[13],
            d[2] * p.x + d[6] * p.y + d[10] * p.z + d[14],
        )
    }
}

// ── Transform ────────────────────────────────────────────────

/// 3D transform: position, rotation, scale.
#[derive(Debug, Clone, Copy)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform3D {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            ..Default::default()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────
