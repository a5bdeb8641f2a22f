//! Homogeneous 4×4 transforms for rigid maps (rotation composed with
//! translation).
//!
//! Points pass through as column vectors (x, y, z, 1). `Matrix4::new` takes
//! entries in row-major reading order, and the flattened `[f64; 16]` form
//! exposed for interop is row-major as well.

use crate::math::{Matrix4, Point3, Vector3, Vector4};

/// A rigid affine map in homogeneous coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub matrix: Matrix4,
}

impl Transform {
    /// The identity map.
    pub fn identity() -> Self {
        Self { matrix: Matrix4::identity() }
    }

    /// Translation by `d`.
    pub fn translation(d: Vector3) -> Self {
        Self {
            matrix: Matrix4::new(
                1.0, 0.0, 0.0, d.x,
                0.0, 1.0, 0.0, d.y,
                0.0, 0.0, 1.0, d.z,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Rotation about the x-axis. A positive angle carries the z-axis
    /// toward the y-axis.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            matrix: Matrix4::new(
                1.0, 0.0, 0.0, 0.0,
                0.0, c, s, 0.0,
                0.0, -s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Rotation about the y-axis. A positive angle carries the x-axis
    /// toward the z-axis.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            matrix: Matrix4::new(
                c, 0.0, -s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Rotation about the z-axis. A positive angle carries the y-axis
    /// toward the x-axis.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            matrix: Matrix4::new(
                c, s, 0.0, 0.0,
                -s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    /// Composition `self ∘ other`: `other` is applied first.
    pub fn compose(&self, other: &Transform) -> Transform {
        Transform { matrix: self.matrix * other.matrix }
    }

    /// Apply the map to a point (homogeneous fourth component fixed at 1).
    pub fn apply(&self, p: Point3) -> Point3 {
        let h = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(h.x, h.y, h.z)
    }

    /// Flatten to a row-major array.
    pub fn to_row_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.matrix[(row, col)];
            }
        }
        out
    }

    /// Rebuild from a row-major array.
    pub fn from_row_major(values: [f64; 16]) -> Transform {
        Transform {
            matrix: Matrix4::from_fn(|row, col| values[row * 4 + col]),
        }
    }
}
