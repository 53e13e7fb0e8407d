//! Vertex and 3×3 transform types for the cube renderer.
//!
//! Vertices are row vectors: a transform is applied as `v · M`.

use core::ops::Mul;
use libm::{cosf, fabsf, sinf};

/// A point in model space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vertex3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vertex3D {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Largest per-axis distance to `other`.
    pub fn max_distance(&self, other: &Vertex3D) -> f32 {
        let dx = fabsf(self.x - other.x);
        let dy = fabsf(self.y - other.y);
        let dz = fabsf(self.z - other.z);
        dx.max(dy).max(dz)
    }
}

/// A projected point, before screen scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vertex2D {
    pub x: f32,
    pub y: f32,
}

impl Vertex2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Rotation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Row-major 3×3 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3(pub [[f32; 3]; 3]);

impl Matrix3 {
    /// Rotation by `angle` radians about `axis`, counter-clockwise when
    /// viewed from the positive end of the axis.
    pub fn rotation(axis: Axis, angle: f32) -> Self {
        let (s, c) = (sinf(angle), cosf(angle));
        match axis {
            Axis::X => Matrix3([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]]),
            Axis::Y => Matrix3([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]]),
            Axis::Z => Matrix3([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]),
        }
    }
}

impl Mul<Matrix3> for Vertex3D {
    type Output = Vertex3D;

    fn mul(self, m: Matrix3) -> Vertex3D {
        let v = [self.x, self.y, self.z];
        let col = |j: usize| v[0] * m.0[0][j] + v[1] * m.0[1][j] + v[2] * m.0[2][j];
        Vertex3D::new(col(0), col(1), col(2))
    }
}
