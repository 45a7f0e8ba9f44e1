//! 4x4 Matrix utilities for 4D transformations
//!
//! Matrices are stored column-major (`m[col][row]`) and act on column vectors,
//! so [`transform`] computes `M · v` and [`mul`]`(a, b)` applies `b` first.

use crate::Vec4;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in a specific 2D plane within 4D space.
///
/// The result is the identity except for the 2x2 block at the two axes:
///
/// ```text
/// p1' = cos·p1 - sin·p2
/// p2' = sin·p1 + cos·p2
/// ```
///
/// so a positive angle turns the `p1` axis toward `p2`. Per-plane sign
/// conventions are encoded by the order in which the axes are passed; see
/// [`RotationPlane::axes`](crate::RotationPlane::axes).
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
///
/// # Example
/// ```
/// use hyperview_math::mat4::{plane_rotation, transform};
/// use hyperview_math::Vec4;
/// // Quarter turn carrying Y onto Z
/// let m = plane_rotation(std::f32::consts::FRAC_PI_2, 1, 2);
/// let v = transform(m, Vec4::Y);
/// assert!((v.z - 1.0).abs() < 1e-6);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    // Rotation in plane p1-p2
    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Element at `row`, `col` (mathematical indexing, independent of storage order)
#[inline]
pub fn at(m: Mat4, row: usize, col: usize) -> f32 {
    m[col][row]
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Determinant, by expansion over the 2x2 minors of the first two columns
pub fn determinant(m: Mat4) -> f32 {
    let s0 = m[0][0] * m[1][1] - m[1][0] * m[0][1];
    let s1 = m[0][0] * m[1][2] - m[1][0] * m[0][2];
    let s2 = m[0][0] * m[1][3] - m[1][0] * m[0][3];
    let s3 = m[0][1] * m[1][2] - m[1][1] * m[0][2];
    let s4 = m[0][1] * m[1][3] - m[1][1] * m[0][3];
    let s5 = m[0][2] * m[1][3] - m[1][2] * m[0][3];

    let c5 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
    let c4 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
    let c3 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
    let c2 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
    let c1 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
    let c0 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

    s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
}
