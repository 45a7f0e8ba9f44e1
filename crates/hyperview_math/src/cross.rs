//! Generalized 4D cross product

use crate::Vec4;

/// Vector orthogonal to `u`, `v` and `w`
///
/// This is the cofactor expansion of the 4x4 determinant whose first row is
/// the basis vectors and whose remaining rows are `u`, `v`, `w`. The six 2x2
/// minors of `(v, w)` are combined with the components of `u` in alternating
/// sign.
///
/// The result is not normalized. Linearly dependent inputs give a zero (or
/// near-zero) vector; that is a valid result, and callers check the norm.
pub fn cross4(u: Vec4, v: Vec4, w: Vec4) -> Vec4 {
    // Minors of (v, w) over the axis pairs xy, xz, xw, yz, yw, zw
    let a = v.x * w.y - v.y * w.x;
    let b = v.x * w.z - v.z * w.x;
    let c = v.x * w.w - v.w * w.x;
    let d = v.y * w.z - v.z * w.y;
    let e = v.y * w.w - v.w * w.y;
    let f = v.z * w.w - v.w * w.z;

    Vec4::new(
        u.y * f - u.z * e + u.w * d,
        -u.x * f + u.z * c - u.w * b,
        u.x * e - u.y * c + u.z * a,
        -u.x * d + u.y * b - u.z * a,
    )
}
