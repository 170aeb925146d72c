//! Free functions over `(f64, f64, f64)` vectors.
//!
//! Every helper is a pure value operation. Normalization and projection
//! guard against zero-length inputs by returning the zero vector, so callers
//! can chain them without checking magnitudes first.

/// Magnitudes at or below this are treated as zero by `normalize_vector` and `project_vector`.
pub const NORMALIZATION_EPSILON: f64 = 1e-12;

/// Vector utility: dot product
#[inline]
pub fn dot_product(a: (f64, f64, f64), b: (f64, f64, f64)) -> f64 {
    a.0 * b.0 + a.1 * b.1 + a.2 * b.2
}

/// Vector utility: cross product
#[inline]
pub fn cross_product(a: (f64, f64, f64), b: (f64, f64, f64)) -> (f64, f64, f64) {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

/// Vector utility: magnitude calculation
#[inline]
pub fn vector_magnitude(v: (f64, f64, f64)) -> f64 {
    dot_product(v, v).sqrt()
}

/// Returns `v` scaled to unit length, or the zero vector when `v` has no length.
///
/// # Example
/// ```
/// use rs_rigid_dynamics::utils::math_helpers::normalize_vector;
///
/// assert_eq!(normalize_vector((0.0, 3.0, 4.0)), (0.0, 0.6, 0.8));
/// assert_eq!(normalize_vector((0.0, 0.0, 0.0)), (0.0, 0.0, 0.0));
/// ```
#[inline]
pub fn normalize_vector(v: (f64, f64, f64)) -> (f64, f64, f64) {
    let mag = vector_magnitude(v);
    if mag > NORMALIZATION_EPSILON {
        (v.0 / mag, v.1 / mag, v.2 / mag)
    } else {
        (0.0, 0.0, 0.0)
    }
}

#[inline]
pub fn add_vectors(a: (f64, f64, f64), b: (f64, f64, f64)) -> (f64, f64, f64) {
    (a.0 + b.0, a.1 + b.1, a.2 + b.2)
}

#[inline]
pub fn subtract_vectors(a: (f64, f64, f64), b: (f64, f64, f64)) -> (f64, f64, f64) {
    (a.0 - b.0, a.1 - b.1, a.2 - b.2)
}

#[inline]
pub fn scale_vector(v: (f64, f64, f64), scalar: f64) -> (f64, f64, f64) {
    (v.0 * scalar, v.1 * scalar, v.2 * scalar)
}

#[inline]
pub fn negate_vector(v: (f64, f64, f64)) -> (f64, f64, f64) {
    (-v.0, -v.1, -v.2)
}

/// Projects `v` onto the line spanned by `onto`.
///
/// The result does not depend on the length of `onto`. A zero `onto` yields the zero vector.
#[inline]
pub fn project_vector(v: (f64, f64, f64), onto: (f64, f64, f64)) -> (f64, f64, f64) {
    let denominator = dot_product(onto, onto);
    if denominator <= NORMALIZATION_EPSILON * NORMALIZATION_EPSILON {
        return (0.0, 0.0, 0.0);
    }
    scale_vector(onto, dot_product(v, onto) / denominator)
}

/// Removes the component of `v` that lies along `axis`.
#[inline]
pub fn reject_vector(v: (f64, f64, f64), axis: (f64, f64, f64)) -> (f64, f64, f64) {
    subtract_vectors(v, project_vector(v, axis))
}

/// Reads a component by index (0 = x, 1 = y, 2 = z).
#[inline]
pub fn vector_component(v: (f64, f64, f64), index: usize) -> f64 {
    match index {
        0 => v.0,
        1 => v.1,
        _ => v.2,
    }
}
