//! Single-triangle circumcircle kernel on `nalgebra` types.
//!
//! The batch engine in `circum` evaluates `circumcenter_offset` once per row;
//! `Circumcircle::of` is the same computation for one triangle.

use nalgebra::{convert, Point2, RealField, Vector2};

/// Real coordinate type accepted by the kernels (`f32`, `f64`).
pub trait Coord: RealField + Copy + Send + Sync {}

impl<T: RealField + Copy + Send + Sync> Coord for T {}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise, zero iff collinear.
#[inline]
pub fn parallelogram_area<F: Coord>(a: Vector2<F>, b: Vector2<F>) -> F {
    a.x * b.y - a.y * b.x
}

/// Circumcenter of the triangle `(0, b, c)`, i.e. relative to the first vertex.
///
/// Pre: `b = p1 - p0`, `c = p2 - p0`.
/// Post: returns `u` with `|u| = |u - b| = |u - c|`. For collinear input the
/// determinant is zero and the components are ±inf or NaN.
#[inline]
pub fn circumcenter_offset<F: Coord>(b: Vector2<F>, c: Vector2<F>) -> Vector2<F> {
    let two: F = convert(2.0);
    let d = two * parallelogram_area(b, c);
    let b_norm = b.norm_squared();
    let c_norm = c.norm_squared();
    Vector2::new(
        (c.y * b_norm - b.y * c_norm) / d,
        (b.x * c_norm - c.x * b_norm) / d,
    )
}

/// Circumscribed circle of one triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circumcircle<F: Coord> {
    pub center: Point2<F>,
    pub radius: F,
}

impl<F: Coord> Circumcircle<F> {
    /// Circle through `p0`, `p1`, `p2`. Collinear vertices give non-finite fields.
    #[inline]
    pub fn of(p0: Point2<F>, p1: Point2<F>, p2: Point2<F>) -> Self {
        let u = circumcenter_offset(p1 - p0, p2 - p0);
        Self {
            center: p0 + u,
            radius: u.norm(),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.x.is_finite() && self.center.y.is_finite() && self.radius.is_finite()
    }
}
