//! Operand validation: rank, coordinate width, vertex axis, batch length.

use ndarray::{ArrayView, ArrayView2, ArrayView3, Axis, Dimension, Ix2, Ix3};

use super::error::{CircumError, ShapeFault};

/// Three index-aligned `[N, 2]` views; row `i` is triangle `i`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TriViews<'a, F> {
    pub p0: ArrayView2<'a, F>,
    pub p1: ArrayView2<'a, F>,
    pub p2: ArrayView2<'a, F>,
}

impl<F> TriViews<'_, F> {
    #[inline]
    pub fn len(&self) -> usize {
        self.p0.nrows()
    }
}

fn reject(op: &'static str, operand: &'static str, fault: ShapeFault) -> CircumError {
    let err = CircumError::invalid(op, operand, fault);
    tracing::debug!(%err, "rejected operand");
    err
}

/// Check `p` is `[N, 2]` and narrow it to a rank-2 view.
pub(crate) fn point_view<'a, F, D: Dimension>(
    op: &'static str,
    operand: &'static str,
    p: ArrayView<'a, F, D>,
) -> Result<ArrayView2<'a, F>, CircumError> {
    let rank = p.ndim();
    if rank != 2 {
        return Err(reject(op, operand, ShapeFault::Rank { expected: 2, got: rank }));
    }
    let width = p.shape()[1];
    if width != 2 {
        return Err(reject(op, operand, ShapeFault::Width { got: width }));
    }
    p.into_dimensionality::<Ix2>()
        .map_err(|_| reject(op, operand, ShapeFault::Rank { expected: 2, got: rank }))
}

/// Validate the separate-arguments form: each operand `[N, 2]`, shared N.
pub(crate) fn tri_views<'a, F, D: Dimension>(
    op: &'static str,
    p0: ArrayView<'a, F, D>,
    p1: ArrayView<'a, F, D>,
    p2: ArrayView<'a, F, D>,
) -> Result<TriViews<'a, F>, CircumError> {
    let p0 = point_view(op, "p0", p0)?;
    let p1 = point_view(op, "p1", p1)?;
    let p2 = point_view(op, "p2", p2)?;
    let n = p0.nrows();
    for (operand, p) in [("p1", &p1), ("p2", &p2)] {
        if p.nrows() != n {
            return Err(reject(
                op,
                operand,
                ShapeFault::BatchLen {
                    expected: n,
                    got: p.nrows(),
                },
            ));
        }
    }
    Ok(TriViews { p0, p1, p2 })
}

/// Validate the triangle-major form `[N, 3, 2]` and slice axis 1.
///
/// The coordinate width is checked on the slices, so a bad width reports
/// against `p0` exactly like the separate-arguments form.
pub(crate) fn stacked_views<'a, F, D: Dimension>(
    op: &'static str,
    triangles: ArrayView<'a, F, D>,
) -> Result<TriViews<'a, F>, CircumError> {
    let rank = triangles.ndim();
    if rank != 3 {
        return Err(reject(op, "triangles", ShapeFault::Rank { expected: 3, got: rank }));
    }
    let vertices = triangles.shape()[1];
    if vertices != 3 {
        return Err(reject(op, "triangles", ShapeFault::Vertices { got: vertices }));
    }
    let t: ArrayView3<'a, F> = triangles
        .into_dimensionality::<Ix3>()
        .map_err(|_| reject(op, "triangles", ShapeFault::Rank { expected: 3, got: rank }))?;
    tri_views(
        op,
        t.index_axis_move(Axis(1), 0),
        t.index_axis_move(Axis(1), 1),
        t.index_axis_move(Axis(1), 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array, Array2, Array3, IxDyn};

    #[test]
    fn point_view_accepts_n_by_2() {
        let p = Array2::<f64>::zeros((5, 2));
        let v = point_view("op", "p0", p.view().into_dyn()).unwrap();
        assert_eq!(v.dim(), (5, 2));
    }

    #[test]
    fn point_view_rejects_rank_and_width() {
        let p = Array::<f64, _>::zeros(IxDyn(&[4, 2, 1]));
        let err = point_view("op", "p1", p.view()).unwrap_err();
        assert_eq!(
            err,
            CircumError::invalid("op", "p1", ShapeFault::Rank { expected: 2, got: 3 })
        );
        let q = Array2::<f64>::zeros((4, 3));
        let err = point_view("op", "p2", q.view()).unwrap_err();
        assert_eq!(err, CircumError::invalid("op", "p2", ShapeFault::Width { got: 3 }));
    }

    #[test]
    fn tri_views_rejects_batch_mismatch() {
        let a = Array2::<f64>::zeros((4, 2));
        let b = Array2::<f64>::zeros((3, 2));
        let err = tri_views("op", a.view(), a.view(), b.view()).unwrap_err();
        assert_eq!(
            err,
            CircumError::invalid("op", "p2", ShapeFault::BatchLen { expected: 4, got: 3 })
        );
    }

    #[test]
    fn stacked_views_slices_vertices_in_order() {
        let t = Array3::from_shape_fn((2, 3, 2), |(i, k, j)| (i * 100 + k * 10 + j) as f64);
        let v = stacked_views("op", t.view()).unwrap();
        assert_eq!(v.len(), 2);
        assert_eq!(v.p0[[1, 1]], 101.0);
        assert_eq!(v.p1[[0, 0]], 10.0);
        assert_eq!(v.p2[[1, 0]], 120.0);
    }

    #[test]
    fn stacked_views_rejects_vertex_axis_and_width() {
        let four = Array3::<f64>::zeros((2, 4, 2));
        assert_eq!(
            stacked_views("op", four.view()).unwrap_err(),
            CircumError::invalid("op", "triangles", ShapeFault::Vertices { got: 4 })
        );
        let wide = Array3::<f64>::zeros((2, 3, 3));
        assert_eq!(
            stacked_views("op", wide.view()).unwrap_err(),
            CircumError::invalid("op", "p0", ShapeFault::Width { got: 3 })
        );
        let flat = Array2::<f64>::zeros((2, 6));
        assert_eq!(
            stacked_views("op", flat.view()).unwrap_err(),
            CircumError::invalid("op", "triangles", ShapeFault::Rank { expected: 3, got: 2 })
        );
    }
}
