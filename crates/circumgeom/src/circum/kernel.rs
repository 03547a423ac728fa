//! Row-wise evaluation of the circumcircle formula over a validated batch.

use nalgebra::Vector2;
use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1, Axis, Zip};

use super::cfg::CircumCfg;
use super::shape::TriViews;
use crate::geometry::{circumcenter_offset, Coord};

#[inline]
fn vec2<F: Coord>(row: &ArrayView1<'_, F>) -> Vector2<F> {
    Vector2::new(row[0], row[1])
}

fn write_offset<F: Coord>(
    mut out: ArrayViewMut1<'_, F>,
    p0: ArrayView1<'_, F>,
    p1: ArrayView1<'_, F>,
    p2: ArrayView1<'_, F>,
) {
    let a = vec2(&p0);
    let u = circumcenter_offset(vec2(&p1) - a, vec2(&p2) - a);
    out[0] = u.x;
    out[1] = u.y;
}

/// Circumcenters relative to `p0`, shape `[N, 2]`.
pub(crate) fn offsets<F: Coord>(
    tri: &TriViews<'_, F>,
    #[cfg_attr(not(feature = "rayon"), allow(unused_variables))] cfg: &CircumCfg,
) -> Array2<F> {
    let n = tri.len();
    let mut out = Array2::<F>::zeros((n, 2));
    let zip = Zip::from(out.rows_mut())
        .and(tri.p0.rows())
        .and(tri.p1.rows())
        .and(tri.p2.rows());
    #[cfg(feature = "rayon")]
    {
        if cfg.runs_parallel(n) {
            zip.par_for_each(write_offset::<F>);
            return out;
        }
    }
    zip.for_each(write_offset::<F>);
    out
}

/// Translate offsets back by `p0`.
pub(crate) fn centers<F: Coord>(offsets: Array2<F>, tri: &TriViews<'_, F>) -> Array2<F> {
    offsets + &tri.p0
}

/// Row norms of the offsets: `sqrt(ux² + uy²)`.
pub(crate) fn radii<F: Coord>(offsets: &Array2<F>) -> Array1<F> {
    offsets.map_axis(Axis(1), |u| (u[0] * u[0] + u[1] * u[1]).sqrt())
}
