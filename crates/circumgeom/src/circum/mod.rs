//! Batched circumcenter / circumradius engine.
//!
//! Purpose
//! - Evaluate the closed-form circumcircle of every triangle in a batch,
//!   given either three index-aligned point batches `p0, p1, p2` of shape
//!   `[N, 2]` or one triangle-major batch `[N, 3, 2]`.
//!
//! Formula (per row, `p0` as origin)
//! - `b = p1 - p0`, `c = p2 - p0`, `d = 2 (b.x c.y - b.y c.x)`
//! - `ux = (c.y |b|² - b.y |c|²) / d`, `uy = (b.x |c|² - c.x |b|²) / d`
//! - center `= p0 + (ux, uy)`, radius `= |(ux, uy)|`
//!
//! Conventions
//! - Every entry point validates operand shapes and fails with
//!   `CircumError::InvalidArgument` on a wrong rank, a coordinate width other
//!   than 2, a vertex axis other than 3, or operands of different length.
//! - Collinear triangles (`d = 0`) are not detected. Their rows come back as
//!   ±inf/NaN and the rest of the batch is unaffected.
//! - `N = 0` is valid and yields empty outputs.

mod cfg;
mod error;
mod kernel;
mod shape;

pub use cfg::CircumCfg;
pub use error::{CircumError, ShapeFault};

use ndarray::{Array1, Array2, Array3, ArrayBase, Data, Dimension};

use crate::geometry::{Circumcircle, Coord};
use nalgebra::Point2;
use shape::TriViews;

const OP_CENTER: &str = "circumcenter";
const OP_RADIUS: &str = "circumradius";
const OP_CIRCLE: &str = "circumcircle";
const OP_STACK: &str = "stack_triangles";

/// Centers and radii of one batch, row-aligned with the input triangles.
#[derive(Clone, Debug, PartialEq)]
pub struct Circumcircles<F> {
    /// Shape `[N, 2]`.
    pub centers: Array2<F>,
    /// Shape `[N]`.
    pub radii: Array1<F>,
}

impl<F: Coord> Circumcircles<F> {
    #[inline]
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Circle of triangle `i`, if in range.
    pub fn get(&self, i: usize) -> Option<Circumcircle<F>> {
        let radius = *self.radii.get(i)?;
        let center = Point2::new(self.centers[[i, 0]], self.centers[[i, 1]]);
        Some(Circumcircle { center, radius })
    }
}

/// Batch engine. Stateless apart from its execution settings.
#[derive(Clone, Copy, Debug, Default)]
pub struct CircumEngine {
    cfg: CircumCfg,
}

impl CircumEngine {
    pub fn new(cfg: CircumCfg) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &CircumCfg {
        &self.cfg
    }

    fn offsets<F: Coord>(&self, op: &'static str, tri: &TriViews<'_, F>) -> Array2<F> {
        let n = tri.len();
        tracing::trace!(op, n, parallel = self.cfg.runs_parallel(n), "circum batch");
        kernel::offsets(tri, &self.cfg)
    }

    /// Circumcenters of `(p0[i], p1[i], p2[i])`, shape `[N, 2]`.
    pub fn center<F, S, D>(
        &self,
        p0: &ArrayBase<S, D>,
        p1: &ArrayBase<S, D>,
        p2: &ArrayBase<S, D>,
    ) -> Result<Array2<F>, CircumError>
    where
        F: Coord,
        S: Data<Elem = F>,
        D: Dimension,
    {
        let tri = shape::tri_views(OP_CENTER, p0.view(), p1.view(), p2.view())?;
        Ok(kernel::centers(self.offsets(OP_CENTER, &tri), &tri))
    }

    /// Circumcenters of a triangle-major batch `[N, 3, 2]`.
    pub fn center_stacked<F, S, D>(
        &self,
        triangles: &ArrayBase<S, D>,
    ) -> Result<Array2<F>, CircumError>
    where
        F: Coord,
        S: Data<Elem = F>,
        D: Dimension,
    {
        let tri = shape::stacked_views(OP_CENTER, triangles.view())?;
        Ok(kernel::centers(self.offsets(OP_CENTER, &tri), &tri))
    }

    /// Circumradii of `(p0[i], p1[i], p2[i])`, shape `[N]`.
    pub fn radius<F, S, D>(
        &self,
        p0: &ArrayBase<S, D>,
        p1: &ArrayBase<S, D>,
        p2: &ArrayBase<S, D>,
    ) -> Result<Array1<F>, CircumError>
    where
        F: Coord,
        S: Data<Elem = F>,
        D: Dimension,
    {
        let tri = shape::tri_views(OP_RADIUS, p0.view(), p1.view(), p2.view())?;
        Ok(kernel::radii(&self.offsets(OP_RADIUS, &tri)))
    }

    /// Circumradii of a triangle-major batch `[N, 3, 2]`.
    pub fn radius_stacked<F, S, D>(
        &self,
        triangles: &ArrayBase<S, D>,
    ) -> Result<Array1<F>, CircumError>
    where
        F: Coord,
        S: Data<Elem = F>,
        D: Dimension,
    {
        let tri = shape::stacked_views(OP_RADIUS, triangles.view())?;
        Ok(kernel::radii(&self.offsets(OP_RADIUS, &tri)))
    }

    /// Centers and radii from a single evaluation of the formula.
    pub fn circle<F, S, D>(
        &self,
        p0: &ArrayBase<S, D>,
        p1: &ArrayBase<S, D>,
        p2: &ArrayBase<S, D>,
    ) -> Result<Circumcircles<F>, CircumError>
    where
        F: Coord,
        S: Data<Elem = F>,
        D: Dimension,
    {
        let tri = shape::tri_views(OP_CIRCLE, p0.view(), p1.view(), p2.view())?;
        Ok(self.circles(&tri))
    }

    /// Stacked-form [`CircumEngine::circle`] on a `[N, 3, 2]` batch.
    pub fn circle_stacked<F, S, D>(
        &self,
        triangles: &ArrayBase<S, D>,
    ) -> Result<Circumcircles<F>, CircumError>
    where
        F: Coord,
        S: Data<Elem = F>,
        D: Dimension,
    {
        let tri = shape::stacked_views(OP_CIRCLE, triangles.view())?;
        Ok(self.circles(&tri))
    }

    fn circles<F: Coord>(&self, tri: &TriViews<'_, F>) -> Circumcircles<F> {
        let offsets = self.offsets(OP_CIRCLE, tri);
        let radii = kernel::radii(&offsets);
        Circumcircles {
            centers: kernel::centers(offsets, tri),
            radii,
        }
    }
}

/// Circumcenters with the default engine. See [`CircumEngine::center`].
pub fn circumcenter<F, S, D>(
    p0: &ArrayBase<S, D>,
    p1: &ArrayBase<S, D>,
    p2: &ArrayBase<S, D>,
) -> Result<Array2<F>, CircumError>
where
    F: Coord,
    S: Data<Elem = F>,
    D: Dimension,
{
    CircumEngine::default().center(p0, p1, p2)
}

/// Stacked-form [`circumcenter`] on a `[N, 3, 2]` batch.
pub fn circumcenter_stacked<F, S, D>(triangles: &ArrayBase<S, D>) -> Result<Array2<F>, CircumError>
where
    F: Coord,
    S: Data<Elem = F>,
    D: Dimension,
{
    CircumEngine::default().center_stacked(triangles)
}

/// Circumradii with the default engine. See [`CircumEngine::radius`].
pub fn circumradius<F, S, D>(
    p0: &ArrayBase<S, D>,
    p1: &ArrayBase<S, D>,
    p2: &ArrayBase<S, D>,
) -> Result<Array1<F>, CircumError>
where
    F: Coord,
    S: Data<Elem = F>,
    D: Dimension,
{
    CircumEngine::default().radius(p0, p1, p2)
}

/// Stacked-form [`circumradius`] on a `[N, 3, 2]` batch.
pub fn circumradius_stacked<F, S, D>(triangles: &ArrayBase<S, D>) -> Result<Array1<F>, CircumError>
where
    F: Coord,
    S: Data<Elem = F>,
    D: Dimension,
{
    CircumEngine::default().radius_stacked(triangles)
}

/// Centers and radii with the default engine. See [`CircumEngine::circle`].
pub fn circumcircle<F, S, D>(
    p0: &ArrayBase<S, D>,
    p1: &ArrayBase<S, D>,
    p2: &ArrayBase<S, D>,
) -> Result<Circumcircles<F>, CircumError>
where
    F: Coord,
    S: Data<Elem = F>,
    D: Dimension,
{
    CircumEngine::default().circle(p0, p1, p2)
}

/// Stacked-form [`circumcircle`] on a `[N, 3, 2]` batch.
pub fn circumcircle_stacked<F, S, D>(
    triangles: &ArrayBase<S, D>,
) -> Result<Circumcircles<F>, CircumError>
where
    F: Coord,
    S: Data<Elem = F>,
    D: Dimension,
{
    CircumEngine::default().circle_stacked(triangles)
}

/// Stack three point batches into the triangle-major layout `[N, 3, 2]`.
pub fn stack_triangles<F, S, D>(
    p0: &ArrayBase<S, D>,
    p1: &ArrayBase<S, D>,
    p2: &ArrayBase<S, D>,
) -> Result<Array3<F>, CircumError>
where
    F: Coord,
    S: Data<Elem = F>,
    D: Dimension,
{
    let tri = shape::tri_views(OP_STACK, p0.view(), p1.view(), p2.view())?;
    let vertices = [tri.p0, tri.p1, tri.p2];
    Ok(Array3::from_shape_fn((tri.len(), 3, 2), |(i, k, j)| {
        vertices[k][[i, j]]
    }))
}


#[cfg(test)]
mod props;
