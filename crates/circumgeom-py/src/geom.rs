//! Circumcircle bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{centers_to_py, map_circum_err, points_from_py, triangles_from_py};
use circumgeom::Circumcircle;
use nalgebra::Point2;
use pyo3::prelude::*;

/// Circumcenters of `(p0[i], p1[i], p2[i])` as `[(x, y), ...]`.
#[pyfunction]
pub fn circumcenter2d(
    p0: Vec<Vec<f64>>,
    p1: Vec<Vec<f64>>,
    p2: Vec<Vec<f64>>,
) -> PyResult<Vec<(f64, f64)>> {
    let (p0, p1, p2) = (
        points_from_py("p0", p0)?,
        points_from_py("p1", p1)?,
        points_from_py("p2", p2)?,
    );
    let centers = circumgeom::circumcenter(&p0, &p1, &p2).map_err(map_circum_err)?;
    Ok(centers_to_py(&centers))
}

#[pyfunction]
pub fn circumcenter2d_stacked(triangles: Vec<Vec<Vec<f64>>>) -> PyResult<Vec<(f64, f64)>> {
    let t = triangles_from_py(triangles)?;
    let centers = circumgeom::circumcenter_stacked(&t).map_err(map_circum_err)?;
    Ok(centers_to_py(&centers))
}

/// Circumradii of `(p0[i], p1[i], p2[i])`.
#[pyfunction]
pub fn circumradius2d(
    p0: Vec<Vec<f64>>,
    p1: Vec<Vec<f64>>,
    p2: Vec<Vec<f64>>,
) -> PyResult<Vec<f64>> {
    let (p0, p1, p2) = (
        points_from_py("p0", p0)?,
        points_from_py("p1", p1)?,
        points_from_py("p2", p2)?,
    );
    let radii = circumgeom::circumradius(&p0, &p1, &p2).map_err(map_circum_err)?;
    Ok(radii.to_vec())
}

#[pyfunction]
pub fn circumradius2d_stacked(triangles: Vec<Vec<Vec<f64>>>) -> PyResult<Vec<f64>> {
    let t = triangles_from_py(triangles)?;
    let radii = circumgeom::circumradius_stacked(&t).map_err(map_circum_err)?;
    Ok(radii.to_vec())
}

/// Circumcircle of one triangle: `((cx, cy), r)`. Collinear input gives inf/NaN.
#[pyfunction]
pub fn circumcircle2d(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> ((f64, f64), f64) {
    let cc = Circumcircle::of(
        Point2::new(a.0, a.1),
        Point2::new(b.0, b.1),
        Point2::new(c.0, c.1),
    );
    ((cc.center.x, cc.center.y), cc.radius)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(circumcenter2d, m)?)?;
    m.add_function(wrap_pyfunction!(circumcenter2d_stacked, m)?)?;
    m.add_function(wrap_pyfunction!(circumradius2d, m)?)?;
    m.add_function(wrap_pyfunction!(circumradius2d_stacked, m)?)?;
    m.add_function(wrap_pyfunction!(circumcircle2d, m)?)?;
    Ok(())
}
