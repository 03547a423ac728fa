use circumgeom::CircumError;
use ndarray::{Array2, Array3};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// `[[x, y], ...]` → `[N, W]`; rows must share one width (`W = 2` when empty).
pub fn points_from_py(label: &str, rows: Vec<Vec<f64>>) -> PyResult<Array2<f64>> {
    let n = rows.len();
    let width = rows.first().map_or(2, Vec::len);
    let mut flat = Vec::with_capacity(n * width);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != width {
            return Err(PyValueError::new_err(format!(
                "{label}[{i}] has {} coordinates, expected {width}",
                row.len()
            )));
        }
        flat.extend(row);
    }
    Array2::from_shape_vec((n, width), flat).map_err(|err| PyValueError::new_err(err.to_string()))
}

/// `[[[x, y] * V], ...]` → `[N, V, W]`, again rejecting ragged input.
pub fn triangles_from_py(tris: Vec<Vec<Vec<f64>>>) -> PyResult<Array3<f64>> {
    let n = tris.len();
    let vertices = tris.first().map_or(3, Vec::len);
    let width = tris
        .first()
        .and_then(|t| t.first())
        .map_or(2, Vec::len);
    let mut flat = Vec::with_capacity(n * vertices * width);
    for (i, tri) in tris.into_iter().enumerate() {
        if tri.len() != vertices {
            return Err(PyValueError::new_err(format!(
                "triangles[{i}] has {} vertices, expected {vertices}",
                tri.len()
            )));
        }
        for (k, p) in tri.into_iter().enumerate() {
            if p.len() != width {
                return Err(PyValueError::new_err(format!(
                    "triangles[{i}][{k}] has {} coordinates, expected {width}",
                    p.len()
                )));
            }
            flat.extend(p);
        }
    }
    Array3::from_shape_vec((n, vertices, width), flat)
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

pub fn centers_to_py(centers: &Array2<f64>) -> Vec<(f64, f64)> {
    centers.rows().into_iter().map(|c| (c[0], c[1])).collect()
}

pub fn map_circum_err(err: CircumError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
