//! PyO3 bindings for `circumgeom`.
//!
//! Notes
//! - Keep bindings thin and predictable: nested lists in, tuples/lists out.
//!   NumPy conversion happens in the Python wrapper.
//! - Shape errors surface as `ValueError` with the library's message, e.g.
//!   `circumradius: p0 only supports 2D coordinates, got width 3`.

mod common;
mod geom;

use pyo3::prelude::*;

#[pymodule]
fn circumgeom_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    m.add("__version__", circumgeom::VERSION)?;
    Ok(())
}
