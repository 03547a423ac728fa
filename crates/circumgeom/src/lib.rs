//! Batched 2D circumgeometry.
//!
//! Computes circumcenters and circumradii for batches of triangles, the
//! primitive consumed by incircle tests and flip decisions in a Delaunay
//! pipeline. Batches are `ndarray` arrays (`[N, 2]` point batches or one
//! `[N, 3, 2]` triangle-major batch); per-row math runs on `nalgebra` vectors.
//!
//! API Policy
//! - `api` is the curated surface for callers (CLI, bindings, benches).
//! - Collinear triangles are not rejected: their outputs are ±inf/NaN.

pub mod api;
pub mod circum;
pub mod geometry;
pub mod rand2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use circum::{
    circumcenter, circumcenter_stacked, circumcircle, circumcircle_stacked, circumradius,
    circumradius_stacked, stack_triangles, CircumCfg, CircumEngine, CircumError, Circumcircles,
    ShapeFault,
};
pub use geometry::{Circumcircle, Coord};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::circum::{
        circumcenter, circumcenter_stacked, circumcircle, circumcircle_stacked, circumradius,
        circumradius_stacked, stack_triangles, CircumCfg, CircumEngine, CircumError,
        Circumcircles,
    };
    pub use crate::geometry::{Circumcircle, Coord};
    pub use crate::rand2::{draw_triangles, ReplayToken, TriangleCfg};
    pub use nalgebra::{Point2, Vector2 as Vec2};
}
