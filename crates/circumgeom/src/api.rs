//! Curated surface for callers outside the crate (CLI, bindings, benches).
//!
//! Re-exports only; everything here is defined in `circum`, `geometry` or
//! `rand2`.

// Batched engine
pub use crate::circum::{
    circumcenter, circumcenter_stacked, circumcircle, circumcircle_stacked, circumradius,
    circumradius_stacked, stack_triangles, CircumCfg, CircumEngine, CircumError, Circumcircles,
    ShapeFault,
};
// Single-triangle kernel
pub use crate::geometry::{circumcenter_offset, parallelogram_area, Circumcircle, Coord};
// Seeded triangle batches
pub use crate::rand2::{draw_triangles, ReplayToken, TriangleCfg};
