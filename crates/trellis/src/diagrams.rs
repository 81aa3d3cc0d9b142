//! The diagram builders.
//!
//! Each submodule exposes one pure `build` function that lays out a single
//! documentation diagram with literal coordinates and returns the complete
//! SVG document. Builders share nothing beyond the primitives in
//! [`trellis_core::scene`]; there is no layout algorithm.

pub mod component_flow;
pub mod display_pipeline;
pub mod hal;
pub mod high_level;
pub mod navigation_flow;
pub mod project_structure;
pub mod storage;
pub mod threading;
