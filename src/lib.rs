//! Closed boundary loops ("faces") of 2D polygons built from straight
//! segments and circular arcs.
//!
//! Edges and faces live in a [`topology::TopologyStore`] arena; a shared
//! [`index::SpatialIndex`] holds every edge for broad-phase queries.
//! [`Polygon`] ties the two together.

pub mod error;
pub mod geometry;
pub mod index;
pub mod io;
pub mod math;
pub mod operations;
pub mod polygon;
pub mod topology;

pub use error::{PolyloopError, Result};
pub use polygon::Polygon;
