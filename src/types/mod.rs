//! Geometry and event types shared by the indexer and the controllers.

mod geometry;
mod pointer;

pub use geometry::*;
pub use pointer::*;
