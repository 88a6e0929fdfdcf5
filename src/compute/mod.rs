//! Compute module - Pure transforms: bit re-packing and circle geometry.

mod bits;
mod geometry;

pub use bits::*;
pub use geometry::*;
