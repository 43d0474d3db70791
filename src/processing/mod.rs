//! Vector post-processing

pub mod projection;

pub use projection::{project, ProjectedPoint};
