//! Embedding storage system

pub mod collection;
pub mod source;
pub mod words;

pub use collection::{Client, Collection, Metric, Neighbor};
pub use words::{Reconcile, WordStore};
