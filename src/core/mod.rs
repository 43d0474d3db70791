//! Core domain types

pub mod embedding;
pub mod token;

pub use embedding::Embedding;
