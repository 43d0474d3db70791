//! # WordMaze Library
//!
//! Word-vector arithmetic over pretrained embeddings: a persisted word store
//! with negated entries, signed-word sessions, and goal rank scoring.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod game;
pub mod processing;
pub mod storage;
pub mod ui;
