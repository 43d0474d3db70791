//! # User Interface
//!
//! Colored terminal output and session rendering.

pub mod log;
pub mod render;

pub use log::{debug, error, header, info, print_logo, success, warn, Log};
