//! Command implementations for the analytics CLI

pub mod convert;
pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use convert::run_convert;
pub use serve::run_serve;
