//! zipnear-rs
//!
//! Workspace host crate. Re-exports [`zipnear_core`] so the demos can be run
//! from the repository root with `cargo run --example basic_usage`.
pub use zipnear_core::*;
