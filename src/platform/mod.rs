//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (which gestures count as the action)
//! - The socket carrying snapshots and inputs (wasm only)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;
