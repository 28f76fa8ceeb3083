//! Client-side simulation
//!
//! Nothing here affects the match outcome; the server is authoritative.
//! This module only smooths what the server says and animates effects:
//! - Snapshot interpolation (`interp`)
//! - Goal particle bursts (`particles`)
//!
//! Both are deterministic: fixed per-frame steps, seeded RNG.

pub mod interp;
pub mod particles;

pub use interp::{BallRenderState, PlayerRenderState, RenderState, advance};
pub use particles::{Particle, ParticleSystem};
