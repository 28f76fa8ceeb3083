//! Arcade Duel - browser client for a two-player arcade sports game
//!
//! The authoritative match runs elsewhere; this crate turns its snapshot
//! stream into smooth 60 FPS visuals and relays the player's single action.
//!
//! Core modules:
//! - `protocol`: Wire messages exchanged with the match server
//! - `sim`: Client-side smoothing and particle effects
//! - `renderer`: Procedural Canvas 2D drawing
//! - `session`: Local role and outbound input
//! - `hud`: Overlay state machine and HUD text
//! - `game`: Render-loop context tying the above together
//! - `platform`: Browser bindings (socket, input mapping)

pub mod game;
pub mod hud;
pub mod net;
pub mod platform;
pub mod protocol;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical drawing surface size (world units)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 450.0;

    /// Default per-frame smoothing factor toward the latest snapshot
    pub const DEFAULT_SMOOTHING: f32 = 0.25;

    /// Particles spawned per goal burst
    pub const BURST_SIZE: usize = 50;
    /// Downward acceleration applied to particles (units/frame²)
    pub const PARTICLE_GRAVITY: f32 = 0.5;
    /// Frames a particle lives before removal
    pub const PARTICLE_LIFETIME_FRAMES: u32 = 50;
    /// Life lost per frame (life starts at 1.0)
    pub const PARTICLE_DECAY: f32 = 1.0 / PARTICLE_LIFETIME_FRAMES as f32;
    /// Side length of the square drawn for each particle
    pub const PARTICLE_SIZE: f32 = 8.0;

    /// Avatar body radius
    pub const PLAYER_RADIUS: f32 = 30.0;
}

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Degrees to radians for canvas rotation
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
