//! Procedural Canvas 2D renderer
//!
//! Everything is drawn from code each frame; there are no sprites. Draw
//! order matters: later layers paint over earlier ones.

pub mod avatar;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod sports;
pub mod surface;

pub use avatar::{Facing, draw_player};
pub use sports::SportStyle;
pub use surface::{Color, Surface, palette};

use crate::consts::{HEIGHT, WIDTH};
use crate::protocol::{Phase, Side};
use crate::sim::{ParticleSystem, RenderState};

/// Draw one frame and advance the particles by one step
pub fn render(
    surface: &mut dyn Surface,
    state: &RenderState,
    phase: Phase,
    particles: &mut ParticleSystem,
) {
    let style = phase.style();

    surface.clear(WIDTH, HEIGHT);
    (style.background)(surface);
    (style.goals)(surface);

    for side in Side::BOTH {
        draw_player(surface, state.player(side), side);
    }

    (style.ball)(surface, state.ball.pos);

    particles.step();
    particles.draw(surface);
}
