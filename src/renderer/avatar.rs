//! Procedural avatars
//!
//! Two nested rotations make the whole animation: the body frame turns by
//! `angle`, and the limb frame inside it turns again by `leg_angle`. A kick
//! is just a fast limb sweep layered over a slower body sway.

use super::surface::{Color, Surface, palette};
use crate::consts::PLAYER_RADIUS;
use crate::deg_to_rad;
use crate::protocol::Side;
use crate::sim::PlayerRenderState;

/// Which way an avatar faces; the left-side player looks right and vice versa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// +1 facing right, -1 facing left; mirrors every asymmetric offset
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

impl Side {
    pub fn color(self) -> Color {
        match self {
            Side::P1 => palette::P1_BLUE,
            Side::P2 => palette::P2_RED,
        }
    }

    pub fn facing(self) -> Facing {
        match self {
            Side::P1 => Facing::Right,
            Side::P2 => Facing::Left,
        }
    }
}

pub fn draw_player(s: &mut dyn Surface, player: &PlayerRenderState, side: Side) {
    let dir = side.facing().sign();

    s.save();
    s.translate(player.pos.x, player.pos.y);
    s.rotate(deg_to_rad(player.angle));

    // Limb frame
    s.save();
    s.rotate(deg_to_rad(player.leg_angle));
    s.set_fill(palette::LIMB);
    s.fill_round_rect(-8.0, 10.0, 16.0, 40.0, 5.0);
    s.fill_ellipse(dir * 5.0, 50.0, 12.0, 8.0);
    s.restore();

    // Body
    s.set_fill(side.color());
    s.fill_circle(0.0, 0.0, PLAYER_RADIUS);
    s.set_stroke(palette::BLACK, 3.0);
    s.stroke_circle(0.0, 0.0, PLAYER_RADIUS);

    // Face
    s.set_fill(palette::SKIN);
    s.fill_circle(0.0, -10.0, 15.0);

    // Eye looks toward the facing direction, pupil pushed further out
    let eye_x = dir * 10.0;
    s.set_fill(palette::WHITE);
    s.fill_circle(eye_x, -5.0, 8.0);
    s.set_fill(palette::BLACK);
    s.fill_circle(eye_x + dir * 3.0, -5.0, 3.0);

    s.restore();
}
