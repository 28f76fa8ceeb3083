//! Per-sport visuals
//!
//! Each `Phase` maps to one `SportStyle` describing how to paint its court,
//! its scoring geometry and its ball. Adding a sport means adding a table
//! entry, not another branch in every draw function.

use glam::Vec2;

use super::surface::{Surface, palette};
use crate::consts::{HEIGHT, WIDTH};
use crate::protocol::Phase;

pub struct SportStyle {
    pub phase: Phase,
    /// HUD banner naming the sport
    pub banner: &'static str,
    /// Velocity range (±) of goal particles
    pub burst_spread: f32,
    pub background: fn(&mut dyn Surface),
    pub goals: fn(&mut dyn Surface),
    /// Draws the ball centered on the given world position
    pub ball: fn(&mut dyn Surface, Vec2),
}

pub static SOCCER: SportStyle = SportStyle {
    phase: Phase::Soccer,
    banner: "⚽ SOCCER (10 PTS)",
    burst_spread: 10.0,
    background: no_background,
    goals: soccer_goals,
    ball: soccer_ball,
};

pub static AMERICAN: SportStyle = SportStyle {
    phase: Phase::American,
    banner: "🏈 AMERICAN FOOTBALL",
    burst_spread: 7.5,
    background: no_background,
    goals: goalposts,
    ball: american_ball,
};

pub static BASKET: SportStyle = SportStyle {
    phase: Phase::Basket,
    banner: "🏀 BASKETBALL",
    burst_spread: 10.0,
    background: basket_court,
    goals: hoops,
    ball: basketball,
};

impl Phase {
    pub fn style(self) -> &'static SportStyle {
        match self {
            Phase::Soccer => &SOCCER,
            Phase::American => &AMERICAN,
            Phase::Basket => &BASKET,
        }
    }
}

/// Soccer and American football leave the background to the page
fn no_background(_surface: &mut dyn Surface) {}

fn basket_court(s: &mut dyn Surface) {
    s.set_fill(palette::COURT_ORANGE);
    s.fill_rect(0.0, 0.0, WIDTH, HEIGHT);

    s.set_stroke(palette::WHITE, 2.0);
    s.line(WIDTH / 2.0, 0.0, WIDTH / 2.0, HEIGHT);
    s.stroke_circle(WIDTH / 2.0, HEIGHT / 2.0, 50.0);
}

/// Translucent goal mouths flush to the floor
fn soccer_goals(s: &mut dyn Surface) {
    const W: f32 = 50.0;
    const H: f32 = 140.0;

    s.set_fill(palette::GOAL_AREA);
    s.fill_rect(0.0, HEIGHT - H, W, H);
    s.fill_rect(WIDTH - W, HEIGHT - H, W, H);
}

fn goalposts(s: &mut dyn Surface) {
    const W: f32 = 10.0;
    const H: f32 = 200.0;

    s.set_fill(palette::GOALPOST_YELLOW);
    s.fill_rect(0.0, HEIGHT - H, W, H);
    s.fill_rect(WIDTH - W, HEIGHT - H, W, H);
}

/// Post plus a short rim reaching toward midcourt on each side
fn hoops(s: &mut dyn Surface) {
    const POST_W: f32 = 10.0;
    const POST_H: f32 = 250.0;
    const RIM_W: f32 = 60.0;
    const RIM_H: f32 = 5.0;
    let top = HEIGHT - POST_H;

    s.set_fill(palette::HOOP_RED);
    s.fill_rect(0.0, top, POST_W, POST_H);
    s.fill_rect(0.0, top, RIM_W, RIM_H);
    s.fill_rect(WIDTH - POST_W, top, POST_W, POST_H);
    s.fill_rect(WIDTH - RIM_W, top, RIM_W, RIM_H);
}

/// Cross-hair seams across a circle of radius `r`
fn cross_seams(s: &mut dyn Surface, r: f32) {
    s.line(0.0, -r, 0.0, r);
    s.line(-r, 0.0, r, 0.0);
}

fn soccer_ball(s: &mut dyn Surface, pos: Vec2) {
    const R: f32 = 18.0;

    s.save();
    s.translate(pos.x, pos.y);
    s.set_fill(palette::WHITE);
    s.fill_circle(0.0, 0.0, R);
    s.set_stroke(palette::BLACK, 3.0);
    s.stroke_circle(0.0, 0.0, R);
    cross_seams(s, R);
    s.restore();
}

/// Circle squashed into an ellipse by a non-uniform scale
fn american_ball(s: &mut dyn Surface, pos: Vec2) {
    const R: f32 = 18.0;

    s.save();
    s.translate(pos.x, pos.y);
    s.scale(1.3, 0.8);
    s.set_fill(palette::LEATHER_BROWN);
    s.fill_circle(0.0, 0.0, R);
    s.set_stroke(palette::WHITE, 2.0);
    s.line(-15.0, 0.0, 15.0, 0.0);
    s.restore();
}

fn basketball(s: &mut dyn Surface, pos: Vec2) {
    const R: f32 = 20.0;

    s.save();
    s.translate(pos.x, pos.y);
    s.set_fill(palette::COURT_ORANGE);
    s.fill_circle(0.0, 0.0, R);
    s.set_stroke(palette::BLACK, 3.0);
    s.stroke_circle(0.0, 0.0, R);
    s.set_stroke(palette::BLACK, 2.0);
    cross_seams(s, R);
    s.restore();
}
