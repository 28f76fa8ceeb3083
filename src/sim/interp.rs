//! Snapshot smoothing
//!
//! The rendered state chases the latest snapshot with a first-order
//! exponential filter, re-applied every frame. No prediction and no
//! extrapolation: between snapshots the avatars simply settle toward the
//! last known target.
//!
//! Angles are blended as plain scalars, so a target crossing 359° → 1°
//! sweeps the long way round.

use glam::Vec2;

use crate::consts::WIDTH;
use crate::lerp;
use crate::protocol::{BallSnapshot, PlayerSnapshot, Side, Snapshot};

/// Smoothed pose of one avatar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerRenderState {
    pub pos: Vec2,
    /// Body orientation (degrees)
    pub angle: f32,
    /// Limb swing (degrees), applied inside the body frame
    pub leg_angle: f32,
}

impl PlayerRenderState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            angle: 0.0,
            leg_angle: 0.0,
        }
    }

    fn approach(&mut self, target: &PlayerSnapshot, factor: f32) {
        approach(&mut self.pos.x, target.x, factor);
        approach(&mut self.pos.y, target.y, factor);
        approach(&mut self.angle, target.angle, factor);
        approach(&mut self.leg_angle, target.leg_angle, factor);
    }
}

/// Smoothed ball position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallRenderState {
    pub pos: Vec2,
}

impl BallRenderState {
    fn approach(&mut self, target: &BallSnapshot, factor: f32) {
        approach(&mut self.pos.x, target.x, factor);
        approach(&mut self.pos.y, target.y, factor);
    }
}

/// Everything the renderer draws each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    pub p1: PlayerRenderState,
    pub p2: PlayerRenderState,
    pub ball: BallRenderState,
}

impl Default for RenderState {
    /// Kick-off pose used until the first snapshot arrives
    fn default() -> Self {
        Self {
            p1: PlayerRenderState::at(WIDTH / 4.0, 350.0),
            p2: PlayerRenderState::at(WIDTH * 3.0 / 4.0, 350.0),
            ball: BallRenderState {
                pos: Vec2::new(WIDTH / 2.0, 200.0),
            },
        }
    }
}

impl RenderState {
    pub fn player(&self, side: Side) -> &PlayerRenderState {
        match side {
            Side::P1 => &self.p1,
            Side::P2 => &self.p2,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut PlayerRenderState {
        match side {
            Side::P1 => &mut self.p1,
            Side::P2 => &mut self.p2,
        }
    }

    /// True when every tracked field is a finite number
    pub fn is_finite(&self) -> bool {
        [self.p1, self.p2]
            .iter()
            .all(|p| p.pos.is_finite() && p.angle.is_finite() && p.leg_angle.is_finite())
            && self.ball.pos.is_finite()
    }
}

/// Move one field a `factor` of the way toward `target`.
///
/// A non-finite target (missing from the snapshot) leaves the field alone.
#[inline]
fn approach(current: &mut f32, target: f32, factor: f32) {
    if target.is_finite() {
        *current = lerp(*current, target, factor);
    }
}

/// Advance every rendered field toward the target snapshot.
///
/// No-op until a snapshot has been received.
pub fn advance(render: &mut RenderState, target: Option<&Snapshot>, factor: f32) {
    let Some(target) = target else {
        return;
    };

    for side in Side::BOTH {
        render
            .player_mut(side)
            .approach(target.players.get(side), factor);
    }
    render.ball.approach(&target.ball, factor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_SMOOTHING;
    use crate::protocol::Players;
    use proptest::prelude::*;

    fn target(x: f32, y: f32, angle: f32) -> Snapshot {
        let player = PlayerSnapshot {
            x,
            y,
            angle,
            leg_angle: angle,
            score: 0,
        };
        Snapshot {
            players: Players {
                p1: player,
                p2: player,
            },
            ball: BallSnapshot { x, y },
            ..Default::default()
        }
    }

    #[test]
    fn test_no_target_is_noop() {
        let mut render = RenderState::default();
        advance(&mut render, None, DEFAULT_SMOOTHING);
        assert_eq!(render, RenderState::default());
    }

    #[test]
    fn test_default_pose() {
        let render = RenderState::default();
        assert_eq!(render.p1.pos, Vec2::new(200.0, 350.0));
        assert_eq!(render.p2.pos, Vec2::new(600.0, 350.0));
        assert_eq!(render.ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(render.p1.angle, 0.0);
    }

    #[test]
    fn test_single_step_moves_quarter_way() {
        let mut render = RenderState::default();
        let snap = target(400.0, 350.0, 40.0);
        advance(&mut render, Some(&snap), 0.25);

        assert!((render.p1.pos.x - 250.0).abs() < 1e-4);
        assert!((render.p2.pos.x - 550.0).abs() < 1e-4);
        assert!((render.p1.angle - 10.0).abs() < 1e-4);
        assert!((render.p1.leg_angle - 10.0).abs() < 1e-4);
        assert!((render.ball.pos.y - 237.5).abs() < 1e-4);
    }

    #[test]
    fn test_missing_fields_keep_render_finite() {
        let mut render = RenderState::default();
        let mut snap = target(300.0, 300.0, 10.0);
        snap.players.p1.leg_angle = f32::NAN;
        snap.ball.x = f32::INFINITY;

        for _ in 0..10 {
            advance(&mut render, Some(&snap), DEFAULT_SMOOTHING);
        }

        assert!(render.is_finite());
        assert_eq!(render.p1.leg_angle, 0.0);
        assert_eq!(render.ball.pos.x, 400.0);
        // Present fields still move
        assert!(render.ball.pos.y > 200.0);
    }

    #[test]
    fn test_angle_wraps_the_long_way() {
        let mut render = RenderState::default();
        render.p1.angle = 359.0;
        let mut snap = target(200.0, 350.0, 0.0);
        snap.players.p1.angle = 1.0;

        advance(&mut render, Some(&snap), 0.5);
        // Halfway between 359 and 1 as plain scalars, not 0/360
        assert!((render.p1.angle - 180.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn converges_toward_fixed_target(
            start in -500.0f32..500.0,
            goal in -500.0f32..500.0,
            factor in 0.05f32..0.95,
        ) {
            prop_assume!((start - goal).abs() > 1.0);

            let mut render = RenderState::default();
            render.p1.pos.x = start;
            let snap = target(goal, 0.0, 0.0);

            let mut prev = (render.p1.pos.x - goal).abs();
            // Stop once float rounding dominates the remaining gap
            while prev > 1e-2 {
                advance(&mut render, Some(&snap), factor);
                let dist = (render.p1.pos.x - goal).abs();
                prop_assert!(dist < prev);
                prev = dist;
            }
        }
    }
}
