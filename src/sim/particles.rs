//! Goal celebration particles
//!
//! Purely visual: bursts of squares that fly out, fall under gravity and
//! fade. There is no cap; overlapping bursts clear themselves within
//! `PARTICLE_LIFETIME_FRAMES`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::renderer::{Color, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Frames stepped so far
    age: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: Color) -> Self {
        Self {
            pos,
            vel,
            color,
            age: 0,
        }
    }

    /// Remaining life in 0..=1; starts at 1.0 and drops by `PARTICLE_DECAY` per step
    pub fn life(&self) -> f32 {
        (1.0 - self.age as f32 * PARTICLE_DECAY).max(0.0)
    }

    /// Life counted in whole frames so the last step lands exactly on zero
    pub fn is_dead(&self) -> bool {
        self.age >= PARTICLE_LIFETIME_FRAMES
    }

    fn step(&mut self) {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.age += 1;
    }
}

/// Owns every live particle
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ParticleSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Append `BURST_SIZE` particles at `origin`, each with both velocity
    /// components drawn uniformly from `[-spread, spread]`.
    pub fn spawn_burst(&mut self, origin: Vec2, color: Color, spread: f32) {
        self.particles.reserve(BURST_SIZE);
        for _ in 0..BURST_SIZE {
            let vel = Vec2::new(
                self.rng.random_range(-spread..=spread),
                self.rng.random_range(-spread..=spread),
            );
            self.particles.push(Particle::new(origin, vel, color));
        }
    }

    /// Advance every particle one frame and cull the dead ones.
    ///
    /// Returns how many were removed.
    pub fn step(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(|p| {
            p.step();
            !p.is_dead()
        });
        before - self.particles.len()
    }

    /// Paint each particle as a flat square with opacity equal to its life
    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.particles.is_empty() {
            return;
        }
        for p in &self.particles {
            surface.set_alpha(p.life());
            surface.set_fill(p.color);
            surface.fill_rect(p.pos.x, p.pos.y, PARTICLE_SIZE, PARTICLE_SIZE);
        }
        surface.set_alpha(1.0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::palette;
    use crate::renderer::recording::RecordingSurface;

    #[test]
    fn test_burst_adds_exactly_fifty() {
        let mut system = ParticleSystem::new(7);
        for expected in [50, 100, 150] {
            system.spawn_burst(Vec2::ZERO, palette::P1_BLUE, 10.0);
            assert_eq!(system.len(), expected);
        }
    }

    #[test]
    fn test_burst_velocity_within_spread() {
        let mut system = ParticleSystem::new(42);
        system.spawn_burst(Vec2::new(800.0, 225.0), palette::P2_RED, 7.5);

        for p in system.particles() {
            assert_eq!(p.pos, Vec2::new(800.0, 225.0));
            assert!(p.vel.x.abs() <= 7.5 && p.vel.y.abs() <= 7.5);
            assert_eq!(p.life(), 1.0);
            assert_eq!(p.color, palette::P2_RED);
        }
    }

    #[test]
    fn test_step_applies_velocity_then_gravity() {
        let mut system = ParticleSystem::new(1);
        system
            .particles
            .push(Particle::new(Vec2::ZERO, Vec2::new(2.0, -3.0), palette::WHITE));

        system.step();
        let p = &system.particles()[0];
        assert_eq!(p.pos, Vec2::new(2.0, -3.0));
        assert_eq!(p.vel, Vec2::new(2.0, -2.5));
        assert!((p.life() - 0.98).abs() < 1e-6);

        system.step();
        let p = &system.particles()[0];
        assert_eq!(p.pos, Vec2::new(4.0, -5.5));
    }

    #[test]
    fn test_removed_exactly_on_frame_fifty() {
        let mut system = ParticleSystem::new(3);
        system.spawn_burst(Vec2::ZERO, palette::WHITE, 10.0);

        for frame in 1..PARTICLE_LIFETIME_FRAMES {
            assert_eq!(system.step(), 0, "removed early on frame {frame}");
            assert!(system.particles().iter().all(|p| p.life() > 0.0));
        }
        assert_eq!(system.step(), BURST_SIZE);
        assert!(system.is_empty());
    }

    #[test]
    fn test_staggered_bursts_cull_without_skipping() {
        let mut system = ParticleSystem::new(9);

        // Three bursts spawned 10 frames apart, interleaving old and young particles
        for _ in 0..3 {
            system.spawn_burst(Vec2::ZERO, palette::WHITE, 10.0);
            for _ in 0..10 {
                system.step();
            }
        }
        // Ages now 30, 20, 10
        assert_eq!(system.len(), 150);

        for _ in 0..20 {
            system.step();
        }
        assert_eq!(system.len(), 100);

        for _ in 0..10 {
            system.step();
        }
        assert_eq!(system.len(), 50);

        for _ in 0..10 {
            system.step();
        }
        assert!(system.is_empty());
    }

    #[test]
    fn test_life_is_non_increasing() {
        let mut system = ParticleSystem::new(11);
        system.spawn_burst(Vec2::ZERO, palette::WHITE, 10.0);
        let mut last = 1.0;
        while !system.is_empty() {
            let life = system.particles()[0].life();
            assert!(life <= last);
            last = life;
            system.step();
        }
    }

    #[test]
    fn test_draw_uses_life_as_alpha() {
        let mut system = ParticleSystem::new(5);
        system.spawn_burst(Vec2::new(10.0, 20.0), palette::P1_BLUE, 1.0);
        for _ in 0..25 {
            system.step();
        }

        let mut surface = RecordingSurface::new();
        system.draw(&mut surface);

        let rects: Vec<_> = surface.rects().collect();
        assert_eq!(rects.len(), BURST_SIZE);
        for &(_, _, w, h, color) in &rects {
            assert_eq!((w, h), (PARTICLE_SIZE, PARTICLE_SIZE));
            assert_eq!(color, palette::P1_BLUE);
        }
        let alpha = surface.commands.iter().find_map(|c| match c {
            crate::renderer::recording::DrawCommand::Rect { alpha, .. } => Some(*alpha),
            _ => None,
        });
        assert!((alpha.unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_same_seed_same_burst() {
        let mut a = ParticleSystem::new(1234);
        let mut b = ParticleSystem::new(1234);
        a.spawn_burst(Vec2::ZERO, palette::WHITE, 10.0);
        b.spawn_burst(Vec2::ZERO, palette::WHITE, 10.0);
        assert_eq!(a.particles(), b.particles());
    }
}
