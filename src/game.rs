//! Render-loop context
//!
//! One `Game` per page owns all client state: the smoothed render state,
//! the latest snapshot, the active phase, particles, session and HUD.
//! Message handlers and the frame callback run on the same thread and
//! never interleave mid-call, so plain `&mut self` access is enough.

use glam::Vec2;

use crate::consts::{HEIGHT, WIDTH};
use crate::hud::{FpsCounter, Hud, OverlayView};
use crate::net::Channel;
use crate::protocol::{self, Inbound, Phase, Role, Side, Snapshot};
use crate::renderer::{self, Surface};
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::{self, ParticleSystem, RenderState};

pub struct Game<C: Channel> {
    render_state: RenderState,
    /// Latest snapshot; each one fully replaces the previous
    target: Option<Snapshot>,
    phase: Phase,
    particles: ParticleSystem,
    session: Session,
    hud: Hud,
    fps: FpsCounter,
    smoothing: f32,
    bursts_enabled: bool,
    channel: C,
}

impl<C: Channel> Game<C> {
    pub fn new(settings: &Settings, seed: u64, channel: C) -> Self {
        Self {
            render_state: RenderState::default(),
            target: None,
            phase: Phase::default(),
            particles: ParticleSystem::new(seed),
            session: Session::new(),
            hud: Hud::default(),
            fps: FpsCounter::default(),
            smoothing: settings.effective_smoothing(),
            bursts_enabled: settings.effective_particles(),
            channel,
        }
    }

    /// Decode and apply one raw channel message.
    ///
    /// Undecodable messages are logged and dropped; the loop keeps going.
    pub fn handle_text(&mut self, text: &str) {
        match protocol::decode(text) {
            Ok(msg) => self.handle_message(msg),
            Err(e) => log::warn!("Dropping undecodable message: {}", e),
        }
    }

    pub fn handle_message(&mut self, msg: Inbound) {
        log::debug!("recv {:?}", msg);
        match msg {
            Inbound::AssignRole { role } => {
                self.session.on_assign_role(role);
                self.hud.on_assign_role(role);
            }
            Inbound::StateUpdate(snap) => {
                if snap.phase != self.phase {
                    log::info!("Phase changed: {:?} -> {:?}", self.phase, snap.phase);
                }
                self.phase = snap.phase;
                self.hud.apply_snapshot(&snap);
                self.target = Some(snap);
            }
            Inbound::GoalEvent { scorer } => self.on_goal(scorer),
        }
    }

    /// Burst at the far edge the scorer attacks, in the scorer's color
    fn on_goal(&mut self, scorer: Side) {
        log::info!("Goal by {:?}", scorer);
        if !self.bursts_enabled {
            return;
        }
        let x = match scorer {
            Side::P1 => WIDTH,
            Side::P2 => 0.0,
        };
        let spread = self.phase.style().burst_spread;
        self.particles
            .spawn_burst(Vec2::new(x, HEIGHT / 2.0), scorer.color(), spread);
    }

    /// One display refresh: smooth toward the target, then draw
    pub fn frame(&mut self, surface: &mut dyn Surface, time: f64) {
        self.fps.tick(time);
        sim::advance(&mut self.render_state, self.target.as_ref(), self.smoothing);
        renderer::render(
            surface,
            &self.render_state,
            self.phase,
            &mut self.particles,
        );
    }

    /// Forward one action gesture; returns whether anything was sent
    pub fn send_input(&mut self) -> bool {
        self.session.send_input(&mut self.channel)
    }

    pub fn request_restart(&mut self) {
        self.session.request_restart(&mut self.channel);
    }

    pub fn role(&self) -> Role {
        self.session.role()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn overlay_view(&self) -> OverlayView {
        self.hud.overlay.view(self.session.role())
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    pub fn render_state(&self) -> &RenderState {
        &self.render_state
    }

    pub fn target(&self) -> Option<&Snapshot> {
        self.target.as_ref()
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }
}
