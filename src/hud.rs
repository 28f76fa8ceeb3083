//! HUD state: overlay, scoreboard, labels, FPS
//!
//! The overlay mirrors the latest snapshot's status and keeps no history of
//! its own. The DOM side just copies `OverlayView` into the page.

use crate::protocol::{MatchStatus, Phase, Role, Side, Snapshot};

/// Message overlay shown over the pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    Hidden,
    #[default]
    Waiting,
    Goal,
    GameOver { winner: Option<Side> },
}

impl Overlay {
    pub fn from_snapshot(snap: &Snapshot) -> Self {
        match snap.status {
            MatchStatus::Waiting => Overlay::Waiting,
            MatchStatus::Playing => Overlay::Hidden,
            MatchStatus::Goal => Overlay::Goal,
            MatchStatus::GameOver => Overlay::GameOver {
                winner: snap.winner,
            },
        }
    }

    /// What the page should show, given who is watching
    pub fn view(self, role: Role) -> OverlayView {
        match self {
            Overlay::Hidden => OverlayView {
                visible: false,
                text: String::new(),
                show_restart: false,
            },
            Overlay::Waiting => OverlayView::message("Waiting for opponent..."),
            Overlay::Goal => OverlayView::message("GOAL!!!"),
            Overlay::GameOver { winner } => OverlayView {
                visible: true,
                text: match winner {
                    Some(side) => format!("{} WINS!", team_name(side)),
                    None => "GAME OVER".to_string(),
                },
                show_restart: role.is_player(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub visible: bool,
    pub text: String,
    pub show_restart: bool,
}

impl OverlayView {
    fn message(text: &str) -> Self {
        Self {
            visible: true,
            text: text.to_string(),
            show_restart: false,
        }
    }
}

pub fn team_name(side: Side) -> &'static str {
    match side {
        Side::P1 => "BLUE",
        Side::P2 => "RED",
    }
}

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::P1 => "PLAYER 1 (BLUE)",
        Role::P2 => "PLAYER 2 (RED)",
        Role::Spectator => "SPECTATOR",
    }
}

pub fn phase_banner(phase: Phase) -> &'static str {
    phase.style().banner
}

/// Everything the DOM layer needs to refresh the page chrome
#[derive(Debug, Clone, Default)]
pub struct Hud {
    pub overlay: Overlay,
    pub scores: [u32; 2],
}

impl Hud {
    pub fn apply_snapshot(&mut self, snap: &Snapshot) {
        self.overlay = Overlay::from_snapshot(snap);
        self.scores = [snap.players.p1.score, snap.players.p2.score];
    }

    /// A freshly seated player doesn't need the waiting card until the
    /// server says so
    pub fn on_assign_role(&mut self, role: Role) {
        if role.is_player() {
            self.overlay = Overlay::Hidden;
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::P1 => self.scores[0],
            Side::P2 => self.scores[1],
        }
    }
}

/// Frames-per-second over a rolling window of 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    /// Record a frame timestamp (ms)
    pub fn tick(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest entry sits where the next write goes, len - 1 intervals back
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time - oldest;
            if elapsed > 0.0 {
                let intervals = (self.frame_times.len() - 1) as f64;
                self.fps = (intervals * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
