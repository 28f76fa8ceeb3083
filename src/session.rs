//! Local participant session
//!
//! Tracks which role the server gave us and turns user gestures into
//! outbound messages. Every qualifying gesture is forwarded; there is no
//! debouncing here.

use crate::net::Channel;
use crate::protocol::{Outbound, Role};

#[derive(Debug, Clone, Default)]
pub struct Session {
    role: Role,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Late or repeated assignments simply overwrite
    pub fn on_assign_role(&mut self, role: Role) {
        if self.role != role {
            log::info!("Assigned role {:?} (was {:?})", role, self.role);
        }
        self.role = role;
    }

    /// Emit one `player_input` for a playing role; spectators emit nothing.
    ///
    /// Returns whether a message was sent.
    pub fn send_input(&self, channel: &mut dyn Channel) -> bool {
        match self.role.side() {
            Some(side) => {
                channel.emit(&Outbound::PlayerInput { role: side });
                true
            }
            None => false,
        }
    }

    /// Always emits; gating on match status is the caller's business
    pub fn request_restart(&self, channel: &mut dyn Channel) {
        log::info!("Requesting restart");
        channel.emit(&Outbound::RestartGame);
    }
}
