//! Outbound message channel
//!
//! Fire-and-forget: no acknowledgements, no retries, no queueing. Lost or
//! duplicated inputs are the server's to reconcile.

use crate::protocol::Outbound;

pub trait Channel {
    fn emit(&mut self, msg: &Outbound);
}

/// Keeps every emitted message; used off-browser and in tests
#[derive(Debug, Default)]
pub struct MemoryChannel {
    pub sent: Vec<Outbound>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything emitted so far
    pub fn drain(&mut self) -> Vec<Outbound> {
        std::mem::take(&mut self.sent)
    }
}

impl Channel for MemoryChannel {
    fn emit(&mut self, msg: &Outbound) {
        log::debug!("emit {:?}", msg);
        self.sent.push(msg.clone());
    }
}
