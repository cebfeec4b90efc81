use crate::domain::model::{DomEvent, ListenTarget, ListenerId};

/// One listener invocation produced while an event propagates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub listener: ListenerId,
    pub current_target: ListenTarget,
    pub event: DomEvent,
}

/// Mutable state shared by every handler of a single dispatch.
#[derive(Debug, Default)]
pub struct EventContext {
    propagation_stopped: bool,
}

impl EventContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners on the current target still run; later targets are skipped.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
