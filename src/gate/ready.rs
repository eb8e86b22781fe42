//! # ReadySignal: capability to resolve one gate as ready.
//!
//! Handed to the execute body registered with [`Group::add_dep`](crate::Group::add_dep).
//! Calling [`ReadySignal::ready`] releases every actor depending on the owner.
//!
//! ## Rules
//! - Optional: an actor may never become ready (dependents are then skipped at shutdown).
//! - Idempotent: only the first call has an effect.
//! - Calling it after group shutdown began is a no-op.

use crate::{
    actors::ActorId,
    events::{Bus, Event, EventKind},
    gate::Dependency,
};

/// Capability bound to a single actor's output gate.
#[derive(Clone, Debug)]
pub struct ReadySignal {
    gate: Dependency,
    bus: Bus,
}

impl ReadySignal {
    pub(crate) fn new(gate: Dependency, bus: Bus) -> Self {
        Self { gate, bus }
    }

    /// Announces readiness and unblocks dependents.
    pub fn ready(&self) {
        if self.gate.resolve_ready() {
            self.bus
                .publish(Event::new(EventKind::ActorReady).with_actor(self.gate.owner()));
        }
    }

    /// Actor this signal belongs to.
    #[inline]
    pub fn actor(&self) -> ActorId {
        self.gate.owner()
    }
}
