//! # GatedActor: one actor's thread of control during a run.
//!
//! `Group::run` splits every [`ActorRecord`] in two halves:
//! - [`GatedActor`]: moved into a spawned task; waits on input gates, then executes or skips;
//! - [`Teardown`]: kept by the group; resolves the output gate as interrupted and invokes
//!   the interrupt callback once the run's terminal outcome is known.
//!
//! ## Per-actor state machine
//! ```text
//! waiting-on-deps ──► all gates Ready ──────► executing ──► completed (execute result)
//!        │
//!        └──────────► any gate Interrupted ─► skipped ────► completed (Ok)
//! ```
//!
//! ## Rules
//! - Every input gate is awaited, even after one was observed interrupted
//! - A skipped actor never calls execute and completes **without error**

use crate::{
    actors::{ActorId, ActorRecord, Execute, Interrupt},
    core::runner::run_once,
    error::ActorError,
    events::{Bus, Event, EventKind},
    gate::{self, Dependency, ReadySignal},
};

/// Spawned half of an actor record.
pub(crate) struct GatedActor {
    id: ActorId,
    execute: Execute,
    provides: Dependency,
    depends_on: Vec<Dependency>,
    bus: Bus,
}

/// Retained half of an actor record, consumed at shutdown.
pub(crate) struct Teardown {
    provides: Dependency,
    interrupt: Interrupt,
}

/// Splits a record into its spawned and retained halves.
pub(crate) fn split(record: ActorRecord, bus: Bus) -> (GatedActor, Teardown) {
    let ActorRecord {
        id,
        execute,
        interrupt,
        provides,
        depends_on,
    } = record;

    let actor = GatedActor {
        id,
        execute,
        provides: provides.clone(),
        depends_on,
        bus,
    };
    let teardown = Teardown {
        provides,
        interrupt,
    };
    (actor, teardown)
}

impl GatedActor {
    /// Waits for dependencies, then executes (or skips) the actor.
    ///
    /// Returns the actor id with its completion outcome.
    pub(crate) async fn run(self) -> (ActorId, Result<(), ActorError>) {
        self.bus.publish(
            Event::new(EventKind::ActorWaiting)
                .with_actor(self.id)
                .with_deps(self.depends_on.len()),
        );

        if !gate::wait_all(&self.depends_on).await {
            self.bus
                .publish(Event::new(EventKind::ActorSkipped).with_actor(self.id));
            return (self.id, Ok(()));
        }

        let ready = ReadySignal::new(self.provides, self.bus.clone());
        let res = run_once(self.id, self.execute, ready, &self.bus).await;
        (self.id, res)
    }
}

impl Teardown {
    /// Force-resolves the output gate and delivers the terminal error.
    pub(crate) fn interrupt(self, err: Option<&ActorError>) {
        self.provides.resolve_interrupted();
        (self.interrupt)(err);
    }
}
