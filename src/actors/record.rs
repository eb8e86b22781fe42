//! # Actor record: one registered unit of work.
//!
//! ```text
//!                 depends_on (input gates, owned by other actors)
//!                   │   │   │
//!                   ▼   ▼   ▼
//!   ┌──────────────────────────────────────┐
//!   │ ActorRecord                          │
//!   │  - id                                │
//!   │  - execute(ReadySignal) -> Future    │
//!   │  - interrupt(Option<&ActorError>)    │
//!   └──────────────────┬───────────────────┘
//!                      ▼
//!          provides (own output gate) ──► dependents
//! ```
//!
//! ## Rules
//! - The record is **consumed once** by `Group::run` (split into a spawned half and a
//!   teardown half).
//! - `interrupt` must be safe to call after `execute` returned or if it never started.

use std::future::Future;
use std::pin::Pin;

use crate::{
    actors::ActorId,
    error::ActorError,
    gate::{Dependency, ReadySignal},
};

/// Boxed future produced by an actor's execute body.
pub(crate) type BoxActorFuture = Pin<Box<dyn Future<Output = Result<(), ActorError>> + Send + 'static>>;

/// Type-erased execute body.
pub(crate) type Execute = Box<dyn FnOnce(ReadySignal) -> BoxActorFuture + Send + 'static>;

/// Type-erased interrupt callback.
pub(crate) type Interrupt = Box<dyn FnOnce(Option<&ActorError>) + Send + 'static>;

/// Registration-time association of an actor with its gates.
pub(crate) struct ActorRecord {
    pub(crate) id: ActorId,
    pub(crate) execute: Execute,
    pub(crate) interrupt: Interrupt,
    /// Depend on me.
    pub(crate) provides: Dependency,
    /// I'm dependent.
    pub(crate) depends_on: Vec<Dependency>,
}

impl ActorRecord {
    /// Creates a record with a fresh pending output gate.
    pub(crate) fn new<F, Fut, I>(id: ActorId, execute: F, interrupt: I, depends_on: Vec<Dependency>) -> Self
    where
        F: FnOnce(ReadySignal) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActorError>> + Send + 'static,
        I: FnOnce(Option<&ActorError>) + Send + 'static,
    {
        Self {
            id,
            execute: Box::new(move |ready| Box::pin(execute(ready)) as BoxActorFuture),
            interrupt: Box::new(interrupt),
            provides: Dependency::new(id),
            depends_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateState;

    #[test]
    fn new_record_has_pending_gate_owned_by_it() {
        let id = ActorId::new(4);
        let rec = ActorRecord::new(id, |_ready| async { Ok(()) }, |_err| {}, Vec::new());
        assert_eq!(rec.id, id);
        assert_eq!(rec.provides.owner(), id);
        assert_eq!(rec.provides.state(), GateState::Pending);
        assert!(rec.depends_on.is_empty());
    }

    #[test]
    fn keeps_dependency_order() {
        let a = Dependency::new(ActorId::new(0));
        let b = Dependency::new(ActorId::new(1));
        let rec = ActorRecord::new(
            ActorId::new(2),
            |_ready| async { Ok(()) },
            |_err| {},
            vec![b.clone(), a.clone()],
        );
        let owners: Vec<_> = rec.depends_on.iter().map(Dependency::owner).collect();
        assert_eq!(owners, vec![ActorId::new(1), ActorId::new(0)]);
    }
}
