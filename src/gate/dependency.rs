//! # Dependency: one actor's output gate.
//!
//! [`Dependency`] is returned by [`Group::add_dep`](crate::Group::add_dep) and passed to
//! later registrations to make them wait for the owning actor.
//!
//! ## Implementation
//! ```text
//! state: AtomicU8 { PENDING | READY | INTERRUPTED }
//!
//! resolve_*():  CAS(PENDING → X) ── won ──► notify_waiters()
//!                               └─ lost ─► no-op
//!
//! wait():  loop {
//!            notified = notify.notified(); enable(notified)   // register first
//!            match state { READY → true, INTERRUPTED → false, PENDING → notified.await }
//!          }
//! ```
//! Registering the waiter before reading the state means a resolution racing with
//! `wait()` is never missed.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use tokio::sync::Notify;

use crate::actors::ActorId;

const PENDING: u8 = 0;
const READY: u8 = 1;
const INTERRUPTED: u8 = 2;

/// Observable state of a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Not resolved yet.
    Pending,
    /// Owner announced readiness.
    Ready,
    /// Resolved by group shutdown before the owner announced readiness.
    Interrupted,
}

struct Gate {
    state: AtomicU8,
    notify: Notify,
    owner: ActorId,
}

/// Shared handle to an actor's output gate.
///
/// Cheap to clone. Pass it to [`Group::add`](crate::Group::add) /
/// [`Group::add_dep`](crate::Group::add_dep) to make an actor wait for the owner.
///
/// # Example
/// ```rust
/// use rungate::{Group, GateState};
///
/// let mut group = Group::new();
/// let db = group.add_dep(|ready| async move { ready.ready(); Ok(()) }, |_err| {}, []);
/// assert_eq!(db.state(), GateState::Pending);
/// group.add(|| async { Ok(()) }, |_err| {}, [db.clone()]);
/// ```
#[derive(Clone)]
pub struct Dependency {
    gate: Arc<Gate>,
}

impl Dependency {
    pub(crate) fn new(owner: ActorId) -> Self {
        Self {
            gate: Arc::new(Gate {
                state: AtomicU8::new(PENDING),
                notify: Notify::new(),
                owner,
            }),
        }
    }

    /// Actor that resolves this gate.
    #[inline]
    pub fn owner(&self) -> ActorId {
        self.gate.owner
    }

    /// Current state of the gate.
    pub fn state(&self) -> GateState {
        match self.gate.state.load(Ordering::Acquire) {
            READY => GateState::Ready,
            INTERRUPTED => GateState::Interrupted,
            _ => GateState::Pending,
        }
    }

    /// Returns `true` once the gate left [`GateState::Pending`].
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.state() != GateState::Pending
    }

    /// Waits until the gate resolves.
    ///
    /// Returns `true` if the owner announced readiness, `false` if the gate was
    /// interrupted by group shutdown. Any number of tasks may wait concurrently;
    /// all of them are released at resolution.
    pub async fn wait(&self) -> bool {
        loop {
            let notified = self.gate.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            match self.state() {
                GateState::Ready => return true,
                GateState::Interrupted => return false,
                GateState::Pending => notified.await,
            }
        }
    }

    /// Resolves the gate as ready. Returns `true` if this call performed the transition.
    pub(crate) fn resolve_ready(&self) -> bool {
        self.resolve(READY)
    }

    /// Resolves the gate as interrupted. Returns `true` if this call performed the transition.
    pub(crate) fn resolve_interrupted(&self) -> bool {
        self.resolve(INTERRUPTED)
    }

    fn resolve(&self, to: u8) -> bool {
        let won = self
            .gate
            .state
            .compare_exchange(PENDING, to, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if won {
            self.gate.notify.notify_waiters();
        }
        won
    }
}

impl fmt::Debug for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency")
            .field("owner", &self.owner())
            .field("state", &self.state())
            .finish()
    }
}
