//! # Events emitted while a group runs.
//!
//! The [`EventKind`] enum classifies event types across three categories:
//! - **Group events**: run lifecycle (started, interrupted, drained)
//! - **Actor events**: per-actor flow (waiting, skipped, starting, ready, stopped, failed, panicked)
//! - **Subscriber events**: delivery problems (overflow, panic)
//!
//! The [`Event`] struct carries additional metadata such as timestamps, actor id,
//! reasons and counts.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//!
//! ## Example
//! ```rust
//! use rungate::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::GroupInterrupted).with_reason("boom");
//!
//! assert_eq!(ev.kind, EventKind::GroupInterrupted);
//! assert_eq!(ev.reason.as_deref(), Some("boom"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::actors::ActorId;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of group events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Group events ===
    /// `Group::run` spawned its actors.
    ///
    /// Sets:
    /// - `actors`: number of registered actors
    GroupStarted,

    /// First actor completed; every gate is interrupted and every interrupt callback invoked.
    ///
    /// Sets:
    /// - `actor`: actor whose completion ended the run (absent if its task could not be joined)
    /// - `reason`: terminal error message (absent on success)
    GroupInterrupted,

    /// Every actor completed; `Group::run` is about to return.
    GroupDrained,

    // === Actor events ===
    /// Actor is waiting on its input gates.
    ///
    /// Sets:
    /// - `actor`: actor id
    /// - `deps`: number of input gates
    ActorWaiting,

    /// At least one input gate was interrupted; execute was not called.
    ///
    /// Sets:
    /// - `actor`: actor id
    ActorSkipped,

    /// Execute is about to be invoked.
    ///
    /// Sets:
    /// - `actor`: actor id
    ActorStarting,

    /// Actor announced readiness through its [`ReadySignal`](crate::ReadySignal).
    ///
    /// Sets:
    /// - `actor`: actor id
    ActorReady,

    /// Execute returned `Ok(())` or [`ActorError::Canceled`](crate::ActorError::Canceled).
    ///
    /// Sets:
    /// - `actor`: actor id
    /// - `reason`: `"canceled"` for a graceful cancellation
    ActorStopped,

    /// Execute returned an error.
    ///
    /// Sets:
    /// - `actor`: actor id
    /// - `reason`: error message
    ActorFailed,

    /// Execute panicked; the panic was contained.
    ///
    /// Sets:
    /// - `actor`: actor id
    /// - `reason`: panic message
    ActorPanicked,

    // === Subscriber events ===
    /// Subscriber panicked during event processing.
    ///
    /// Sets:
    /// - `reason`: subscriber name and panic message
    SubscriberPanicked,

    /// Subscriber dropped an event (queue full, worker closed, or the listener lagged behind the bus).
    ///
    /// Sets:
    /// - `reason`: subscriber name and cause (`full`, `closed`), or `listener_lagged skipped=N`
    SubscriberOverflow,
}

/// Group event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Actor the event is about, if applicable.
    pub actor: Option<ActorId>,
    /// Human-readable reason (errors, overflow details, etc.).
    pub reason: Option<Arc<str>>,
    /// Number of input gates of the actor.
    pub deps: Option<u32>,
    /// Number of actors in the group.
    pub actors: Option<u32>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            actor: None,
            reason: None,
            deps: None,
            actors: None,
        }
    }

    /// Attaches an actor id.
    #[inline]
    pub fn with_actor(mut self, actor: ActorId) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches the number of input gates (saturating at `u32::MAX`).
    #[inline]
    pub fn with_deps(mut self, n: usize) -> Self {
        self.deps = Some(u32::try_from(n).unwrap_or(u32::MAX));
        self
    }

    /// Attaches the group size (saturating at `u32::MAX`).
    #[inline]
    pub fn with_actors(mut self, n: usize) -> Self {
        self.actors = Some(u32::try_from(n).unwrap_or(u32::MAX));
        self
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_reason(format!("subscriber={subscriber} reason={reason}"))
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_reason(format!("subscriber={subscriber} info={info}"))
    }

    /// Creates the overflow event for a listener that fell behind the bus by `skipped` events.
    #[inline]
    pub fn listener_lagged(skipped: u64) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_reason(format!("listener_lagged skipped={skipped}"))
    }

    /// Returns `true` for [`EventKind::SubscriberOverflow`] events.
    #[inline]
    pub fn is_subscriber_overflow(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberOverflow)
    }
}
