//! # Group: dependency-gated actors with first-exit teardown.
//!
//! A [`Group`] collects actors and runs them concurrently. When the first actor
//! completes, every actor is interrupted with that actor's outcome, and
//! [`Group::run`] returns it once all actors have exited.
//!
//! ## High-level architecture
//! ```text
//! Registration (before run):
//!   add_dep(execute, interrupt, deps) ──► ActorRecord { id, provides: Dependency, depends_on }
//!   add(execute, interrupt, deps)     ──► same, readiness capability ignored
//!
//! run():
//!   N == 0 ──► Ok(())
//!
//!   ActorRecord[0]  ActorRecord[1]  ...  ActorRecord[N-1]
//!        │               │                    │
//!        └──► split() ──► GatedActor ──► JoinSet::spawn(actor.run())
//!                    └──► Teardown (kept)
//!
//!   running:   first JoinSet::join_next()        ──► terminal outcome
//!   draining:  for each Teardown:
//!                 provides.resolve_interrupted()  (unblocks stuck waiters)
//!                 interrupt(terminal error)
//!              while JoinSet::join_next() { }
//!   done:      return terminal outcome
//! ```
//!
//! ## Rules
//! - `run` consumes the group: a run is single-shot by construction.
//! - Interrupt callbacks are invoked **exactly once** per actor, including actors that
//!   were skipped, already finished, or never got past their dependencies.
//! - Only the first outcome is returned; later errors reach interrupts and events only.
//! - Dependency cycles are not detected and deadlock the run.
//!
//! ## Example
//! ```rust
//! use rungate::{ActorError, Group};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut group = Group::new();
//!
//!     let db = group.add_dep(
//!         |ready| async move {
//!             ready.ready();
//!             Ok(())
//!         },
//!         |_err| {},
//!         [],
//!     );
//!     group.add(
//!         || async { Err(ActorError::fail("immediate teardown")) },
//!         |_err| {},
//!         [db],
//!     );
//!
//!     let res = group.run().await;
//!     assert!(res.is_err());
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::{
    actors::{ActorId, ActorRecord},
    config::Config,
    core::{
        actor::{self, Teardown},
        builder::GroupBuilder,
        shutdown,
    },
    error::ActorError,
    events::{Bus, Event, EventKind},
    gate::{Dependency, ReadySignal},
    subscribers::{Subscribe, SubscriberSet},
};

/// Collects actors and runs them concurrently with synchronized teardown.
///
/// The zero value (`Group::default()`) is immediately usable.
pub struct Group {
    actors: Vec<ActorRecord>,
    bus: Bus,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl Group {
    /// Creates an empty group with [`Config::default`] and no subscribers.
    pub fn new() -> Self {
        Self::with_parts(Config::default(), Vec::new())
    }

    /// Returns a builder for a group with custom configuration or subscribers.
    pub fn builder(cfg: Config) -> GroupBuilder {
        GroupBuilder::new(cfg)
    }

    pub(crate) fn with_parts(cfg: Config, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        Self {
            actors: Vec::new(),
            bus: Bus::new(cfg.bus_capacity_clamped()),
            subscribers,
        }
    }

    /// Number of registered actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Returns `true` if no actor was registered.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Adds an actor that other actors can depend on.
    ///
    /// `execute` receives a [`ReadySignal`]; calling [`ReadySignal::ready`] releases every
    /// actor registered with the returned [`Dependency`] among its `depends_on`.
    /// Calling it is optional: an actor may never become ready.
    ///
    /// `interrupt` is invoked once with the run's terminal error (`None` on success) and
    /// must make `execute` return promptly. It must be safe to call after `execute`
    /// returned, or if `execute` never started.
    ///
    /// The actor starts only after every dependency in `depends_on` resolved. A `None`
    /// passed where an `Option<Dependency>` is accepted contributes no dependency.
    pub fn add_dep<F, Fut, I, D>(&mut self, execute: F, interrupt: I, depends_on: D) -> Dependency
    where
        F: FnOnce(ReadySignal) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActorError>> + Send + 'static,
        I: FnOnce(Option<&ActorError>) + Send + 'static,
        D: IntoIterator<Item = Dependency>,
    {
        let id = ActorId::new(self.actors.len());
        let record = ActorRecord::new(id, execute, interrupt, depends_on.into_iter().collect());
        let provides = record.provides.clone();
        self.actors.push(record);
        provides
    }

    /// Adds an actor nobody needs to depend on.
    ///
    /// Each actor must be pre-emptable by its `interrupt`: once it is invoked, `execute`
    /// should return. The first actor to return interrupts all others; its error is
    /// passed to every interrupt and returned by [`Group::run`].
    ///
    /// With an empty `depends_on` the actor starts as soon as the run begins.
    pub fn add<F, Fut, I, D>(&mut self, execute: F, interrupt: I, depends_on: D)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActorError>> + Send + 'static,
        I: FnOnce(Option<&ActorError>) + Send + 'static,
        D: IntoIterator<Item = Dependency>,
    {
        self.add_dep(move |_ready| execute(), interrupt, depends_on);
    }

    /// Adds an actor driven by a [`CancellationToken`].
    ///
    /// The interrupt cancels the token handed to `execute`; the body should return once
    /// `token.cancelled()` fires.
    pub fn add_task<F, Fut, D>(&mut self, execute: F, depends_on: D)
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActorError>> + Send + 'static,
        D: IntoIterator<Item = Dependency>,
    {
        let token = CancellationToken::new();
        let ctx = token.clone();
        self.add(move || execute(ctx), move |_err| token.cancel(), depends_on);
    }

    /// Like [`Group::add_task`], for actors others can depend on.
    pub fn add_dep_task<F, Fut, D>(&mut self, execute: F, depends_on: D) -> Dependency
    where
        F: FnOnce(ReadySignal, CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ActorError>> + Send + 'static,
        D: IntoIterator<Item = Dependency>,
    {
        let token = CancellationToken::new();
        let ctx = token.clone();
        self.add_dep(
            move |ready| execute(ready, ctx),
            move |_err| token.cancel(),
            depends_on,
        )
    }

    /// Adds an actor that completes with [`ActorError::Signal`] when the process
    /// receives SIGINT/SIGTERM/SIGQUIT (Ctrl-C on non-unix platforms).
    ///
    /// When interrupted first by another actor, it returns [`ActorError::Canceled`].
    pub fn add_shutdown_signal(&mut self) {
        self.add_task(
            |token| async move {
                tokio::select! {
                    res = shutdown::wait_for_shutdown_signal() => match res {
                        Ok(signal) => Err(ActorError::Signal { signal }),
                        Err(e) => Err(ActorError::fail(format!("signal registration failed: {e}"))),
                    },
                    _ = token.cancelled() => Err(ActorError::Canceled),
                }
            },
            [],
        );
    }

    /// Runs all actors concurrently.
    ///
    /// When the first actor completes, all actors are interrupted with its outcome.
    /// Returns only after every actor has exited, with the first actor's outcome.
    /// A group without actors returns `Ok(())` immediately.
    pub async fn run(self) -> Result<(), ActorError> {
        if self.actors.is_empty() {
            return Ok(());
        }

        let Group {
            actors,
            bus,
            subscribers,
        } = self;

        let listener = (!subscribers.is_empty()).then(|| Listener::spawn(&bus, subscribers));
        bus.publish(Event::new(EventKind::GroupStarted).with_actors(actors.len()));

        let mut set = JoinSet::new();
        let mut teardowns: Vec<Teardown> = Vec::with_capacity(actors.len());
        for record in actors {
            let (actor, teardown) = actor::split(record, bus.clone());
            set.spawn(actor.run());
            teardowns.push(teardown);
        }

        // running: wait for the first completion
        let (first, outcome) = match set.join_next().await {
            Some(joined) => completion(joined),
            None => (None, Ok(())),
        };
        publish_interrupted(&bus, first, &outcome);

        // draining: unblock every waiter and interrupt every actor
        let err = outcome.as_ref().err();
        for teardown in teardowns {
            teardown.interrupt(err);
        }
        while set.join_next().await.is_some() {}

        bus.publish(Event::new(EventKind::GroupDrained));
        if let Some(listener) = listener {
            listener.stop().await;
        }
        outcome
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("actors", &self.actors.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// Maps a joined actor task to `(actor, outcome)`.
///
/// Actor bodies contain their own panics, so a `JoinError` only appears if the task
/// itself was torn down by the runtime.
fn completion(
    joined: Result<(ActorId, Result<(), ActorError>), JoinError>,
) -> (Option<ActorId>, Result<(), ActorError>) {
    match joined {
        Ok((id, res)) => (Some(id), res),
        Err(je) => (None, Err(ActorError::fail(format!("actor task failed: {je}")))),
    }
}

fn publish_interrupted(bus: &Bus, first: Option<ActorId>, outcome: &Result<(), ActorError>) {
    let mut ev = Event::new(EventKind::GroupInterrupted);
    if let Some(id) = first {
        ev = ev.with_actor(id);
    }
    if let Err(e) = outcome {
        ev = ev.with_reason(e.to_string());
    }
    bus.publish(ev);
}

/// Forwards bus events to the subscriber set for the duration of one run.
///
/// Dropping it (e.g. when the `run` future is dropped on a timeout) stops the
/// forwarding task and, through it, every subscriber worker.
struct Listener {
    guard: DropGuard,
    join: JoinHandle<()>,
}

impl Listener {
    /// Subscribes to the bus and spawns the forwarding task.
    ///
    /// Subscription happens before returning, so no event published afterwards is missed.
    fn spawn(bus: &Bus, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        let mut rx = bus.subscribe();
        let set = SubscriberSet::new(subscribers, bus.clone());
        let token = CancellationToken::new();
        let stopped = token.clone();

        let join = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    msg = rx.recv() => match msg {
                        Ok(ev) => set.emit(&ev),
                        // emitted directly: republishing on a full bus lags again
                        Err(RecvError::Lagged(n)) => set.emit(&Event::listener_lagged(n)),
                        Err(RecvError::Closed) => break,
                    },
                    _ = stopped.cancelled() => {
                        loop {
                            match rx.try_recv() {
                                Ok(ev) => set.emit(&ev),
                                Err(TryRecvError::Lagged(n)) => set.emit(&Event::listener_lagged(n)),
                                Err(_) => break,
                            }
                        }
                        break;
                    }
                }
            }
            set.shutdown().await;
        });

        Self {
            guard: token.drop_guard(),
            join,
        }
    }

    /// Flushes pending events to subscribers and waits for their workers.
    ///
    /// Events published by the workers themselves while draining
    /// (`SubscriberPanicked`, `SubscriberOverflow`) are not forwarded anymore.
    async fn stop(self) {
        let Listener { guard, join } = self;
        drop(guard);
        let _ = join.await;
    }
}
