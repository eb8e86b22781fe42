//! # rungate
//!
//! **rungate** runs a group of async actors with two guarantees:
//! - an actor may wait for other actors to announce **readiness** before it starts;
//! - the first actor to finish **tears down** all the others, and its result is the
//!   result of the whole group.
//!
//! It is similar to a join set with first-exit cancellation, except actors do not need to
//! understand any particular cancellation type: each actor is a pair of an *execute* body
//! and an *interrupt* callback. That makes it suitable for servers holding listeners,
//! readers on closable streams, or anything with its own way of being stopped.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐        ┌──────────────┐        ┌──────────────┐
//!     │   actor 0    │ ready  │   actor 1    │        │   actor 2    │
//!     │  (add_dep)   ├───────►│ depends on 0 │        │    (add)     │
//!     └──────┬───────┘  gate  └──────┬───────┘        └──────┬───────┘
//!            ▼                       ▼                       ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Group::run                                                       │
//! │  - spawns one task per actor (JoinSet)                            │
//! │  - each task: wait input gates → execute (or skip if interrupted) │
//! │  - first completion → interrupt every gate and every actor        │
//! │  - drain all tasks → return first outcome                         │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼ publish(Event)
//!                     ┌────────────────────┐
//!                     │ Bus → SubscriberSet│ (optional, via GroupBuilder)
//!                     └────────────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! group:  running ──► draining (after first completion) ──► done (all completed)
//! actor:  waiting-on-deps ──► { skipped | executing } ──► completed
//! gate:   Pending ──► { Ready | Interrupted }   (first resolution wins)
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types                              |
//! |-------------------|--------------------------------------------------------------|----------------------------------------|
//! | **Groups**        | Register actors, run them, tear them down together.          | [`Group`], [`GroupBuilder`]            |
//! | **Gates**         | One-shot readiness latches between actors.                   | [`Dependency`], [`ReadySignal`]        |
//! | **Errors**        | Typed outcome propagated to every interrupt.                 | [`ActorError`]                         |
//! | **Events**        | Lifecycle events for logging/metrics subscribers.            | [`Event`], [`Subscribe`]               |
//! | **Configuration** | Optional settings.                                           | [`Config`]                             |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use rungate::{ActorError, Group};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut group = Group::new();
//!
//!     // Announces readiness, then serves until interrupted.
//!     let server = group.add_dep_task(
//!         |ready, token| async move {
//!             ready.ready();
//!             token.cancelled().await;
//!             Err(ActorError::Canceled)
//!         },
//!         [],
//!     );
//!
//!     // Starts only after the server is ready; its exit ends the group.
//!     group.add(
//!         || async {
//!             tokio::time::sleep(Duration::from_millis(10)).await;
//!             Err(ActorError::fail("client finished"))
//!         },
//!         |_err| {},
//!         [server],
//!     );
//!
//!     let res = group.run().await;
//!     assert_eq!(res, Err(ActorError::fail("client finished")));
//! }
//! ```
mod actors;
mod config;
mod core;
mod error;
mod events;
mod gate;
mod subscribers;

// ---- Public re-exports ----

pub use actors::ActorId;
pub use config::Config;
pub use crate::core::{Group, GroupBuilder};
pub use error::ActorError;
pub use events::{Bus, Event, EventKind};
pub use gate::{Dependency, GateState, ReadySignal};
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
