//! Group events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to events emitted while a [`Group`](crate::Group) runs.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Group::run`, gated actor tasks, `runner::run_once`,
//!   [`ReadySignal`](crate::ReadySignal), `SubscriberSet` workers (overflow/panic).
//! - **Consumer**: the group's subscriber listener (fans out to `SubscriberSet`).
//!
//! See `core/mod.rs` for the system-level wiring diagram.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
