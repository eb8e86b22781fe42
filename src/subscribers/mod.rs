//! # Event subscribers.
//!
//! This module provides the [`Subscribe`] trait and the [`SubscriberSet`] fan-out used to
//! deliver group events to user code (logging, metrics, tests).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   actor task ── publish(Event) ──► Bus ──► listener (Group::run) ──► SubscriberSet::emit
//!                                                                  ┌─────────┼─────────┐
//!                                                                  ▼         ▼         ▼
//!                                                              [queue 1] [queue 2] [queue N]
//!                                                                  ▼         ▼         ▼
//!                                                              on_event  on_event  on_event
//! ```
//!
//! Subscribers are configured with [`GroupBuilder::with_subscribers`](crate::GroupBuilder::with_subscribers).
//! All events of a run are delivered before [`Group::run`](crate::Group::run) returns.

#[cfg(feature = "logging")]
mod log;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
