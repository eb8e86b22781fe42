//! # Actor identity and registration records.
//!
//! This module provides the bookkeeping side of an actor:
//! - [`ActorId`] - stable identity assigned at registration (index in the group)
//! - [`ActorRecord`] - execute body + interrupt callback + output gate + input gates
//! - [`BoxActorFuture`] - boxed future returned by an execute body
//!
//! Records are created by [`Group`](crate::Group) registration calls and consumed
//! exactly once by [`Group::run`](crate::Group::run).

mod id;
mod record;

pub use id::ActorId;
pub(crate) use record::{ActorRecord, BoxActorFuture, Execute, Interrupt};
