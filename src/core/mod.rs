//! Scheduler core: registration, concurrent start and synchronized teardown.
//!
//! The only public API from this module is [`Group`] (and its [`GroupBuilder`]).
//!
//! ## Wiring
//! ```text
//!  Group::add_dep / add / add_task ──► ActorRecord (actors module)
//!
//!  Group::run
//!    ├─► Listener: Bus ──► SubscriberSet   (only with subscribers)
//!    ├─► actor::split(record) ──► GatedActor (spawned) + Teardown (kept)
//!    │      GatedActor::run
//!    │        ├─► gate::wait_all(depends_on)
//!    │        ├─► skipped ──► Ok(())
//!    │        └─► runner::run_once(execute, ReadySignal)
//!    ├─► first completion ──► Teardown::interrupt(err) for all
//!    └─► drain JoinSet ──► return first outcome
//! ```
//!
//! Internal modules:
//! - [`group`]: registration and the run loop;
//! - [`actor`]: per-actor dependency wait and skip/execute decision;
//! - [`runner`]: executes one body with panic containment and event publishing;
//! - [`shutdown`]: cross-platform shutdown signal handling;
//! - [`builder`]: optional configuration.

mod actor;
mod builder;
mod group;
mod runner;
mod shutdown;

pub use builder::GroupBuilder;
pub use group::Group;
