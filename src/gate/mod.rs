//! # Readiness gates.
//!
//! A gate is a one-shot, broadcast latch with two terminal outcomes:
//!
//! ```text
//!              resolve_ready()
//!   Pending ───────────────────► Ready        (wait() == true)
//!      │
//!      └─────────────────────────► Interrupted  (wait() == false)
//!              resolve_interrupted()
//! ```
//!
//! - [`Dependency`] - shared handle to one actor's output gate
//! - [`ReadySignal`] - capability handed to an execute body to resolve its own gate as ready
//! - [`GateState`] - observable gate state
//!
//! ## Rules
//! - The first resolution wins (compare-and-set); later attempts of either kind are no-ops.
//! - All current and future waiters observe the same outcome.

mod dependency;
mod ready;

pub use dependency::{Dependency, GateState};
pub use ready::ReadySignal;

/// Waits on every gate in `deps`, in order, without short-circuiting.
///
/// Returns `true` only if all of them resolved as ready.
pub(crate) async fn wait_all(deps: &[Dependency]) -> bool {
    let mut ready = true;
    for dep in deps {
        // Evaluate `wait` first so an earlier interrupted gate does not skip later waits.
        let this = dep.wait().await;
        ready &= this;
    }
    ready
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::ActorId;

    #[tokio::test]
    async fn wait_all_empty_is_ready() {
        assert!(wait_all(&[]).await);
    }

    #[tokio::test]
    async fn wait_all_observes_every_gate() {
        let a = Dependency::new(ActorId::new(0));
        let b = Dependency::new(ActorId::new(1));
        a.resolve_interrupted();

        let deps = vec![a.clone(), b.clone()];
        let waiter = tokio::spawn(async move { wait_all(&deps).await });

        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        b.resolve_ready();
        assert!(!waiter.await.unwrap());
    }

    #[tokio::test]
    async fn wait_all_ready_when_all_ready() {
        let a = Dependency::new(ActorId::new(0));
        let b = Dependency::new(ActorId::new(1));
        b.resolve_ready();
        a.resolve_ready();
        assert!(wait_all(&[a, b]).await);
    }
}
