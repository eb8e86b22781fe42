//! # Run an actor's execute body once.
//!
//! Invokes the execute body with its [`ReadySignal`], contains panics, and publishes
//! the terminal actor event to the [`Bus`].
//!
//! ## Event flow
//! ```text
//! Success:       publish ActorStarting → execute → Ok(())          → publish ActorStopped
//! Cancellation:  publish ActorStarting → execute → Err(Canceled)   → publish ActorStopped
//! Failure:       publish ActorStarting → execute → Err(Fail/...)   → publish ActorFailed
//! Panic:         publish ActorStarting → execute → panic (caught)  → publish ActorPanicked
//! ```
//!
//! ## Rules
//! - Always publishes **exactly one** terminal event
//! - `Canceled` is treated as graceful exit → `ActorStopped` (not `ActorFailed`), but
//!   the error is still returned so the group sees it
//! - A panic becomes [`ActorError::Panicked`]

use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::{
    actors::{ActorId, Execute},
    error::{ActorError, panic_message},
    events::{Bus, Event, EventKind},
    gate::ReadySignal,
};

/// Executes `execute` once, publishing lifecycle events to `bus`.
pub(crate) async fn run_once(
    id: ActorId,
    execute: Execute,
    ready: ReadySignal,
    bus: &Bus,
) -> Result<(), ActorError> {
    bus.publish(Event::new(EventKind::ActorStarting).with_actor(id));

    // The closure call itself happens inside the guarded future.
    let guarded = AssertUnwindSafe(async move { execute(ready).await }).catch_unwind();
    let res = match guarded.await {
        Ok(res) => res,
        Err(payload) => {
            let info = panic_message(payload.as_ref());
            bus.publish(
                Event::new(EventKind::ActorPanicked)
                    .with_actor(id)
                    .with_reason(info.as_str()),
            );
            return Err(ActorError::Panicked { actor: id, info });
        }
    };

    match &res {
        Ok(()) => publish_stopped(bus, id, None),
        Err(ActorError::Canceled) => publish_stopped(bus, id, Some("canceled")),
        Err(e) => publish_failed(bus, id, e),
    }
    res
}

/// Publishes `ActorStopped` (success or graceful cancellation).
fn publish_stopped(bus: &Bus, id: ActorId, reason: Option<&str>) {
    let ev = Event::new(EventKind::ActorStopped).with_actor(id);
    bus.publish(match reason {
        Some(r) => ev.with_reason(r),
        None => ev,
    });
}

/// Publishes `ActorFailed` with error details.
fn publish_failed(bus: &Bus, id: ActorId, err: &ActorError) {
    bus.publish(
        Event::new(EventKind::ActorFailed)
            .with_actor(id)
            .with_reason(err.to_string()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actors::BoxActorFuture;
    use crate::gate::{Dependency, GateState};
    use tokio::sync::broadcast;

    fn execute<F, Fut>(f: F) -> Execute
    where
        F: FnOnce(ReadySignal) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<(), ActorError>> + Send + 'static,
    {
        Box::new(move |ready| Box::pin(f(ready)) as BoxActorFuture)
    }

    fn kinds(rx: &mut broadcast::Receiver<Event>) -> Vec<EventKind> {
        let mut out = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            out.push(ev.kind);
        }
        out
    }

    fn setup() -> (ActorId, Dependency, Bus, broadcast::Receiver<Event>) {
        let id = ActorId::new(0);
        let bus = Bus::new(16);
        let rx = bus.subscribe();
        (id, Dependency::new(id), bus, rx)
    }

    #[tokio::test]
    async fn success_publishes_stopped() {
        let (id, gate, bus, mut rx) = setup();
        let exec = execute(|ready| async move {
            ready.ready();
            Ok(())
        });

        let res = run_once(id, exec, ReadySignal::new(gate.clone(), bus.clone()), &bus).await;
        assert!(res.is_ok());
        assert_eq!(gate.state(), GateState::Ready);
        assert_eq!(
            kinds(&mut rx),
            vec![EventKind::ActorStarting, EventKind::ActorReady, EventKind::ActorStopped]
        );
    }

    #[tokio::test]
    async fn canceled_is_graceful_but_returned() {
        let (id, gate, bus, mut rx) = setup();
        let exec = execute(|_ready| async { Err(ActorError::Canceled) });

        let res = run_once(id, exec, ReadySignal::new(gate, bus.clone()), &bus).await;
        assert_eq!(res, Err(ActorError::Canceled));
        assert_eq!(
            kinds(&mut rx),
            vec![EventKind::ActorStarting, EventKind::ActorStopped]
        );
    }

    #[tokio::test]
    async fn failure_publishes_failed() {
        let (id, gate, bus, mut rx) = setup();
        let exec = execute(|_ready| async { Err(ActorError::fail("boom")) });

        let res = run_once(id, exec, ReadySignal::new(gate.clone(), bus.clone()), &bus).await;
        assert_eq!(res, Err(ActorError::fail("boom")));
        assert_eq!(gate.state(), GateState::Pending);
        assert_eq!(
            kinds(&mut rx),
            vec![EventKind::ActorStarting, EventKind::ActorFailed]
        );
    }

    #[tokio::test]
    async fn panic_is_contained() {
        let (id, gate, bus, mut rx) = setup();
        let exec = execute(|_ready| async { panic!("kaboom") });

        let res = run_once(id, exec, ReadySignal::new(gate, bus.clone()), &bus).await;
        assert_eq!(
            res,
            Err(ActorError::Panicked {
                actor: id,
                info: "kaboom".into()
            })
        );
        assert_eq!(
            kinds(&mut rx),
            vec![EventKind::ActorStarting, EventKind::ActorPanicked]
        );
    }

    #[tokio::test]
    async fn panic_before_future_is_contained() {
        let (id, gate, bus, _rx) = setup();
        let exec = execute(move |_ready| {
            if id.index() == 0 {
                panic!("eager");
            }
            async { Ok(()) }
        });

        let res = run_once(id, exec, ReadySignal::new(gate, bus.clone()), &bus).await;
        assert!(matches!(res, Err(ActorError::Panicked { ref info, .. }) if info == "eager"));
    }
}
