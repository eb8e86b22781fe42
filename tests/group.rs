use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rungate::{ActorError, Config, Dependency, Event, EventKind, GateState, Group, Subscribe};
use tokio_util::sync::CancellationToken;

const DEADLOCK_GUARD: Duration = Duration::from_secs(2);

type Interrupts = Arc<Mutex<Vec<(&'static str, Option<ActorError>)>>>;

/// Interrupt callback that records which actor got which terminal error.
fn record(log: &Interrupts, name: &'static str) -> impl FnOnce(Option<&ActorError>) + Send + 'static {
    let log = log.clone();
    move |err| log.lock().unwrap().push((name, err.cloned()))
}

async fn run_guarded(group: Group) -> Result<(), ActorError> {
    tokio::time::timeout(DEADLOCK_GUARD, group.run())
        .await
        .expect("group.run deadlocked")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn single_dependency_gates_start() {
    for run in 0..100 {
        let mut group = Group::new();
        let dep_ready = Arc::new(AtomicBool::new(false));
        let started = CancellationToken::new();

        let dep = {
            let dep_ready = dep_ready.clone();
            let started = started.clone();
            group.add_dep(
                move |ready| async move {
                    dep_ready.store(true, Ordering::SeqCst);
                    ready.ready();
                    started.cancelled().await;
                    Ok(())
                },
                |_err| {},
                [],
            )
        };

        group.add(
            move || async move {
                if !dep_ready.load(Ordering::SeqCst) {
                    return Err(ActorError::fail(format!("run {run}: dependency has not started")));
                }
                started.cancel();
                Ok(())
            },
            |_err| {},
            [dep],
        );

        assert_eq!(run_guarded(group).await, Ok(()), "run {run}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn multiple_dependencies_gate_start() {
    for run in 0..100 {
        let mut group = Group::new();
        let a_ready = Arc::new(AtomicBool::new(false));
        let b_ready = Arc::new(AtomicBool::new(false));
        let started = CancellationToken::new();

        // Alternate which dependency signals last.
        let (a_delay, b_delay) = if run % 2 == 0 {
            (Duration::from_millis(2), Duration::ZERO)
        } else {
            (Duration::ZERO, Duration::from_millis(2))
        };

        let mut deps = Vec::new();
        for (flag, delay) in [(a_ready.clone(), a_delay), (b_ready.clone(), b_delay)] {
            let started = started.clone();
            deps.push(group.add_dep(
                move |ready| async move {
                    tokio::time::sleep(delay).await;
                    flag.store(true, Ordering::SeqCst);
                    ready.ready();
                    started.cancelled().await;
                    Ok(())
                },
                |_err| {},
                [],
            ));
        }

        group.add(
            move || async move {
                if !a_ready.load(Ordering::SeqCst) {
                    return Err(ActorError::fail(format!("run {run}: dependency A has not started")));
                }
                if !b_ready.load(Ordering::SeqCst) {
                    return Err(ActorError::fail(format!("run {run}: dependency B has not started")));
                }
                started.cancel();
                Ok(())
            },
            |_err| {},
            deps,
        );

        assert_eq!(run_guarded(group).await, Ok(()), "run {run}");
    }
}

#[tokio::test]
async fn failed_dependency_skips_dependent() {
    let mut group = Group::new();
    let log: Interrupts = Arc::default();
    let ran = Arc::new(AtomicBool::new(false));

    let dep = group.add_dep(
        |_ready| async { Err(ActorError::fail("dep-fail")) },
        record(&log, "R"),
        [],
    );
    let flag = ran.clone();
    group.add(
        move || async move {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        },
        record(&log, "S"),
        [dep.clone()],
    );

    assert_eq!(run_guarded(group).await, Err(ActorError::fail("dep-fail")));
    assert!(!ran.load(Ordering::SeqCst), "dependent actor started despite dependency failure");
    assert_eq!(dep.state(), GateState::Interrupted);

    let mut got = log.lock().unwrap().clone();
    got.sort_by_key(|(name, _)| *name);
    assert_eq!(
        got,
        vec![
            ("R", Some(ActorError::fail("dep-fail"))),
            ("S", Some(ActorError::fail("dep-fail"))),
        ]
    );
}

#[tokio::test]
async fn first_error_reaches_every_interrupt() {
    let mut group = Group::new();
    let log: Interrupts = Arc::default();

    group.add(|| async { Err(ActorError::fail("boom")) }, record(&log, "D"), []);
    group.add(
        || async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok(())
        },
        record(&log, "E"),
        [],
    );

    let began = Instant::now();
    assert_eq!(run_guarded(group).await, Err(ActorError::fail("boom")));
    // E ignores its interrupt, so run waits for it.
    assert!(began.elapsed() >= Duration::from_millis(450));

    let mut got = log.lock().unwrap().clone();
    got.sort_by_key(|(name, _)| *name);
    assert_eq!(
        got,
        vec![
            ("D", Some(ActorError::fail("boom"))),
            ("E", Some(ActorError::fail("boom"))),
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dependent_success_interrupts_blocked_dependency() {
    let mut group = Group::new();
    let log: Interrupts = Arc::default();
    let unblock = CancellationToken::new();
    let p_exited = Arc::new(AtomicBool::new(false));

    let p = {
        let unblock = unblock.clone();
        let unblock_exec = unblock.clone();
        let exited = p_exited.clone();
        let log = log.clone();
        group.add_dep(
            move |ready| async move {
                ready.ready();
                unblock_exec.cancelled().await;
                exited.store(true, Ordering::SeqCst);
                Ok(())
            },
            move |err| {
                log.lock().unwrap().push(("P", err.cloned()));
                unblock.cancel();
            },
            [],
        )
    };
    group.add(|| async { Ok(()) }, record(&log, "Q"), [p.clone()]);

    assert_eq!(run_guarded(group).await, Ok(()));
    assert!(p_exited.load(Ordering::SeqCst));
    assert_eq!(p.state(), GateState::Ready);

    let got = log.lock().unwrap().clone();
    assert!(got.contains(&("P", None)));
    assert!(got.contains(&("Q", None)));
}

#[tokio::test]
async fn empty_group_is_trivially_successful() {
    let group = Group::new();
    assert_eq!(run_guarded(group).await, Ok(()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn repeated_runs_are_deterministic() {
    for run in 0..100 {
        let mut group = Group::new();
        group.add(|| async { Err(ActorError::fail("boom")) }, |_err| {}, []);
        group.add_task(
            |token| async move {
                token.cancelled().await;
                Err(ActorError::Canceled)
            },
            [],
        );
        assert_eq!(
            run_guarded(group).await,
            Err(ActorError::fail("boom")),
            "run {run}"
        );
    }
}

#[tokio::test]
async fn ready_is_idempotent_and_survives_teardown() {
    let mut group = Group::new();
    let gate = group.add_dep(
        |ready| async move {
            ready.ready();
            ready.clone().ready();
            Ok(())
        },
        |_err| {},
        [],
    );

    assert_eq!(run_guarded(group).await, Ok(()));
    assert_eq!(gate.state(), GateState::Ready);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readiness_chain_runs_in_order() {
    let mut group = Group::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let mut prev: Option<Dependency> = None;
    for step in 0..4_usize {
        let order = order.clone();
        prev = Some(group.add_dep_task(
            move |ready, token| async move {
                order.lock().unwrap().push(step);
                ready.ready();
                token.cancelled().await;
                Err(ActorError::Canceled)
            },
            prev,
        ));
    }
    group.add(
        || async { Err(ActorError::fail("chain complete")) },
        |_err| {},
        prev,
    );

    assert_eq!(run_guarded(group).await, Err(ActorError::fail("chain complete")));
    assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
}

#[derive(Default)]
struct Kinds(Mutex<Vec<EventKind>>);

#[async_trait]
impl Subscribe for Kinds {
    async fn on_event(&self, ev: &Event) {
        self.0.lock().unwrap().push(ev.kind);
    }

    fn name(&self) -> &'static str {
        "kinds"
    }
}

#[tokio::test]
async fn skipped_actor_is_reported() {
    let kinds = Arc::new(Kinds::default());
    let mut group = Group::builder(Config::default())
        .with_subscribers(vec![kinds.clone()])
        .build();

    let dep = group.add_dep(|_ready| async { Err(ActorError::fail("dep-fail")) }, |_err| {}, []);
    group.add(|| async { Ok(()) }, |_err| {}, [dep]);

    assert_eq!(run_guarded(group).await, Err(ActorError::fail("dep-fail")));

    let seen = kinds.0.lock().unwrap().clone();
    assert_eq!(seen.first(), Some(&EventKind::GroupStarted));
    assert_eq!(seen.last(), Some(&EventKind::GroupDrained));
    assert!(seen.contains(&EventKind::ActorFailed));
    assert!(seen.contains(&EventKind::ActorSkipped));
    assert!(!seen.contains(&EventKind::ActorReady));
    assert_eq!(
        seen.iter().filter(|k| **k == EventKind::ActorStarting).count(),
        1
    );
}
