//! # Example: dependency_chain
//!
//! A readiness chain `db ──► cache ──► api` with lifecycle events printed by [`LogWriter`].
//!
//! Demonstrates how to:
//! - Chain actors with [`Group::add_dep_task`], each starting after its predecessor is ready.
//! - Attach subscribers through [`Group::builder`].
//! - Propagate the first failure to every interrupt.
//!
//! ## Flow
//! ```text
//! db ── ready ──► cache ── ready ──► api ──► Err("api crashed")
//!                                            │
//!          GroupInterrupted ◄────────────────┘
//!          ├─► interrupt(db)    ──► token cancel
//!          ├─► interrupt(cache) ──► token cancel
//!          └─► interrupt(api)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example dependency_chain --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use rungate::{ActorError, Config, Dependency, Group, LogWriter, Subscribe};

#[tokio::main]
async fn main() {
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let mut group = Group::builder(Config::default())
        .with_subscribers(subs)
        .build();

    // 1. Long-running services, each ready after a short warm-up
    let mut prev: Option<Dependency> = None;
    for name in ["db", "cache"] {
        prev = Some(group.add_dep_task(
            move |ready, token| async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                println!("[{name}] warmed up");
                ready.ready();
                token.cancelled().await;
                println!("[{name}] shutting down");
                Err(ActorError::Canceled)
            },
            prev,
        ));
    }

    // 2. The last link fails, ending the group
    group.add(
        || async {
            println!("[api] serving");
            tokio::time::sleep(Duration::from_millis(200)).await;
            Err(ActorError::fail("api crashed"))
        },
        |err| {
            if let Some(e) = err {
                println!("[api] interrupted with: {e}");
            }
        },
        prev,
    );

    let res = group.run().await;
    println!("group terminated with: {res:?}");
}
