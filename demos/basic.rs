//! # Example: basic
//!
//! Two plain actors. The second one returns immediately, which tears down the first.
//!
//! Demonstrates how to:
//! - Register actors with [`Group::add`] as an *execute* body plus an *interrupt* callback.
//! - Stop a long-running actor from its interrupt (here, through a [`Notify`]).
//! - Observe that every interrupt is called, even for an actor that already returned.
//!
//! ## Flow
//! ```text
//! Group::run()
//!     ├─► actor-0: sleep 1s or wait for cancel
//!     ├─► actor-1: return Err("immediate teardown")
//!     ├─► interrupt(actor-0, "immediate teardown") ──► notify
//!     ├─► interrupt(actor-1, "immediate teardown")
//!     ├─► actor-0 observes cancel and returns
//!     └─► run() returns Err("immediate teardown")
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic
//! ```

use std::sync::Arc;
use std::time::Duration;

use rungate::{ActorError, Group};
use tokio::sync::Notify;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut group = Group::new();

    // 1. A slow actor, canceled through its interrupt
    let cancel = Arc::new(Notify::new());
    let waiter = cancel.clone();
    group.add(
        move || async move {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(1)) => {
                    println!("[first] time elapsed");
                }
                _ = waiter.notified() => {
                    println!("[first] canceled");
                }
            }
            Ok(())
        },
        move |err| {
            println!("[first] interrupted with: {}", describe(err));
            // notify_one stores a permit if execute is not waiting yet
            cancel.notify_one();
        },
        [],
    );

    // 2. An actor that returns right away
    group.add(
        || async {
            println!("[second] returning immediately");
            Err(ActorError::fail("immediate teardown"))
        },
        |err| println!("[second] interrupted with: {}", describe(err)),
        [],
    );

    // 3. Run until the first actor returns, then until all have exited
    match group.run().await {
        Ok(()) => println!("group terminated cleanly"),
        Err(e) => println!("group terminated with: {e}"),
    }
}

fn describe(err: Option<&ActorError>) -> String {
    err.map_or_else(|| "none".to_string(), ToString::to_string)
}
