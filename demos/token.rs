//! # Example: token
//!
//! Actors driven by a [`CancellationToken`], the tokio counterpart of a cancelable context.
//!
//! Demonstrates how to:
//! - Register an actor with [`Group::add_task`], whose interrupt cancels the token it receives.
//! - End the group from outside by canceling a parent token.
//! - Report a graceful stop as [`ActorError::Canceled`].
//!
//! ## Flow
//! ```text
//! parent token ──► child token ──► actor-0 waits on cancelled()
//!
//! spawn(cancel parent after 200ms)
//!     └─► actor-0 returns Err(Canceled)
//!          ├─► interrupt(actor-0) ──► child token cancel (no-op)
//!          └─► run() returns Err(Canceled)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example token
//! ```

use std::time::Duration;

use rungate::{ActorError, Group};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let parent = CancellationToken::new();
    let mut group = Group::new();

    {
        let parent = parent.child_token();
        group.add_task(
            move |token| async move {
                println!("[worker] running until canceled");
                tokio::select! {
                    _ = parent.cancelled() => println!("[worker] parent canceled"),
                    _ = token.cancelled() => println!("[worker] interrupted by the group"),
                }
                Err(ActorError::Canceled)
            },
            [],
        );
    }

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        parent.cancel();
    });

    let res = group.run().await;
    println!("group terminated with: {res:?}");
    assert!(res.is_err_and(|e| e.is_canceled()));
}
