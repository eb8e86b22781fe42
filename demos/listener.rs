//! # Example: listener
//!
//! A TCP accept loop torn down by a sibling actor.
//!
//! Demonstrates how to:
//! - Announce readiness once the socket is bound, so dependents never race the bind.
//! - Stop an accept loop from the interrupt callback.
//! - Let a dependent client actor end the whole group.
//!
//! ## Flow
//! ```text
//! server: bind 127.0.0.1:0 ──► ready() ──► accept loop
//!                               │
//! client: waits on server gate ◄┘ ──► connect ──► Err("immediate teardown")
//!
//! teardown: interrupt(server) ──► token cancel ──► accept loop returns
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example listener
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use rungate::{ActorError, Group};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let mut group = Group::new();
    let addr: Arc<Mutex<Option<SocketAddr>>> = Arc::default();

    // 1. Server: bind, publish the address, then accept until interrupted
    let server = {
        let addr = addr.clone();
        let stop = CancellationToken::new();
        let stopped = stop.clone();
        group.add_dep(
            move |ready| async move {
                let ln = TcpListener::bind("127.0.0.1:0")
                    .await
                    .map_err(ActorError::fail)?;
                let local = ln.local_addr().map_err(ActorError::fail)?;
                *addr.lock().unwrap() = Some(local);
                println!("[server] listening on {local}");
                ready.ready();

                loop {
                    tokio::select! {
                        accepted = ln.accept() => match accepted {
                            Ok((_conn, peer)) => println!("[server] accepted {peer}"),
                            Err(e) => return Err(ActorError::fail(e)),
                        },
                        _ = stopped.cancelled() => break,
                    }
                }
                println!("[server] accept loop returned");
                Ok(())
            },
            move |_err| stop.cancel(),
            [],
        )
    };

    // 2. Client: starts only after the server is ready
    group.add(
        move || async move {
            let target = *addr.lock().unwrap();
            let Some(target) = target else {
                return Err(ActorError::fail("server address missing"));
            };
            TcpStream::connect(target).await.map_err(ActorError::fail)?;
            println!("[client] connected to {target}");
            Err(ActorError::fail("immediate teardown"))
        },
        |_err| {},
        [server],
    );

    match group.run().await {
        Ok(()) => println!("group terminated cleanly"),
        Err(e) => println!("group terminated with: {e}"),
    }
}
