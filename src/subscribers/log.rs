//! # LogWriter: simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for test or demo.
//!
//! ## Example output
//! ```text
//! [group-started] actors=3
//! [waiting] actor=actor-1 deps=1
//! [starting] actor=actor-0
//! [ready] actor=actor-0
//! [failed] actor=actor-1 err="execution failed: a failure"
//! [group-interrupted] by=actor-1 err="execution failed: a failure"
//! [group-drained]
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn actor(e: &Event) -> String {
    e.actor
        .map(|a| a.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::GroupStarted => {
                println!("[group-started] actors={}", e.actors.unwrap_or(0));
            }
            EventKind::GroupInterrupted => match e.reason.as_deref() {
                Some(err) => println!("[group-interrupted] by={} err={err:?}", actor(e)),
                None => println!("[group-interrupted] by={}", actor(e)),
            },
            EventKind::GroupDrained => {
                println!("[group-drained]");
            }
            EventKind::ActorWaiting => {
                println!("[waiting] actor={} deps={}", actor(e), e.deps.unwrap_or(0));
            }
            EventKind::ActorSkipped => {
                println!("[skipped] actor={}", actor(e));
            }
            EventKind::ActorStarting => {
                println!("[starting] actor={}", actor(e));
            }
            EventKind::ActorReady => {
                println!("[ready] actor={}", actor(e));
            }
            EventKind::ActorStopped => {
                println!("[stopped] actor={}", actor(e));
            }
            EventKind::ActorFailed => {
                println!("[failed] actor={} err={:?}", actor(e), e.reason);
            }
            EventKind::ActorPanicked => {
                println!("[panicked] actor={} info={:?}", actor(e), e.reason);
            }
            EventKind::SubscriberOverflow => {
                println!("[subscriber-overflow] {}", e.reason.as_deref().unwrap_or("unknown"));
            }
            EventKind::SubscriberPanicked => {
                println!("[subscriber-panicked] {}", e.reason.as_deref().unwrap_or("unknown"));
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
