//! Error type used by actor groups.
//!
//! [`ActorError`] is the single error currency of the crate: actors return it from their
//! execute body, interrupt callbacks receive it, and [`Group::run`](crate::Group::run)
//! returns the first one produced.
//!
//! Like the rest of the crate it provides `as_label` / `as_message` helpers for logs.

use std::any::Any;
use std::fmt::Display;

use thiserror::Error;

use crate::actors::ActorId;

/// # Errors produced by actors in a group.
///
/// Only the error of the **first** actor to complete is returned by
/// [`Group::run`](crate::Group::run); every actor's interrupt callback receives
/// that same value.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActorError {
    /// Actor execution failed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Actor stopped because it observed an interrupt.
    #[error("context cancelled")]
    Canceled,

    /// OS termination signal received by the signal actor.
    #[error("received signal {signal}")]
    Signal {
        /// Signal name (`SIGINT`, `SIGTERM`, `SIGQUIT` or `ctrl_c`).
        signal: &'static str,
    },

    /// Actor body panicked; the panic was contained by the group.
    #[error("{actor} panicked: {info}")]
    Panicked {
        /// Actor whose body panicked.
        actor: ActorId,
        /// Panic payload rendered as text.
        info: String,
    },
}

impl ActorError {
    /// Builds a [`ActorError::Fail`] from anything printable.
    ///
    /// # Example
    /// ```
    /// use rungate::ActorError;
    ///
    /// let err = ActorError::fail("boom");
    /// assert_eq!(err.to_string(), "execution failed: boom");
    /// ```
    pub fn fail(error: impl Display) -> Self {
        ActorError::Fail {
            error: error.to_string(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use rungate::ActorError;
    ///
    /// assert_eq!(ActorError::Canceled.as_label(), "actor_canceled");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ActorError::Fail { .. } => "actor_failed",
            ActorError::Canceled => "actor_canceled",
            ActorError::Signal { .. } => "actor_signal",
            ActorError::Panicked { .. } => "actor_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ActorError::Fail { error } => format!("error: {error}"),
            ActorError::Canceled => "context cancelled".to_string(),
            ActorError::Signal { signal } => format!("signal: {signal}"),
            ActorError::Panicked { actor, info } => format!("panic in {actor}: {info}"),
        }
    }

    /// Returns `true` if the error came from an interrupt rather than a real failure.
    pub fn is_canceled(&self) -> bool {
        matches!(self, ActorError::Canceled)
    }
}

/// Renders a panic payload caught by `catch_unwind` as text.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(ActorError::fail("x").as_label(), "actor_failed");
        assert_eq!(ActorError::Signal { signal: "SIGTERM" }.as_label(), "actor_signal");
        let panicked = ActorError::Panicked {
            actor: ActorId::new(3),
            info: "oops".into(),
        };
        assert_eq!(panicked.as_label(), "actor_panicked");
        assert_eq!(panicked.to_string(), "actor-3 panicked: oops");
        assert_eq!(panicked.as_message(), "panic in actor-3: oops");
    }

    #[test]
    fn fail_keeps_message() {
        assert_eq!(
            ActorError::fail(format!("code {}", 7)),
            ActorError::Fail {
                error: "code 7".into()
            }
        );
        assert!(!ActorError::fail("x").is_canceled());
        assert!(ActorError::Canceled.is_canceled());
    }

    #[test]
    fn panic_payloads_render() {
        let s: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(s.as_ref()), "static");
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned.as_ref()), "owned");
        let other: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }
}
