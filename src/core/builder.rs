use std::sync::Arc;

use crate::{config::Config, core::group::Group, subscribers::Subscribe};

/// Builder for a [`Group`] with custom configuration or event subscribers.
///
/// # Example
/// ```rust
/// use rungate::{Config, Group};
///
/// let group = Group::builder(Config { bus_capacity: 64 })
///     .with_subscribers(Vec::new())
///     .build();
/// assert!(group.is_empty());
/// ```
pub struct GroupBuilder {
    cfg: Config,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl GroupBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets event subscribers for observability.
    ///
    /// Subscribers receive group events (actor lifecycle, teardown, etc.)
    /// through dedicated workers with bounded queues. Workers are started by
    /// [`Group::run`], so building does not require a runtime.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds an empty group.
    pub fn build(self) -> Group {
        Group::with_parts(self.cfg, self.subscribers)
    }
}
