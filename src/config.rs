//! # Group configuration.
//!
//! Provides [`Config`], the optional settings of a [`Group`](crate::Group).
//!
//! A group built with [`Group::new`](crate::Group::new) uses [`Config::default`];
//! pass a custom value through [`Group::builder`](crate::Group::builder).
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1 by [`Config::bus_capacity_clamped`]

/// Settings for a [`Group`](crate::Group) run.
///
/// ## Field semantics
/// - `bus_capacity`: event bus ring buffer size (min 1; clamped by `Bus`)
#[derive(Clone, Debug)]
pub struct Config {
    /// Capacity of the event bus broadcast channel ring buffer.
    ///
    /// The subscriber listener that lags behind more than `bus_capacity` events
    /// skips the oldest ones. Minimum value is 1.
    pub bus_capacity: usize,
}

impl Config {
    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration: `bus_capacity = 1024`.
    fn default() -> Self {
        Self { bus_capacity: 1024 }
    }
}
