use std::fmt;

/// Identity of an actor within one [`Group`](crate::Group).
///
/// Ids are assigned in registration order starting from 0 and are displayed as
/// `actor-<index>` in events and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(usize);

impl ActorId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Registration index of the actor.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor-{}", self.0)
    }
}
