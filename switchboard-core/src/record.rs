//! Handler records and route slots.

use crate::handler::SharedHandler;
use std::fmt;

/// A `(key, handler)` pair as registered on a target.
pub struct HandlerRecord<K, T, Args, Out> {
    /// The discriminator value this handler answers to.
    pub key: K,
    /// The handler itself.
    pub handler: SharedHandler<T, Args, Out>,
}

impl<K, T, Args, Out> HandlerRecord<K, T, Args, Out> {
    /// Pair `key` with `handler`.
    pub fn new(key: K, handler: SharedHandler<T, Args, Out>) -> Self {
        Self { key, handler }
    }
}

impl<K: Clone, T, Args, Out> Clone for HandlerRecord<K, T, Args, Out> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<K: fmt::Debug, T, Args, Out> fmt::Debug for HandlerRecord<K, T, Args, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRecord")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Where an entry of a plain handler table goes.
///
/// [`Slot::Default`] is the well-known marker for the default handler; every
/// other entry is keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<K> {
    /// A keyed handler.
    Key(K),
    /// The default handler.
    Default,
}

impl<K> From<K> for Slot<K> {
    fn from(key: K) -> Self {
        Slot::Key(key)
    }
}
