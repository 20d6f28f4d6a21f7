//! Plain handler tables.
//!
//! Some callers already have their handlers as a flat list of entries, one of
//! them possibly marked as the default. [`Registry::from_entries`] converts such
//! a list into a registry so the builder only ever reads registries.
//!
//! ```rust,ignore
//! let routes = Registry::from_entries(Todos, [
//!     entry("ADD_TODO", |_: &Todos, (state, action): Args| add(state, action)),
//!     entry(Slot::Default, |_: &Todos, (state, _): Args| state),
//! ]);
//! ```

use crate::registry::Registry;
use std::sync::Arc;
use switchboard_core::{SharedHandler, Slot};

/// A single plain table entry.
pub type PlainEntry<K, T, Args, Out> = (Slot<K>, SharedHandler<T, Args, Out>);

/// Build a [`PlainEntry`] from a slot (or bare key) and a closure.
pub fn entry<K, T, Args, Out, F>(slot: impl Into<Slot<K>>, handler: F) -> PlainEntry<K, T, Args, Out>
where
    F: Fn(&T, Args) -> Out + Send + Sync + 'static,
{
    let handler: SharedHandler<T, Args, Out> = Arc::new(handler);
    (slot.into(), handler)
}

impl<K, T, Args, Out> Registry<K, T, Args, Out> {
    /// Create a registry for `target` from plain entries.
    ///
    /// Entries are applied in order: keyed entries are appended, a
    /// [`Slot::Default`] entry is set as the default handler (later ones
    /// replace earlier ones). A list with no keyed entry yields a registry
    /// without routes.
    pub fn from_entries<I>(target: T, entries: I) -> Self
    where
        I: IntoIterator<Item = PlainEntry<K, T, Args, Out>>,
    {
        let mut routes = Self::new(target);
        for (slot, handler) in entries {
            match slot {
                Slot::Key(key) => routes.register_handler(key, handler),
                Slot::Default => routes.register_default_handler(handler),
            };
        }
        routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Args = (String,);

    #[test]
    fn default_marker_fills_the_default_slot() {
        let routes: Registry<&str, (), Args, String> = Registry::from_entries(
            (),
            [
                entry("a", |_: &(), (s,): Args| s + "a"),
                entry(Slot::Default, |_: &(), (s,): Args| s + "!"),
            ],
        );

        assert_eq!(routes.len(), 1);
        assert!(routes.has_default());
    }

    #[test]
    fn default_only_table_has_no_routes() {
        let routes: Registry<&str, (), Args, String> =
            Registry::from_entries((), [entry(Slot::Default, |_: &(), (s,): Args| s)]);

        assert!(!routes.has_routes());
        assert!(routes.has_default());
    }
}
