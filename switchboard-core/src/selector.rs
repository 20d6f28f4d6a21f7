//! Selector trait: maps call arguments to a discriminator key.

use std::sync::Arc;

/// Computes the discriminator for a call.
///
/// Selectors are expected to be pure; the dispatcher runs one exactly once per
/// call, before any lookup.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot select a key from `{Args}`",
    label = "missing `Selector<{Args}>` implementation",
    note = "Selectors are `Fn(&Args) -> Key` closures."
)]
pub trait Selector<Args>: Send + Sync + 'static {
    /// The discriminator type.
    type Key;

    /// Compute the key for `args`.
    fn select(&self, args: &Args) -> Self::Key;
}

impl<F, Args, K> Selector<Args> for F
where
    F: Fn(&Args) -> K + Send + Sync + 'static,
{
    type Key = K;

    fn select(&self, args: &Args) -> K {
        (self)(args)
    }
}

/// A type-erased selector.
pub type SharedSelector<Args, K> = Arc<dyn Selector<Args, Key = K>>;
