//! # Dispatch Builder
//!
//! [`HandlerBuilder`] holds a selector and a [`DefaultValue`]. Calling
//! [`HandlerBuilder::build`] on a [`Registry`] snapshots the registry into a
//! [`RouteTable`] and returns a [`Dispatcher`].
//!
//! # Resolution Order
//!
//! For every call the dispatcher computes `key = selector(&args)` and then
//! tries, in this order:
//!
//! 1. the handler registered for `key`
//! 2. the registry's default handler
//! 3. [`DefaultValue::Function`], called with the arguments
//! 4. [`DefaultValue::Value`], returned as-is
//! 5. [`DispatchError::Unmatched`]
//!
//! Exactly one of these applies. Handlers and fallbacks run to completion
//! before `dispatch` returns, and their output is passed through untouched.

use crate::{
    registry::{Registry, Routable},
    table::{RouteResult, RouteTable},
};
use std::{fmt::Display, hash::Hash, sync::Arc};
use switchboard_core::{
    BuildError, DefaultValue, DispatchError, Selector, SharedHandler, SharedSelector,
};

/// Builds [`Dispatcher`]s from registries.
///
/// A builder is immutable once configured and can build any number of
/// dispatchers; each build reads the registry afresh.
pub struct HandlerBuilder<K, Args, Out> {
    selector: SharedSelector<Args, K>,
    default_value: DefaultValue<Args, Out>,
}

impl<K, Args, Out> HandlerBuilder<K, Args, Out> {
    /// Create a builder that fails unmatched calls.
    pub fn new<S>(selector: S) -> Self
    where
        S: Fn(&Args) -> K + Send + Sync + 'static,
    {
        Self::with_selector(selector)
    }

    /// Create a builder from any [`Selector`] implementation.
    pub fn with_selector<S>(selector: S) -> Self
    where
        S: Selector<Args, Key = K>,
    {
        Self {
            selector: Arc::new(selector),
            default_value: DefaultValue::None,
        }
    }

    /// Set the fallback used when no handler matches.
    pub fn with_default(mut self, default_value: DefaultValue<Args, Out>) -> Self {
        self.default_value = default_value;
        self
    }

    /// Fall back to a fixed value.
    pub fn with_default_value(self, value: Out) -> Self
    where
        Out: Clone + Send + Sync + 'static,
    {
        self.with_default(DefaultValue::value(value))
    }

    /// Fall back to a function of the call arguments.
    pub fn with_default_fn<F>(self, f: F) -> Self
    where
        F: Fn(Args) -> Out + Send + Sync + 'static,
    {
        self.with_default(DefaultValue::function(f))
    }

    /// The configured fallback.
    pub fn default_value(&self) -> &DefaultValue<Args, Out> {
        &self.default_value
    }
}

impl<K, Args, Out> HandlerBuilder<K, Args, Out>
where
    K: Eq + Hash + Clone,
{
    /// Build a dispatcher from `routes`.
    ///
    /// Fails with [`BuildError::NoRoutes`] when no keyed handler was ever
    /// registered, even if a default handler was. Later registrations on
    /// `routes` are not seen by the returned dispatcher.
    pub fn build<T>(
        &self,
        routes: &Registry<K, T, Args, Out>,
    ) -> Result<Dispatcher<K, T, Args, Out>, BuildError> {
        let Some(records) = routes.records() else {
            #[cfg(feature = "tracing")]
            tracing::debug!("refusing to build dispatcher: no routes on target");
            return Err(BuildError::NoRoutes);
        };

        let table: RouteTable<_, _> = records
            .iter()
            .map(|record| (record.key.clone(), record.handler.clone()))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            records = records.len(),
            keys = table.len(),
            default_handler = routes.has_default(),
            default_value = ?self.default_value,
            "built dispatcher"
        );

        Ok(Dispatcher {
            target: routes.target().clone(),
            table: Arc::new(table),
            default_handler: routes.default_handler().cloned(),
            selector: self.selector.clone(),
            default_value: self.default_value.clone(),
        })
    }

    /// Build a dispatcher for a target that declares its own handlers.
    pub fn build_routable<T>(&self, target: T) -> Result<Dispatcher<K, T, Args, Out>, BuildError>
    where
        T: Routable<Key = K, Args = Args, Output = Out>,
    {
        self.build(&Registry::routable(target))
    }
}

/// A built dispatch function.
///
/// Cloning is cheap; clones share the same table and target.
pub struct Dispatcher<K, T, Args, Out> {
    target: Arc<T>,
    table: Arc<RouteTable<K, SharedHandler<T, Args, Out>>>,
    default_handler: Option<SharedHandler<T, Args, Out>>,
    selector: SharedSelector<Args, K>,
    default_value: DefaultValue<Args, Out>,
}

impl<K, T, Args, Out> Dispatcher<K, T, Args, Out>
where
    K: Eq + Hash + Display + 'static,
    T: 'static,
    Args: 'static,
    Out: 'static,
{
    /// Route one call.
    pub fn dispatch(&self, args: Args) -> Result<Out, DispatchError> {
        let key = self.selector.select(&args);

        if let RouteResult::Matched(handler) = self.table.route(&key) {
            #[cfg(feature = "tracing")]
            tracing::trace!(%key, "dispatching to keyed handler");
            return Ok(handler.call(&self.target, args));
        }

        if let Some(handler) = &self.default_handler {
            #[cfg(feature = "tracing")]
            tracing::trace!(%key, "dispatching to default handler");
            return Ok(handler.call(&self.target, args));
        }

        match self.default_value.resolve(args) {
            Some(out) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(%key, "resolved by default value");
                Ok(out)
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%key, "no matching handler or default value");
                Err(DispatchError::unmatched(&key))
            }
        }
    }

    /// Borrow the dispatcher as a plain function.
    pub fn as_fn(&self) -> impl Fn(Args) -> Result<Out, DispatchError> + '_ {
        move |args| self.dispatch(args)
    }

    /// Turn the dispatcher into a plain function.
    pub fn into_fn(self) -> impl Fn(Args) -> Result<Out, DispatchError> {
        move |args| self.dispatch(args)
    }

    /// Whether `key` has a keyed handler.
    pub fn contains_key(&self, key: &K) -> bool {
        self.table.contains_key(key)
    }
}

impl<K, T, Args, Out> Dispatcher<K, T, Args, Out> {
    /// The target handlers run against.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Whether a default handler was captured at build time.
    pub fn has_default_handler(&self) -> bool {
        self.default_handler.is_some()
    }

    /// Number of distinct keys in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<K, T, Args, Out> Clone for Dispatcher<K, T, Args, Out> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            table: self.table.clone(),
            default_handler: self.default_handler.clone(),
            selector: self.selector.clone(),
            default_value: self.default_value.clone(),
        }
    }
}
