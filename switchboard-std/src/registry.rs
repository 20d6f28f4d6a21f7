//! Handler registry for a single target.

use std::{fmt, sync::Arc};
use switchboard_core::{Handler, HandlerRecord, SharedHandler};

/// The handlers declared for one target.
///
/// A registry owns its target and records `(key, handler)` pairs in
/// registration order, plus at most one default handler. Nothing is looked up
/// here; [`HandlerBuilder::build`] turns a registry into a table.
///
/// The keyed collection does not exist until the first keyed registration.
/// A registry that only has a default handler still has no routes.
///
/// [`HandlerBuilder::build`]: crate::HandlerBuilder::build
pub struct Registry<K, T, Args, Out> {
    target: Arc<T>,
    handlers: Option<Vec<HandlerRecord<K, T, Args, Out>>>,
    default_handler: Option<SharedHandler<T, Args, Out>>,
}

impl<K, T, Args, Out> Registry<K, T, Args, Out> {
    /// Create an empty registry for `target`.
    pub fn new(target: T) -> Self {
        Self::shared(Arc::new(target))
    }

    /// Create an empty registry for a target that is already shared.
    pub fn shared(target: Arc<T>) -> Self {
        Self {
            target,
            handlers: None,
            default_handler: None,
        }
    }

    /// Register `handler` for `key`.
    ///
    /// Duplicate keys are accepted; the last one registered wins once a table
    /// is built.
    pub fn on<F>(&mut self, key: K, handler: F) -> &mut Self
    where
        F: Fn(&T, Args) -> Out + Send + Sync + 'static,
    {
        self.register_handler(key, Arc::new(handler))
    }

    /// Register any [`Handler`] implementation for `key`.
    pub fn on_handler<H>(&mut self, key: K, handler: H) -> &mut Self
    where
        H: Handler<T, Args, Output = Out>,
    {
        self.register_handler(key, Arc::new(handler))
    }

    /// Append an already shared handler for `key`.
    pub fn register_handler(&mut self, key: K, handler: SharedHandler<T, Args, Out>) -> &mut Self {
        self.handlers
            .get_or_insert_with(Vec::new)
            .push(HandlerRecord::new(key, handler));
        self
    }

    /// Set the default handler, replacing any previous one.
    pub fn on_default<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&T, Args) -> Out + Send + Sync + 'static,
    {
        self.register_default_handler(Arc::new(handler))
    }

    /// Set any [`Handler`] implementation as the default handler.
    pub fn on_default_handler<H>(&mut self, handler: H) -> &mut Self
    where
        H: Handler<T, Args, Output = Out>,
    {
        self.register_default_handler(Arc::new(handler))
    }

    /// Set an already shared default handler, replacing any previous one.
    pub fn register_default_handler(&mut self, handler: SharedHandler<T, Args, Out>) -> &mut Self {
        self.default_handler = Some(handler);
        self
    }

    /// Consuming form of [`Registry::on`].
    pub fn with_handler<F>(mut self, key: K, handler: F) -> Self
    where
        F: Fn(&T, Args) -> Out + Send + Sync + 'static,
    {
        self.on(key, handler);
        self
    }

    /// Consuming form of [`Registry::on_default`].
    pub fn with_default_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&T, Args) -> Out + Send + Sync + 'static,
    {
        self.on_default(handler);
        self
    }

    /// The target handlers are invoked on.
    pub fn target(&self) -> &Arc<T> {
        &self.target
    }

    /// The keyed records in registration order, or `None` if none was ever
    /// registered.
    pub fn records(&self) -> Option<&[HandlerRecord<K, T, Args, Out>]> {
        self.handlers.as_deref()
    }

    /// The default handler, if any.
    pub fn default_handler(&self) -> Option<&SharedHandler<T, Args, Out>> {
        self.default_handler.as_ref()
    }

    /// Whether a keyed collection exists.
    pub fn has_routes(&self) -> bool {
        self.handlers.is_some()
    }

    /// Whether a default handler is set.
    pub fn has_default(&self) -> bool {
        self.default_handler.is_some()
    }

    /// Number of keyed records, duplicates included.
    pub fn len(&self) -> usize {
        self.handlers.as_ref().map_or(0, Vec::len)
    }

    /// Whether no keyed record was registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: fmt::Debug, T, Args, Out> fmt::Debug for Registry<K, T, Args, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("handlers", &self.handlers)
            .field("has_default", &self.default_handler.is_some())
            .finish_non_exhaustive()
    }
}

/// A type that declares its own handlers.
///
/// Usually implemented by `#[routes]` on an `impl` block, where each
/// `#[handler(KEY)]` method becomes a keyed registration and the
/// `#[default_handler]` method becomes the default.
pub trait Routable: Sized + 'static {
    /// The discriminator type.
    type Key;
    /// The argument bundle every handler accepts.
    type Args;
    /// The value every handler returns.
    type Output;

    /// Record this type's handlers into `routes`.
    fn register(routes: &mut Registry<Self::Key, Self, Self::Args, Self::Output>);
}

impl<T: Routable> Registry<T::Key, T, T::Args, T::Output> {
    /// Create a registry for `target` populated by its [`Routable`] impl.
    pub fn routable(target: T) -> Self {
        let mut routes = Self::new(target);
        T::register(&mut routes);
        routes
    }
}
