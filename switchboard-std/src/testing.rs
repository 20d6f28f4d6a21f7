//! Testing utilities for Switchboard.
//!
//! This module provides handlers that make routing easy to observe in tests.
//!
//! # Features
//!
//! - [`RecordingHandler`]: records every argument bundle it receives
//! - [`CountingHandler`]: counts invocations

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use switchboard_core::Handler;

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records the arguments of every call and returns a fixed output.
///
/// Useful for verifying which handler a key was routed to, and with which
/// arguments.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::returning("added".to_string());
/// routes.on_handler("ADD_TODO", recorder.clone());
///
/// dispatch.dispatch((state, action))?;
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHandler<Args, Out> {
    calls: Arc<Mutex<Vec<Args>>>,
    output: Out,
}

impl<Args, Out> RecordingHandler<Args, Out> {
    /// Create a recording handler that returns `output` on every call.
    pub fn returning(output: Out) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            output,
        }
    }

    /// Get a clone of the recorded argument bundles.
    pub fn calls(&self) -> Vec<Args>
    where
        Args: Clone,
    {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl<Args, Out: Clone> Clone for RecordingHandler<Args, Out> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            output: self.output.clone(),
        }
    }
}

impl<T, Args, Out> Handler<T, Args> for RecordingHandler<Args, Out>
where
    T: ?Sized,
    Args: Send + 'static,
    Out: Clone + Send + Sync + 'static,
{
    type Output = Out;

    fn call(&self, _target: &T, args: Args) -> Out {
        self.calls.lock().unwrap().push(args);
        self.output.clone()
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations and returns `Out::default()`.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// routes.on_default_handler(counter.clone());
///
/// dispatch.dispatch(args)?;
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl<T: ?Sized, Args> Handler<T, Args> for CountingHandler {
    type Output = ();

    fn call(&self, _target: &T, _args: Args) -> Self::Output {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
