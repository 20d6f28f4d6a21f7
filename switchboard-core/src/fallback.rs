//! Builder-level fallback used when neither a keyed nor a default handler matched.

use std::{fmt, sync::Arc};

/// A fixed fallback value.
///
/// The value is captured once; every unmatched call receives a clone of that
/// same value, it is never recomputed.
pub struct FixedValue<Out> {
    produce: Arc<dyn Fn() -> Out + Send + Sync>,
}

impl<Out> FixedValue<Out> {
    /// Capture `value`.
    pub fn new(value: Out) -> Self
    where
        Out: Clone + Send + Sync + 'static,
    {
        Self {
            produce: Arc::new(move || value.clone()),
        }
    }

    /// A copy of the captured value.
    pub fn get(&self) -> Out {
        (self.produce)()
    }
}

impl<Out> Clone for FixedValue<Out> {
    fn clone(&self) -> Self {
        Self {
            produce: self.produce.clone(),
        }
    }
}

/// A fallback function, called with the original arguments and no receiver.
pub type FallbackFn<Args, Out> = Arc<dyn Fn(Args) -> Out + Send + Sync>;

/// What a dispatcher does when no handler matched.
///
/// - [`DefaultValue::None`] - fail with [`DispatchError::Unmatched`]
/// - [`DefaultValue::Value`] - return the fixed value
/// - [`DefaultValue::Function`] - call the function with the arguments
///
/// [`DispatchError::Unmatched`]: crate::DispatchError::Unmatched
pub enum DefaultValue<Args, Out> {
    /// No fallback configured.
    None,
    /// Return a fixed value.
    Value(FixedValue<Out>),
    /// Compute the value from the call arguments.
    Function(FallbackFn<Args, Out>),
}

impl<Args, Out> DefaultValue<Args, Out> {
    /// A fixed fallback value.
    pub fn value(value: Out) -> Self
    where
        Out: Clone + Send + Sync + 'static,
    {
        DefaultValue::Value(FixedValue::new(value))
    }

    /// A fallback computed from the call arguments.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(Args) -> Out + Send + Sync + 'static,
    {
        DefaultValue::Function(Arc::new(f))
    }

    /// Whether any fallback is configured.
    pub fn is_none(&self) -> bool {
        matches!(self, DefaultValue::None)
    }

    /// Resolve the fallback for `args`, or `None` when nothing is configured.
    ///
    /// A function takes precedence over nothing; a value is returned as-is.
    pub fn resolve(&self, args: Args) -> Option<Out> {
        match self {
            DefaultValue::Function(f) => Some(f(args)),
            DefaultValue::Value(v) => Some(v.get()),
            DefaultValue::None => None,
        }
    }
}

impl<Args, Out> Default for DefaultValue<Args, Out> {
    fn default() -> Self {
        DefaultValue::None
    }
}

impl<Args, Out> Clone for DefaultValue<Args, Out> {
    fn clone(&self) -> Self {
        match self {
            DefaultValue::None => DefaultValue::None,
            DefaultValue::Value(v) => DefaultValue::Value(v.clone()),
            DefaultValue::Function(f) => DefaultValue::Function(f.clone()),
        }
    }
}

impl<Args, Out> fmt::Debug for DefaultValue<Args, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::None => f.write_str("None"),
            DefaultValue::Value(_) => f.write_str("Value(..)"),
            DefaultValue::Function(_) => f.write_str("Function(..)"),
        }
    }
}
