//! Error types for Switchboard.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`SwitchboardError`] - Top-level error type for all Switchboard operations
//! - [`BuildError`] - Errors raised while turning a registry into a dispatcher
//! - [`DispatchError`] - Errors raised by a dispatcher for a single call
//!
//! Errors produced *by handlers* are not part of this hierarchy. A handler
//! returning `Result<_, BoxError>` hands that result back to the caller as-is.

use std::fmt::Display;
use thiserror::Error;

/// A boxed error type for handlers that fail dynamically.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Switchboard operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchboardError {
    /// The dispatcher could not be built.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// A dispatch call found nothing to run.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Errors that can occur while building a dispatcher.
///
/// These signal a configuration mistake, not bad runtime data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The target never had a keyed handler registered.
    #[error("no routes found on target")]
    NoRoutes,
}

/// Errors that can occur when calling a dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No keyed handler, default handler or default value applied.
    #[error("no matching handler or default value available for {key}")]
    Unmatched {
        /// Textual form of the discriminator that failed to match.
        key: String,
    },
}

impl DispatchError {
    /// Build an [`DispatchError::Unmatched`] for the given key.
    pub fn unmatched<K: Display + ?Sized>(key: &K) -> Self {
        DispatchError::Unmatched {
            key: key.to_string(),
        }
    }

    /// The textual key carried by this error.
    pub fn key(&self) -> &str {
        match self {
            DispatchError::Unmatched { key } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmatched_message_names_the_key() {
        let err = DispatchError::unmatched("foo");
        assert_eq!(
            err.to_string(),
            "no matching handler or default value available for foo"
        );
        assert_eq!(err.key(), "foo");
    }

    #[test]
    fn unmatched_renders_non_string_keys() {
        enum Kind {
            Toggle,
        }

        impl Display for Kind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    Kind::Toggle => f.write_str("TOGGLE"),
                }
            }
        }

        let err = DispatchError::unmatched(&Kind::Toggle);
        assert_eq!(
            err.to_string(),
            "no matching handler or default value available for TOGGLE"
        );

        let err = DispatchError::unmatched(&42u32);
        assert_eq!(err.key(), "42");
    }

    #[test]
    fn converts_into_top_level_error() {
        let err: SwitchboardError = BuildError::NoRoutes.into();
        assert_eq!(err.to_string(), "build error: no routes found on target");

        let err: SwitchboardError = DispatchError::unmatched("foo").into();
        assert!(matches!(err, SwitchboardError::Dispatch(_)));
    }
}
