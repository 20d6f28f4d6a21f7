//! # switchboard-core
//!
//! Core traits for the Switchboard keyed dispatch builder.
//!
//! This crate has minimal dependencies and holds the vocabulary shared by the
//! registry, the builder and the proc-macro front end:
//!
//! - [`Handler`] - a function run for a matching key, with the target as receiver
//! - [`Selector`] - computes the discriminator key from the call arguments
//! - [`HandlerRecord`] - an immutable `(key, handler)` pair
//! - [`Slot`] - keyed or default position in a plain handler table
//! - [`DefaultValue`] - the builder-level fallback (none, value or function)
//!
//! # Error Types
//!
//! - [`SwitchboardError`] - Top-level error type
//! - [`BuildError`] - Build-time configuration errors
//! - [`DispatchError`] - Unmatched dispatch calls

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod fallback;
mod handler;
mod record;
mod selector;

// Re-exports
pub use error::{BoxError, BuildError, DispatchError, SwitchboardError};
pub use fallback::{DefaultValue, FallbackFn, FixedValue};
pub use handler::{Handler, SharedHandler};
pub use record::{HandlerRecord, Slot};
pub use selector::{Selector, SharedSelector};
