//! # switchboard - Keyed Dispatch Builder
//!
//! `switchboard` turns a set of declared handlers, each answering to one
//! discriminator value, into a single dispatch function. It replaces a
//! hand-written `match` for reducer-style action routing.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use switchboard::{HandlerBuilder, Registry};
//!
//! type Args = (Vec<Todo>, Action);
//!
//! let mut routes: Registry<&str, Todos, Args, Vec<Todo>> = Registry::new(Todos);
//! routes.on("ADD_TODO", |_, (mut state, action)| {
//!     state.push(Todo::from(action));
//!     state
//! });
//!
//! let reducer = HandlerBuilder::new(|(_, action): &Args| action.kind)
//!     .with_default_fn(|(state, _)| state)
//!     .build(&routes)?;
//!
//! let state = reducer.dispatch((Vec::new(), add_action))?;
//! ```
//!
//! ## Resolution Order
//!
//! keyed handler, then the registry's default handler, then the builder's
//! default function, then its default value, then [`DispatchError::Unmatched`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use switchboard_core::{
    // Error types
    BoxError,
    BuildError,
    // Fallbacks
    DefaultValue,
    DispatchError,
    FallbackFn,
    FixedValue,
    // Handler
    Handler,
    HandlerRecord,
    // Selector
    Selector,
    SharedHandler,
    SharedSelector,
    Slot,
    SwitchboardError,
};

pub use switchboard_std::{
    Dispatcher, HandlerBuilder, PlainEntry, Registry, Routable, RouteResult, RouteTable, entry,
};

/// Plain handler tables.
pub mod plain {
    pub use switchboard_std::plain::{PlainEntry, entry};
}

/// Testing utilities.
pub mod testing {
    pub use switchboard_std::testing::{CountingHandler, RecordingHandler};
}

/// Prelude module - common imports for Switchboard.
///
/// # Usage
///
/// ```rust,ignore
/// use switchboard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DefaultValue, DispatchError, Dispatcher, Handler, HandlerBuilder, Registry, Routable,
        Slot, entry,
    };
}

#[cfg(feature = "macros")]
pub use switchboard_macros::routes;
