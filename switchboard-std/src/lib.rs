//! # switchboard-std
//!
//! Standard implementations for the Switchboard keyed dispatch builder.
//!
//! This crate provides:
//! - **Registration**: [`Registry`], the [`Routable`] trait and plain entry tables
//! - **Lookup**: [`RouteTable`], an immutable exact-match table
//! - **Building**: [`HandlerBuilder`] and the [`Dispatcher`] it produces
//! - **Testing**: recording and counting handlers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use switchboard_core;

// Modules
pub mod builder;
pub mod plain;
pub mod registry;
pub mod table;
pub mod testing;

pub use builder::{Dispatcher, HandlerBuilder};
pub use plain::{PlainEntry, entry};
pub use registry::{Registry, Routable};
pub use table::{RouteResult, RouteTable};
