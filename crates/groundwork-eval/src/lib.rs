//! Groundwork evaluation core
//!
//! During a walk of the resource dependency graph, many nodes are evaluated
//! in parallel, each inside a module instance somewhere in the configuration
//! tree. This crate provides the shared state those evaluations go through:
//!
//! - [`ProviderCache`]: at-most-one live provider instance per
//!   [`AbsProviderConfigRef`](groundwork_addrs::AbsProviderConfigRef), with
//!   the negotiated schema cached write-once beside the handle.
//! - [`InputStore`]: interactive configuration values keyed by absolute
//!   provider reference, kept for the whole walk so a value prompted once
//!   is not asked for again.
//! - [`EvalContext`]: the per-node facade binding a module path to the
//!   shared caches and the component factory. It owns no data; any number
//!   of contexts can share the same backing stores.
//!
//! All three structures are created empty at the start of a walk and
//! discarded with it. They are explicit values passed by `Arc`, never
//! process-wide singletons, so concurrent walks (tests included) cannot
//! interfere.

pub mod cache;
pub mod context;
pub mod error;
pub mod input;

// Re-exports
pub use cache::ProviderCache;
pub use context::EvalContext;
pub use error::{EvalError, Result};
pub use input::InputStore;
