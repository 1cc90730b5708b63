//! Groundwork provider contract
//!
//! This crate defines the boundary between the evaluation core and external
//! provider plugins (cloud/API backends). The core never speaks a wire
//! protocol itself; it only requires that a connected provider expose the
//! [`Provider`] capability set, and that a [`ComponentFactory`] can construct
//! one by type name.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              groundwork-eval                 │
//! │   (provider cache / schema cache / input)    │
//! └──────┬───────────────────────────┬──────────┘
//!        │ new_provider(type)        │ schema / configure
//! ┌──────▼──────────┐       ┌────────▼──────────┐
//! │ ComponentFactory │       │  trait Provider   │
//! └──────────────────┘       └────────┬──────────┘
//!                                     │ transport (not specified here)
//!                            ┌────────▼──────────┐
//!                            │   plugin process  │
//!                            └───────────────────┘
//! ```

pub mod error;
pub mod factory;
pub mod provider;
pub mod schema;

// Re-exports
pub use error::{ProviderError, Result};
pub use factory::{BasicComponentFactory, ComponentFactory, ProviderConstructor};
pub use provider::{
    DataSourceDescriptor, InputValues, Provider, ProviderHandle, ResourceTypeDescriptor,
};
pub use schema::{Attribute, Block, ProviderSchema, SchemaRequest, ValueType};
