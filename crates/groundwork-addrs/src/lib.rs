//! Address types for Groundwork
//!
//! Everything the evaluation core caches or scopes is keyed by an address
//! from this crate: a [`ModulePath`] identifies one module instance in the
//! configuration tree, a [`ProviderConfigRef`] names a provider configuration
//! block (type + optional alias), and an [`AbsProviderConfigRef`] combines
//! the two into the canonical cache key.
//!
//! All addresses are plain data with structural equality and hashing, so two
//! independently constructed addresses for the same instance compare equal
//! and collide in a map. Keys are never flattened to strings.

pub mod module;
pub mod provider;

pub use module::{InstanceKey, ModulePath, ModuleStep};
pub use provider::{AbsProviderConfigRef, ProviderConfigRef};
