//! Provider capability trait
//!
//! A provider is an external plugin implementing operations against one
//! infrastructure backend. The evaluation core only depends on the
//! capability set below: enumerate supported types, fetch schema, accept
//! configuration. Transport (in-process, subprocess RPC, network) is the
//! concern of the plugin-loading layer that produces the connected instance.

use crate::error::Result;
use crate::schema::{ProviderSchema, SchemaRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Interactive or declared configuration values for one provider
pub type InputValues = HashMap<String, serde_json::Value>;

/// Shared handle to one connected provider instance
pub type ProviderHandle = Arc<dyn Provider>;

/// A resource type a provider claims to support
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTypeDescriptor {
    pub name: String,

    /// Whether the provider can return a schema for this type; older plugins
    /// predate schema negotiation and report `false`
    pub schema_available: bool,
}

/// A data source a provider claims to support
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceDescriptor {
    pub name: String,
    pub schema_available: bool,
}

/// Provider plugin abstraction
///
/// All providers implement this trait to give the evaluation core a unified
/// interface, regardless of how the plugin is hosted.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Resource types this provider manages
    fn resources(&self) -> Vec<ResourceTypeDescriptor>;

    /// Data sources this provider can read
    fn data_sources(&self) -> Vec<DataSourceDescriptor>;

    /// Fetch the schemas for the requested type names, plus the provider's
    /// own configuration block schema. May cross a process boundary.
    async fn schema(&self, request: &SchemaRequest) -> Result<ProviderSchema>;

    /// Apply configuration values to the provider instance
    async fn configure(&self, values: InputValues) -> Result<()>;
}
