//! Provider handle and schema cache
//!
//! One `ProviderCache` is shared by every evaluation context of a walk. It
//! guarantees at-most-one live provider instance per absolute configuration
//! reference: the first `init_provider` for a key constructs the instance
//! and negotiates its schema, every later call returns the cached handle.
//!
//! A single async lock guards both maps and is held across the factory call
//! and the schema round trip, so concurrent initializations of the same key
//! collapse into one construction. The coarse hold means initialization of
//! distinct keys also serializes behind it; provider startup is rare and
//! one-time per walk, so exactly-once wins over parallel handshakes here.
//! Lookups after initialization only contend for the brief map access.

use crate::error::{EvalError, Result};
use groundwork_addrs::AbsProviderConfigRef;
use groundwork_provider::{
    ComponentFactory, ProviderError, ProviderHandle, ProviderSchema, SchemaRequest,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
struct CacheInner {
    handles: HashMap<AbsProviderConfigRef, ProviderHandle>,
    // Write-once per key; entries outlive close_provider
    schemas: HashMap<AbsProviderConfigRef, Arc<ProviderSchema>>,
}

/// Shared cache of live provider instances and their negotiated schemas
pub struct ProviderCache {
    components: Arc<dyn ComponentFactory>,
    inner: Mutex<CacheInner>,
}

impl ProviderCache {
    /// Creates an empty cache backed by the given factory; lives for one walk
    pub fn new(components: Arc<dyn ComponentFactory>) -> Self {
        Self {
            components,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Returns the live provider for `addr`, constructing and schema-
    /// negotiating it on first use
    ///
    /// Idempotent: a second call for the same key returns the existing
    /// handle without invoking the factory or re-fetching the schema.
    pub async fn init_provider(
        &self,
        type_name: &str,
        addr: AbsProviderConfigRef,
    ) -> Result<ProviderHandle> {
        let mut inner = self.inner.lock().await;

        if let Some(existing) = inner.handles.get(&addr) {
            tracing::debug!("Provider {} already initialized, reusing handle", addr);
            return Ok(Arc::clone(existing));
        }

        tracing::debug!("Initializing provider {} (type {})", addr, type_name);
        let provider = match self.components.new_provider(type_name) {
            Ok(provider) => provider,
            Err(ProviderError::UnknownType(name)) => {
                return Err(EvalError::UnknownProviderType(name));
            }
            Err(err) => return Err(err.into()),
        };

        let schema = Self::fetch_schema(type_name, &provider).await?;
        inner.schemas.insert(addr.clone(), Arc::new(schema));
        inner.handles.insert(addr, Arc::clone(&provider));
        Ok(provider)
    }

    /// Negotiates the schema for exactly the types the provider declares
    async fn fetch_schema(
        type_name: &str,
        provider: &ProviderHandle,
    ) -> Result<ProviderSchema> {
        let mut resource_types: Vec<String> = provider
            .resources()
            .into_iter()
            .filter(|d| d.schema_available)
            .map(|d| d.name)
            .collect();
        let mut data_sources: Vec<String> = provider
            .data_sources()
            .into_iter()
            .filter(|d| d.schema_available)
            .map(|d| d.name)
            .collect();
        resource_types.sort();
        data_sources.sort();

        let request = SchemaRequest {
            resource_types,
            data_sources,
        };
        let schema = provider.schema(&request).await?;

        let missing_resources: Vec<String> = request
            .resource_types
            .iter()
            .filter(|name| schema.resource_type(name).is_none())
            .cloned()
            .collect();
        let missing_data_sources: Vec<String> = request
            .data_sources
            .iter()
            .filter(|name| schema.data_source(name).is_none())
            .cloned()
            .collect();

        if !missing_resources.is_empty() || !missing_data_sources.is_empty() {
            tracing::warn!(
                "Provider {} declared {} resource type(s) and {} data source(s) with no schema",
                type_name,
                missing_resources.len(),
                missing_data_sources.len()
            );
            return Err(EvalError::SchemaMismatch {
                provider: type_name.to_string(),
                missing_resources,
                missing_data_sources,
            });
        }

        Ok(schema)
    }

    /// Returns the live handle for `addr`, or `None` if it was never
    /// initialized (or has been closed)
    pub async fn provider(&self, addr: &AbsProviderConfigRef) -> Option<ProviderHandle> {
        self.inner.lock().await.handles.get(addr).map(Arc::clone)
    }

    /// Returns the negotiated schema for `addr`
    ///
    /// Callers are expected to have initialized the provider first; `None`
    /// here is a contract violation on the caller's side, not an error path.
    pub async fn schema(&self, addr: &AbsProviderConfigRef) -> Option<Arc<ProviderSchema>> {
        self.inner.lock().await.schemas.get(addr).map(Arc::clone)
    }

    /// Drops the live handle for `addr`, returning it so the caller can shut
    /// the plugin down. The cached schema stays; a later `init_provider`
    /// constructs a fresh handle.
    pub async fn close_provider(&self, addr: &AbsProviderConfigRef) -> Option<ProviderHandle> {
        let removed = self.inner.lock().await.handles.remove(addr);
        if removed.is_some() {
            tracing::debug!("Closed provider {}", addr);
        }
        removed
    }
}
