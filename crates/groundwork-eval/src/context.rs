//! Per-node evaluation context
//!
//! The graph walker creates one `EvalContext` per module instance it
//! evaluates nodes in. The context is a capability view: it carries the
//! caller's module path and forwards every operation to the caches shared
//! across the whole walk, so contexts are cheap to derive and safe to use
//! from parallel workers.

use crate::cache::ProviderCache;
use crate::error::{EvalError, Result};
use crate::input::InputStore;
use groundwork_addrs::{AbsProviderConfigRef, ModulePath, ProviderConfigRef};
use groundwork_provider::{InputValues, ProviderHandle, ProviderSchema};
use std::sync::Arc;

/// Evaluation context for graph nodes within one module instance
#[derive(Clone)]
pub struct EvalContext {
    path: ModulePath,
    providers: Arc<ProviderCache>,
    inputs: Arc<InputStore>,
}

impl EvalContext {
    /// Context for the root module instance
    pub fn new(providers: Arc<ProviderCache>, inputs: Arc<InputStore>) -> Self {
        Self {
            path: ModulePath::root(),
            providers,
            inputs,
        }
    }

    /// Context for another module instance, sharing this one's backing
    /// caches
    pub fn with_path(&self, path: ModulePath) -> Self {
        Self {
            path,
            providers: Arc::clone(&self.providers),
            inputs: Arc::clone(&self.inputs),
        }
    }

    /// Module instance this context evaluates within
    pub fn path(&self) -> &ModulePath {
        &self.path
    }

    fn absolute(&self, provider: &ProviderConfigRef) -> AbsProviderConfigRef {
        provider.absolute(self.path.clone())
    }

    /// Initializes (or reuses) the provider instance for a configuration
    /// declared in this module instance
    pub async fn init_provider(
        &self,
        type_name: &str,
        provider: &ProviderConfigRef,
    ) -> Result<ProviderHandle> {
        self.providers
            .init_provider(type_name, self.absolute(provider))
            .await
    }

    /// Live handle for an already-initialized provider instance
    pub async fn provider(&self, addr: &AbsProviderConfigRef) -> Option<ProviderHandle> {
        self.providers.provider(addr).await
    }

    /// Negotiated schema for an already-initialized provider instance
    pub async fn provider_schema(
        &self,
        addr: &AbsProviderConfigRef,
    ) -> Option<Arc<ProviderSchema>> {
        self.providers.schema(addr).await
    }

    /// Passes configuration values to the provider instance for `provider`
    /// at this context's path
    pub async fn configure_provider(
        &self,
        provider: &ProviderConfigRef,
        values: InputValues,
    ) -> Result<()> {
        let addr = self.absolute(provider);
        let handle = self
            .providers
            .provider(&addr)
            .await
            .ok_or_else(|| EvalError::ProviderNotInitialized(addr.to_string()))?;
        handle.configure(values).await?;
        Ok(())
    }

    /// Shuts down the provider instance for `provider` at this context's
    /// path, if one is live
    pub async fn close_provider(&self, provider: &ProviderConfigRef) -> Option<ProviderHandle> {
        self.providers.close_provider(&self.absolute(provider)).await
    }

    /// Interactive input previously recorded for a provider configuration
    /// at this context's path
    pub fn provider_input(&self, provider: &ProviderConfigRef) -> Option<InputValues> {
        self.inputs.get(&self.absolute(provider))
    }

    /// Records interactive input for a provider configuration at this
    /// context's path
    ///
    /// The store outlives this context, so input recorded during a sub-walk
    /// is still there when the same module instance is evaluated again.
    pub fn set_provider_input(&self, provider: &ProviderConfigRef, values: InputValues) {
        self.inputs.set(self.absolute(provider), values);
    }
}
