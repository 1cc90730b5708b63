//! Component factory
//!
//! The evaluation core creates providers lazily, by type name, through this
//! narrow contract. The embedding engine decides what a constructor actually
//! does (spawn a plugin process, dial a socket, return an in-process fake).

use crate::error::{ProviderError, Result};
use crate::provider::ProviderHandle;
use std::collections::HashMap;
use std::sync::Arc;

/// Constructor producing a fresh, connected provider instance
pub type ProviderConstructor = Box<dyn Fn() -> Result<ProviderHandle> + Send + Sync>;

/// Source of uninitialized provider instances, keyed by type name
pub trait ComponentFactory: Send + Sync {
    fn new_provider(&self, type_name: &str) -> Result<ProviderHandle>;
}

/// Factory backed by a registry of constructor closures
#[derive(Default)]
pub struct BasicComponentFactory {
    providers: HashMap<String, ProviderConstructor>,
}

impl BasicComponentFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor for a provider type
    pub fn register<F>(&mut self, type_name: impl Into<String>, constructor: F)
    where
        F: Fn() -> Result<ProviderHandle> + Send + Sync + 'static,
    {
        self.providers.insert(type_name.into(), Box::new(constructor));
    }

    /// Registers a constructor that always returns the given instance
    ///
    /// Useful for tests and for in-process providers that are already
    /// connected.
    pub fn register_fixed(&mut self, type_name: impl Into<String>, provider: ProviderHandle) {
        self.register(type_name, move || Ok(Arc::clone(&provider)));
    }

    /// Builder-style variant of [`register`](Self::register)
    pub fn with_provider<F>(mut self, type_name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Result<ProviderHandle> + Send + Sync + 'static,
    {
        self.register(type_name, constructor);
        self
    }

    /// Registered type names, mainly for diagnostics
    pub fn provider_types(&self) -> Vec<&str> {
        self.providers.keys().map(String::as_str).collect()
    }
}

impl ComponentFactory for BasicComponentFactory {
    fn new_provider(&self, type_name: &str) -> Result<ProviderHandle> {
        match self.providers.get(type_name) {
            Some(constructor) => constructor(),
            None => Err(ProviderError::UnknownType(type_name.to_string())),
        }
    }
}
