//! Interactive provider input store
//!
//! Values a user supplied in response to a missing-argument prompt are kept
//! here so later evaluations do not re-prompt. Entries are keyed by the
//! absolute provider reference, so each module instance keeps its own input
//! for the same provider type + alias. The store itself is one structure
//! shared across every evaluation context of a walk: input recorded while
//! evaluating a child module instance stays available after that sub-walk
//! completes.

use groundwork_addrs::AbsProviderConfigRef;
use groundwork_provider::InputValues;
use std::collections::HashMap;
use std::sync::Mutex;

/// Shared store of interactively supplied provider configuration values
///
/// One instance is shared by reference across every evaluation context of a
/// walk. Each operation is atomic under the internal lock; a set that
/// completes before a get begins is guaranteed visible to it.
#[derive(Default)]
pub struct InputStore {
    values: Mutex<HashMap<AbsProviderConfigRef, InputValues>>,
}

impl InputStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores input for a provider instance, overwriting any previous
    /// values for the same absolute reference
    pub fn set(&self, provider: AbsProviderConfigRef, values: InputValues) {
        tracing::debug!("Storing {} input value(s) for {}", values.len(), provider);
        self.values
            .lock()
            .expect("input store lock poisoned")
            .insert(provider, values);
    }

    /// Returns the stored input for a provider instance, or `None` if
    /// nothing was ever set
    pub fn get(&self, provider: &AbsProviderConfigRef) -> Option<InputValues> {
        self.values
            .lock()
            .expect("input store lock poisoned")
            .get(provider)
            .cloned()
    }
}
