//! Provider configuration addresses

use crate::module::ModulePath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a provider configuration block: provider type plus an
/// optional alias (`None` = the default instance of that type)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderConfigRef {
    pub type_name: String,
    pub alias: Option<String>,
}

impl ProviderConfigRef {
    /// The default (unaliased) configuration of a provider type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            alias: None,
        }
    }

    /// An aliased configuration of a provider type
    pub fn aliased(type_name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            alias: Some(alias.into()),
        }
    }

    /// Anchors this reference at a module instance path, producing the
    /// canonical cache key for one provider instance
    pub fn absolute(&self, path: ModulePath) -> AbsProviderConfigRef {
        AbsProviderConfigRef {
            path,
            provider: self.clone(),
        }
    }
}

impl fmt::Display for ProviderConfigRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "provider.{}", self.type_name)?;
        if let Some(alias) = &self.alias {
            write!(f, ".{}", alias)?;
        }
        Ok(())
    }
}

/// Provider configuration reference anchored at the module instance where
/// the configuration is declared
///
/// Two references with the same type and alias but different paths are
/// distinct provider instances; configuration is never implicitly shared
/// across module instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsProviderConfigRef {
    pub path: ModulePath,
    pub provider: ProviderConfigRef,
}

impl fmt::Display for AbsProviderConfigRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.provider)
        } else {
            write!(f, "{}.{}", self.path, self.provider)
        }
    }
}
