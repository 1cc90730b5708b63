//! Module instance paths
//!
//! A module instance is one instantiation of a reusable configuration
//! subtree. Its identity is the path of (name, instance key) steps from the
//! root; the root itself is the empty path.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instance key for a multi-instance module (count index or for-each key)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstanceKey {
    Int(u64),
    String(String),
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceKey::Int(n) => write!(f, "[{}]", n),
            InstanceKey::String(s) => write!(f, "[{:?}]", s),
        }
    }
}

/// One step in a module path: the module call name plus the instance key,
/// if the call is multi-instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleStep {
    pub name: String,
    pub key: Option<InstanceKey>,
}

impl ModuleStep {
    pub fn new(name: impl Into<String>, key: Option<InstanceKey>) -> Self {
        Self {
            name: name.into(),
            key,
        }
    }
}

impl fmt::Display for ModuleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module.{}", self.name)?;
        if let Some(key) = &self.key {
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

/// Path identifying one module instance within the configuration tree
///
/// Equality and hashing are structural, so a `ModulePath` can be used
/// directly as (part of) a cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModulePath(Vec<ModuleStep>);

impl ModulePath {
    /// The root module instance (empty path)
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path of a child module instance under this one
    pub fn child(&self, name: impl Into<String>, key: Option<InstanceKey>) -> Self {
        let mut steps = self.0.clone();
        steps.push(ModuleStep::new(name, key));
        Self(steps)
    }

    pub fn steps(&self) -> &[ModuleStep] {
        &self.0
    }

    /// Path of the enclosing module instance, or `None` at the root
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "<root>");
        }
        let mut first = true;
        for step in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", step)?;
            first = false;
        }
        Ok(())
    }
}
