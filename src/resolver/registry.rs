//! Static-registry resolver
//!
//! A portable [`TypeResolver`] backed by a table of declared types supplied at
//! startup, either programmatically or from a JSON schema file. Hosts without
//! live reflection (batch tools, tests, headless builds) use this in place of
//! assembly scanning.

use super::{TypeHandle, TypeResolver};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A declared type in the registry schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Simple type name
    pub name: String,
    /// Name of the direct supertype, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Default)]
struct RegistryInner {
    /// Entries in registration order; resolution is first match by name
    entries: Vec<TypeEntry>,
}

impl RegistryInner {
    fn find(&self, name: &str) -> Option<&TypeEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Collect all transitive subtypes of `parent` by walking parent links
    fn subtypes(&self, parent: &str) -> Vec<TypeHandle> {
        let mut result = Vec::new();

        for entry in &self.entries {
            if entry.name != parent && self.descends_from(&entry.name, parent) {
                result.push(TypeHandle::new(entry.name.clone()));
            }
        }

        result.sort_by(|a, b| a.name.cmp(&b.name));
        result
    }

    fn descends_from(&self, name: &str, ancestor: &str) -> bool {
        let mut current = self.find(name).and_then(|e| e.parent.as_deref());
        let mut depth = 0usize;

        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }

            // Guard against cycles in a malformed schema
            depth += 1;
            if depth > self.entries.len() {
                return false;
            }

            current = self.find(parent).and_then(|e| e.parent.as_deref());
        }

        false
    }
}

/// Registry-backed resolver implementation
///
/// Cheap to clone; clones share the same table, and new types can be
/// registered after creation (a host may learn about types lazily).
#[derive(Clone, Default)]
pub struct RegistryResolver {
    inner: Arc<RwLock<RegistryInner>>,
}

impl RegistryResolver {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON schema: an array of [`TypeEntry`] values
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let entries: Vec<TypeEntry> = serde_json::from_str(json)?;
        let registry = Self::new();
        registry.inner.write().entries = entries;
        Ok(registry)
    }

    /// Register a root type with no supertype
    pub fn register(&self, name: impl Into<String>) {
        self.inner.write().entries.push(TypeEntry {
            name: name.into(),
            parent: None,
        });
    }

    /// Register a type with a direct supertype
    pub fn register_subtype(&self, name: impl Into<String>, parent: impl Into<String>) {
        self.inner.write().entries.push(TypeEntry {
            name: name.into(),
            parent: Some(parent.into()),
        });
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Whether the registry holds no types
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }
}

impl TypeResolver for RegistryResolver {
    fn resolve_type(&self, name: &str) -> Option<TypeHandle> {
        self.inner
            .read()
            .find(name)
            .map(|e| TypeHandle::new(e.name.clone()))
    }

    fn subtypes_of(&self, parent: &TypeHandle) -> Vec<TypeHandle> {
        self.inner.read().subtypes(&parent.name)
    }
}
