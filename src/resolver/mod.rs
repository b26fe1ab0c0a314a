//! Type resolution boundary
//!
//! The generator never inspects the host's type universe directly. It asks a
//! [`TypeResolver`] two questions: is this name a built-in primitive keyword,
//! and does a declared type with this name exist. In the original editor tool
//! the answers come from live reflection over the loaded assemblies; a
//! portable embedding backs the trait with a static registry instead (see
//! [`registry::RegistryResolver`]).

use std::fmt;

pub mod registry;

pub use registry::RegistryResolver;

/// Built-in primitive type keywords, checked by exact membership
///
/// This is a closed, case-sensitive list; it is never derived from platform
/// type metadata.
pub const PRIMITIVE_KEYWORDS: [&str; 16] = [
    "void", "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "long",
    "ulong", "object", "short", "ushort", "string",
];

/// Handle to a declared type known to the resolver
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeHandle {
    /// Simple type name (no namespace qualification)
    pub name: String,
}

impl TypeHandle {
    /// Create a handle for the given simple name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Core trait answering type-existence queries for the generator
///
/// Resolution is by simple name, first match wins. Collisions across
/// namespaces are not detected; that is a documented weakness of the original
/// tool, preserved here.
pub trait TypeResolver: Send + Sync {
    /// Check whether a name is a built-in primitive keyword
    ///
    /// The default implementation is the exact membership test against
    /// [`PRIMITIVE_KEYWORDS`] and should rarely need overriding.
    fn is_primitive_keyword(&self, name: &str) -> bool {
        PRIMITIVE_KEYWORDS.contains(&name)
    }

    /// Look up a declared type by exact simple name
    ///
    /// # Returns
    /// The first matching type, or `None` if the name is unknown
    fn resolve_type(&self, name: &str) -> Option<TypeHandle>;

    /// All transitive subtypes of the given type, sorted by name
    ///
    /// Used by interactive type pickers to populate dropdowns; the generator
    /// itself never calls this.
    fn subtypes_of(&self, parent: &TypeHandle) -> Vec<TypeHandle>;
}

impl fmt::Debug for dyn TypeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullResolver;

    impl TypeResolver for NullResolver {
        fn resolve_type(&self, _name: &str) -> Option<TypeHandle> {
            None
        }

        fn subtypes_of(&self, _parent: &TypeHandle) -> Vec<TypeHandle> {
            Vec::new()
        }
    }

    #[test]
    fn test_primitive_keywords_membership() {
        let resolver = NullResolver;

        for keyword in PRIMITIVE_KEYWORDS {
            assert!(resolver.is_primitive_keyword(keyword));
        }

        assert!(!resolver.is_primitive_keyword("Int"));
        assert!(!resolver.is_primitive_keyword("int "));
        assert!(!resolver.is_primitive_keyword("String"));
        assert!(!resolver.is_primitive_keyword(""));
    }

    #[test]
    fn test_primitive_keywords_are_not_resolved_types() {
        // Keywords and declared types are separate universes
        let resolver = NullResolver;
        assert!(resolver.resolve_type("int").is_none());
        assert!(resolver.is_primitive_keyword("int"));
    }
}
