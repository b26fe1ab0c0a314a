//! Class specification data model
//!
//! These types describe the class a front end wants generated: a name plus
//! ordered lists of fields and methods. Order is rendering order. Specs are
//! transient values, built per generation request and discarded afterwards;
//! serde support exists so front ends can hand them across a process boundary
//! as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete description of a class to generate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Class name as entered by the user (sanitized at render time)
    pub name: String,
    /// Fields to declare, in rendering order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    /// Methods to declare, in rendering order
    #[serde(default)]
    pub methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// Create an empty spec with the given class name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Parse a spec from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the spec to JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A single field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as entered by the user
    pub name: String,
    /// Declared type name (primitive keyword or resolvable type)
    pub type_name: String,
    /// Access modifier
    #[serde(default)]
    pub visibility: Visibility,
}

/// A single method declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    /// Method name as entered by the user
    pub name: String,
    /// Return type name (primitive keyword or resolvable type)
    pub return_type_name: String,
    /// Parameters, in the order the user entered them
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
    /// Access modifier
    #[serde(default)]
    pub visibility: Visibility,
}

/// A single method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name, rendered as given
    pub name: String,
    /// Declared type name, rendered as given
    pub type_name: String,
    /// Passing-mode keyword
    #[serde(default)]
    pub keyword: ParamKeyword,
}

/// Access modifier for fields and methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// `public`
    #[default]
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
}

impl Visibility {
    /// The lowercase source keyword for this modifier
    pub fn as_keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_keyword())
    }
}

/// Parameter passing-mode keyword
///
/// The declared order doubles as the sort key for parameter rendering:
/// parameters are stably reordered by this enum before being emitted, so all
/// plain parameters render before any `ref` parameters regardless of input
/// order. Not required by any target language; kept for output compatibility.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ParamKeyword {
    /// No keyword, plain by-value parameter
    #[default]
    None,
    /// `in`
    In,
    /// `out`
    Out,
    /// `ref`
    Ref,
    /// `params` (variadic; type renders with a `[]` suffix)
    Params,
}

impl ParamKeyword {
    /// The lowercase source keyword, or `None` for a plain parameter
    pub fn as_keyword(self) -> Option<&'static str> {
        match self {
            ParamKeyword::None => None,
            ParamKeyword::In => Some("in"),
            ParamKeyword::Out => Some("out"),
            ParamKeyword::Ref => Some("ref"),
            ParamKeyword::Params => Some("params"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_keyword_sort_order() {
        let mut keywords = vec![
            ParamKeyword::Params,
            ParamKeyword::Ref,
            ParamKeyword::None,
            ParamKeyword::Out,
            ParamKeyword::In,
        ];
        keywords.sort();

        assert_eq!(
            keywords,
            vec![
                ParamKeyword::None,
                ParamKeyword::In,
                ParamKeyword::Out,
                ParamKeyword::Ref,
                ParamKeyword::Params,
            ]
        );
    }

    #[test]
    fn test_visibility_keywords() {
        assert_eq!(Visibility::Public.as_keyword(), "public");
        assert_eq!(Visibility::Private.as_keyword(), "private");
        assert_eq!(Visibility::Protected.as_keyword(), "protected");
        assert_eq!(Visibility::default(), Visibility::Public);
    }

    #[test]
    fn test_class_spec_json_round_trip() {
        let spec = ClassSpec {
            name: "Inventory".to_string(),
            fields: vec![FieldSpec {
                name: "capacity".to_string(),
                type_name: "int".to_string(),
                visibility: Visibility::Private,
            }],
            methods: vec![MethodSpec {
                name: "Add".to_string(),
                return_type_name: "void".to_string(),
                parameters: vec![ParameterSpec {
                    name: "count".to_string(),
                    type_name: "int".to_string(),
                    keyword: ParamKeyword::None,
                }],
                visibility: Visibility::Public,
            }],
        };

        let json = spec.to_json().unwrap();
        let parsed = ClassSpec::from_json(&json).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn test_class_spec_json_defaults() {
        let spec = ClassSpec::from_json(r#"{"name": "Empty"}"#).unwrap();
        assert_eq!(spec.name, "Empty");
        assert!(spec.fields.is_empty());
        assert!(spec.methods.is_empty());
    }
}
