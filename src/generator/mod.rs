//! Declaration synthesis
//!
//! This module turns a [`ClassSpec`] into source text: identifiers are
//! sanitized, field and method types are checked against the host's
//! [`TypeResolver`], and everything that survives is rendered into a class
//! body. Invalid entries are dropped, not reported as errors; generation is
//! best-effort by policy. [`DeclarationRenderer::render_with_report`] exposes
//! what was dropped for hosts that want to surface it.

use crate::resolver::TypeResolver;
use crate::spec::{ClassSpec, FieldSpec, MethodSpec, ParamKeyword, ParameterSpec};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Symbols trimmed from both ends of a user-entered identifier
const TRIMMED_SYMBOLS: &[char] = &[
    '&', '*', '+', '-', '/', '<', '>', '=', '\'', '\\', '@', '`', '^', '!', '?', '.', ',', ';',
    ':', '|', '{', '}', '[', ']', '(', ')', '"',
];

/// Default preamble emitted before the class declaration
pub const DEFAULT_PREAMBLE: &str = "using UnityEngine;\n\n";

/// Clean a user-entered identifier into something declarable
///
/// Whitespace is trimmed, interior spaces become underscores, leading decimal
/// digits are stripped, and a fixed set of symbol characters is trimmed from
/// both ends. The steps repeat until the string stops changing, so the result
/// is a fixpoint: sanitizing twice gives the same answer, and the output
/// never starts with a digit or contains a space.
///
/// An empty result marks the owning field or method as invalid.
pub fn sanitize_identifier(raw: &str) -> String {
    let mut current = raw.to_string();

    loop {
        let pass = current
            .trim()
            .replace(' ', "_")
            .trim_start_matches(|c: char| c.is_ascii_digit())
            .trim_matches(|c: char| TRIMMED_SYMBOLS.contains(&c))
            .to_string();

        if pass == current {
            return pass;
        }
        current = pass;
    }
}

/// Check whether a type name is declarable
///
/// True iff the name is a built-in primitive keyword or the resolver knows a
/// declared type by that exact name.
pub fn is_valid_type(name: &str, resolver: &dyn TypeResolver) -> bool {
    resolver.is_primitive_keyword(name) || resolver.resolve_type(name).is_some()
}

/// What kind of entry was skipped during rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A field declaration
    Field,
    /// A method declaration
    Method,
}

/// Why an entry was skipped during rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry's name sanitized down to an empty string
    EmptyName,
    /// The type name is neither a primitive keyword nor a resolvable type
    UnknownType(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyName => write!(f, "name is empty after sanitization"),
            SkipReason::UnknownType(name) => write!(f, "unknown type '{}'", name),
        }
    }
}

/// A field or method dropped from the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Field or method
    pub kind: EntryKind,
    /// The entry's name as the user entered it
    pub name: String,
    /// Why it was dropped
    pub reason: SkipReason,
}

/// Everything dropped during one rendering pass
///
/// Best-effort generation never fails; this report is the optional stricter
/// view for hosts that want to warn the user about skipped entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Skipped entries, in spec order (fields first, then methods)
    pub skipped: Vec<SkippedEntry>,
}

impl GenerationReport {
    /// Whether every entry in the spec made it into the output
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Renders a [`ClassSpec`] into a textual class declaration
///
/// Rendering is pure and deterministic: the same spec and resolver state
/// always produce byte-identical output.
#[derive(Debug, Clone)]
pub struct DeclarationRenderer {
    /// Text emitted before the class line
    preamble: String,
    /// Base class appended after the class name, if any
    base_class: Option<String>,
}

impl Default for DeclarationRenderer {
    fn default() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
            base_class: None,
        }
    }
}

impl DeclarationRenderer {
    /// Create a renderer with the default preamble and no base class
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the preamble emitted before the class line
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    /// Derive the generated class from a base class
    pub fn with_base_class(mut self, base: impl Into<String>) -> Self {
        self.base_class = Some(base.into());
        self
    }

    /// Render the spec to source text, silently skipping invalid entries
    pub fn render(&self, spec: &ClassSpec, resolver: &dyn TypeResolver) -> String {
        let (source, report) = self.render_with_report(spec, resolver);

        for entry in &report.skipped {
            debug!(name = %entry.name, kind = ?entry.kind, "skipped invalid entry: {}", entry.reason);
        }

        source
    }

    /// Render the spec and report every entry that was skipped
    pub fn render_with_report(
        &self,
        spec: &ClassSpec,
        resolver: &dyn TypeResolver,
    ) -> (String, GenerationReport) {
        let mut out = String::new();
        let mut report = GenerationReport::default();

        out.push_str(&self.preamble);
        out.push_str("public class ");
        out.push_str(&sanitize_identifier(&spec.name));
        if let Some(base) = &self.base_class {
            out.push_str(" : ");
            out.push_str(base);
        }
        out.push_str("\n{\n");

        for field in &spec.fields {
            match checked_name(&field.name, &field.type_name, resolver) {
                Ok(name) => {
                    out.push('\t');
                    out.push_str(&field_declaration(field, &name));
                    out.push('\n');
                }
                Err(reason) => report.skipped.push(SkippedEntry {
                    kind: EntryKind::Field,
                    name: field.name.clone(),
                    reason,
                }),
            }
        }

        for method in &spec.methods {
            match checked_name(&method.name, &method.return_type_name, resolver) {
                Ok(name) => {
                    out.push('\t');
                    out.push_str(&method_declaration(method, &name));
                    out.push('\n');
                }
                Err(reason) => report.skipped.push(SkippedEntry {
                    kind: EntryKind::Method,
                    name: method.name.clone(),
                    reason,
                }),
            }
        }

        out.push_str("}\n");
        (out, report)
    }
}

/// Validate an entry and hand back its sanitized name
fn checked_name(
    name: &str,
    type_name: &str,
    resolver: &dyn TypeResolver,
) -> Result<String, SkipReason> {
    let sanitized = sanitize_identifier(name);
    if sanitized.is_empty() {
        return Err(SkipReason::EmptyName);
    }

    if !is_valid_type(type_name, resolver) {
        return Err(SkipReason::UnknownType(type_name.to_string()));
    }

    Ok(sanitized)
}

fn field_declaration(field: &FieldSpec, name: &str) -> String {
    format!(
        "{} {} {};",
        field.visibility.as_keyword(),
        field.type_name,
        name
    )
}

fn method_declaration(method: &MethodSpec, name: &str) -> String {
    // Stable reorder by keyword; plain parameters first, `params` last
    let mut parameters = method.parameters.clone();
    parameters.sort_by_key(|p| p.keyword);

    let rendered: Vec<String> = parameters.iter().map(parameter_declaration).collect();

    format!(
        "{} {} {}({}){{ }}",
        method.visibility.as_keyword(),
        method.return_type_name,
        name,
        rendered.join(", ")
    )
}

fn parameter_declaration(parameter: &ParameterSpec) -> String {
    match parameter.keyword {
        ParamKeyword::Params => format!(
            "params {}[] {}",
            parameter.type_name, parameter.name
        ),
        ParamKeyword::None => format!("{} {}", parameter.type_name, parameter.name),
        keyword => format!(
            "{} {} {}",
            keyword.as_keyword().unwrap_or_default(),
            parameter.type_name,
            parameter.name
        ),
    }
}

/// Write rendered source text to disk
///
/// The single blocking write the editor performs after rendering. Hosts with
/// their own asset pipeline can ignore this and persist the string themselves.
pub fn write_source(path: impl AsRef<Path>, source: &str) -> crate::Result<()> {
    let path = path.as_ref();
    std::fs::write(path, source)?;
    info!(path = %path.display(), bytes = source.len(), "wrote generated source");
    Ok(())
}
