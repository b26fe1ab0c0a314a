//! declgen: class-declaration synthesis core for editor tooling
//!
//! This library is the portable heart of a script-creator editor window: given
//! a class name plus ordered lists of field and method descriptors, it
//! validates them against a pluggable type resolver and deterministically
//! renders a textual class declaration.
//!
//! # Architecture
//!
//! - **Spec Layer**: Plain data describing the class to generate
//! - **Resolver Layer**: Abstracts the host's type universe behind a trait
//! - **Generator**: Sanitizes names, validates types, renders the declaration
//! - **Layout**: Rectangle-slicing helpers for hosts that draw their own GUI
//!
//! Generation is best-effort: fields and methods that fail validation are
//! skipped, never fatal. Hosts wanting visibility into skips use
//! [`generator::DeclarationRenderer::render_with_report`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generator;
pub mod layout;
pub mod resolver;
pub mod spec;

// Re-export commonly used types
pub use generator::DeclarationRenderer;
pub use resolver::{TypeHandle, TypeResolver};
pub use spec::ClassSpec;

/// Result type used throughout the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for declgen
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rectangle layout error
    #[error("Layout error: {0}")]
    Layout(#[from] layout::LayoutError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging for the library
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("declgen=info"))
        )
        .with_target(false)
        .init();
}
