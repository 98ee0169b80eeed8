//! Typed error variants and load diagnostics for the contour-config crate.
//!
//! File-level failures (I/O, unparsable YAML) are [`ConfigError`]s and are
//! surfaced through `anyhow::Result` by the persistence helpers. Everything
//! below the file level is fail-soft: a field or input-mapping rule that
//! cannot be converted produces a [`FieldError`], which the reader records
//! as a [`Diagnostic`] while the field keeps its previous value.
//!
//! # Example
//!
//! ```rust,no_run
//! use contour_config::ConfigError;
//!
//! fn check_load_err(e: &anyhow::Error) {
//!     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
//!         match cfg_err {
//!             ConfigError::Io(io) => eprintln!("I/O error: {io}"),
//!             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
//!             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
//!         }
//!     }
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Errors that can occur when reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A value failed semantic validation.
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Why a single document value could not be converted to its field type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The YAML node has the wrong shape (e.g. a sequence where a number is expected).
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The value parsed but lies outside the accepted range.
    #[error("value {value} is out of range ({range})")]
    OutOfRange { value: String, range: &'static str },

    /// The value is not one of the accepted names or formats.
    #[error("{0}")]
    Invalid(String),

    /// A key, modifier, mouse button or mode name could not be parsed.
    #[error(transparent)]
    Input(#[from] contour_keybindings::ParseError),
}

impl FieldError {
    pub(crate) fn mismatch(expected: &'static str, node: &serde_yaml_ng::Value) -> Self {
        FieldError::TypeMismatch {
            expected,
            found: node_kind(node),
        }
    }
}

/// Human-readable name of a YAML node's kind, for diagnostics.
pub(crate) fn node_kind(node: &serde_yaml_ng::Value) -> &'static str {
    use serde_yaml_ng::Value;
    match node {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// A recoverable problem found while loading the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Dotted path of the offending value (e.g. `profiles.main.fonts.size`).
    /// Empty for document-level problems.
    pub path: String,
    /// What went wrong.
    pub message: String,
}

impl Diagnostic {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Ordered collection of diagnostics recorded during one load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any diagnostic was recorded for `path` or one of its children.
    pub fn mentions(&self, path: &str) -> bool {
        self.0.iter().any(|d| {
            d.path == path
                || d.path
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('.') || rest.starts_with('['))
        })
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
