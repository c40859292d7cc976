//! Error types for GPX extension handling.
//!
//! Uses the dual-error pattern: `ExtensionError` for library consumers that
//! read documents, and `DecodeError` for the per-fragment failures that the
//! decoder adapter absorbs.

use thiserror::Error;

/// Main error type for reading GPX documents and running the CLI.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// The document root is not a `<gpx>` element.
    #[error("Not a GPX document: root element is <{0}>")]
    NotGpx(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// Decoding setup failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failure to decode a single fragment, or to set up a decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No decoder is registered for the element.
    #[error("No decoder for element <{name}>{}", .namespace.as_ref().map(|ns| format!(" in namespace {ns}")).unwrap_or_default())]
    UnknownElement {
        namespace: Option<String>,
        name: String,
    },

    /// A required child element is missing.
    #[error("Missing required element <{element}> in <{context}>")]
    MissingElement { element: String, context: String },

    /// Element text could not be converted to the expected value.
    #[error("Invalid value '{value}' for <{element}>: {reason}")]
    InvalidValue {
        element: String,
        value: String,
        reason: String,
    },

    /// The namespace has no known extension schema.
    #[error("Unsupported extension namespace: {0}")]
    UnsupportedNamespace(String),

    /// A decoding context was created without any namespace.
    #[error("Decoding context has no namespaces")]
    EmptyContext,
}

impl DecodeError {
    /// Shorthand for an [`DecodeError::InvalidValue`].
    pub fn invalid_value(
        element: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            element: element.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for a [`DecodeError::MissingElement`].
    pub fn missing(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingElement {
            element: element.into(),
            context: context.into(),
        }
    }
}

/// Result type alias for document-level operations.
pub type Result<T> = std::result::Result<T, ExtensionError>;
