//! Decoding contexts: factories that create a decoding service on demand.

use tracing::warn;

use super::config::create_registry_for;
use super::decoder::DecodingService;
use crate::config::SUPPORTED_EXTENSION_NAMESPACES;
use crate::error::DecodeError;

/// A higher-level object that knows how to create a decoding service.
pub trait DecodingContext {
    /// Create a decoding service.
    fn create_service(&self) -> Result<Box<dyn DecodingService>, DecodeError>;
}

/// Create a service from a context, or `None` when creation fails.
///
/// A failing context degrades to "no decoding" rather than surfacing an
/// error; the failure is logged at warn level.
pub fn service_from_context(context: &dyn DecodingContext) -> Option<Box<dyn DecodingService>> {
    match context.create_service() {
        Ok(service) => Some(service),
        Err(err) => {
            warn!(error = %err, "Could not create decoding service, extensions stay raw");
            None
        }
    }
}

/// Decoding context for a set of extension namespaces.
///
/// # Examples
/// ```
/// use gpx_extensions::registry::{DecoderContext, DecodingContext};
///
/// assert!(DecoderContext::default().create_service().is_ok());
/// assert!(DecoderContext::new(["urn:unknown"]).create_service().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderContext {
    namespaces: Vec<String>,
}

impl DecoderContext {
    /// Create a context for the given namespaces.
    #[must_use]
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }

    /// Namespaces covered by this context.
    #[must_use]
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }
}

impl Default for DecoderContext {
    fn default() -> Self {
        Self::new(SUPPORTED_EXTENSION_NAMESPACES)
    }
}

impl DecodingContext for DecoderContext {
    fn create_service(&self) -> Result<Box<dyn DecodingService>, DecodeError> {
        if self.namespaces.is_empty() {
            return Err(DecodeError::EmptyContext);
        }
        let registry = create_registry_for(&self.namespaces)?;
        Ok(Box::new(registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GARMIN_GPX_V3_NAMESPACE;

    #[test]
    fn test_default_context_covers_supported_namespaces() {
        let context = DecoderContext::default();
        assert_eq!(context.namespaces().len(), SUPPORTED_EXTENSION_NAMESPACES.len());
        assert!(service_from_context(&context).is_some());
    }

    #[test]
    fn test_empty_context_fails() {
        let context = DecoderContext::new(Vec::<String>::new());
        assert!(matches!(
            context.create_service(),
            Err(DecodeError::EmptyContext)
        ));
        assert!(service_from_context(&context).is_none());
    }

    #[test]
    fn test_unsupported_namespace_degrades_to_none() {
        let context = DecoderContext::new([GARMIN_GPX_V3_NAMESPACE, "urn:unknown"]);
        assert!(service_from_context(&context).is_none());
    }
}
