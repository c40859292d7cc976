//! Decoder registry mapping qualified element names to decoders.

use std::collections::{HashMap, HashSet};

use super::decoder::{DecodingService, ElementDecoder};
use super::types::DecodedValue;
use crate::error::DecodeError;
use crate::fragment::Fragment;

/// Qualified element name: namespace URI plus local name.
type QualifiedName = (Option<String>, String);

/// Registry mapping element names to decoders.
///
/// The registry is itself a [`DecodingService`]: a fragment is decoded by the
/// decoder registered for its namespace and local name.
pub struct DecoderRegistry {
    decoders: HashMap<QualifiedName, Box<dyn ElementDecoder>>,
}

impl DecoderRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register a decoder for an element in a namespace.
    ///
    /// A later registration for the same name replaces the earlier one.
    pub fn register(
        &mut self,
        namespace: &str,
        name: impl Into<String>,
        decoder: impl ElementDecoder + 'static,
    ) {
        self.decoders
            .insert((Some(namespace.to_string()), name.into()), Box::new(decoder));
    }

    /// Get the decoder for a fragment, if one is registered.
    pub fn get_decoder(&self, fragment: &Fragment) -> Option<&dyn ElementDecoder> {
        let key = (
            fragment.namespace().map(String::from),
            fragment.name().to_string(),
        );
        self.decoders.get(&key).map(|d| d.as_ref())
    }

    /// Check if a decoder is registered for an element.
    #[must_use]
    pub fn has_decoder(&self, namespace: &str, name: &str) -> bool {
        self.decoders
            .contains_key(&(Some(namespace.to_string()), name.to_string()))
    }

    /// Return the set of namespaces that have at least one decoder.
    #[must_use]
    pub fn namespaces(&self) -> HashSet<&str> {
        self.decoders
            .keys()
            .filter_map(|(ns, _)| ns.as_deref())
            .collect()
    }

    /// Number of registered decoders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether no decoder is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodingService for DecoderRegistry {
    fn decode(&self, fragment: &Fragment) -> Result<DecodedValue, DecodeError> {
        match self.get_decoder(fragment) {
            Some(decoder) => decoder.decode(fragment),
            None => Err(DecodeError::UnknownElement {
                namespace: fragment.namespace().map(String::from),
                name: fragment.name().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RawDecoder;

    impl ElementDecoder for RawDecoder {
        fn decode(&self, fragment: &Fragment) -> Result<DecodedValue, DecodeError> {
            Ok(DecodedValue::Fragment(fragment.clone()))
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = DecoderRegistry::new();
        registry.register("urn:test", "test", RawDecoder);

        let fragment = Fragment::new(Some("urn:test"), "test");
        assert!(registry.get_decoder(&fragment).is_some());
        assert!(registry.has_decoder("urn:test", "test"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_requires_matching_namespace() {
        let mut registry = DecoderRegistry::new();
        registry.register("urn:test", "test", RawDecoder);

        assert!(registry.get_decoder(&Fragment::new(None, "test")).is_none());
        assert!(registry
            .get_decoder(&Fragment::new(Some("urn:other"), "test"))
            .is_none());
    }

    #[test]
    fn test_registry_unknown_element_error() {
        let registry = DecoderRegistry::new();
        let err = registry
            .decode(&Fragment::new(Some("urn:x"), "missing"))
            .unwrap_err();

        assert_eq!(
            err,
            DecodeError::UnknownElement {
                namespace: Some("urn:x".to_string()),
                name: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_registry_namespaces() {
        let mut registry = DecoderRegistry::new();
        registry.register("urn:a", "one", RawDecoder);
        registry.register("urn:a", "two", RawDecoder);
        registry.register("urn:b", "one", RawDecoder);

        assert_eq!(registry.namespaces(), HashSet::from(["urn:a", "urn:b"]));
    }
}
