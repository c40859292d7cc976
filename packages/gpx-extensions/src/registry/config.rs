//! Registry configuration for the known Garmin extension schemas.

use super::core::DecoderRegistry;
use super::decoder::TypedDecoder;
use crate::config::{
    validate_namespace, GARMIN_CREATION_TIME_V1_NAMESPACE, GARMIN_GPX_V3_NAMESPACE,
    GARMIN_TRACK_POINT_V1_NAMESPACE,
};
use crate::error::DecodeError;
use crate::garmin::{creation_time, gpx_v3, track_point_v1};

/// Create a registry with decoders for every supported extension namespace.
#[must_use]
pub fn create_extension_registry() -> DecoderRegistry {
    let mut registry = DecoderRegistry::new();
    register_gpx_v3(&mut registry);
    register_track_point_v1(&mut registry);
    register_creation_time_v1(&mut registry);
    registry
}

/// Create a registry with decoders for the given namespaces only.
///
/// # Errors
/// Returns `UnsupportedNamespace` for a namespace without decoders.
pub fn create_registry_for<I, S>(namespaces: I) -> Result<DecoderRegistry, DecodeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut registry = DecoderRegistry::new();
    for namespace in namespaces {
        let namespace = namespace.as_ref();
        validate_namespace(namespace)?;
        match namespace {
            GARMIN_GPX_V3_NAMESPACE => register_gpx_v3(&mut registry),
            GARMIN_TRACK_POINT_V1_NAMESPACE => register_track_point_v1(&mut registry),
            GARMIN_CREATION_TIME_V1_NAMESPACE => register_creation_time_v1(&mut registry),
            other => return Err(DecodeError::UnsupportedNamespace(other.to_string())),
        }
    }
    Ok(registry)
}

fn register_gpx_v3(registry: &mut DecoderRegistry) {
    registry.register(
        GARMIN_GPX_V3_NAMESPACE,
        gpx_v3::WaypointExtension::ELEMENT,
        TypedDecoder(gpx_v3::WaypointExtension::decode),
    );
    registry.register(
        GARMIN_GPX_V3_NAMESPACE,
        gpx_v3::RoutePointExtension::ELEMENT,
        TypedDecoder(gpx_v3::RoutePointExtension::decode),
    );
    registry.register(
        GARMIN_GPX_V3_NAMESPACE,
        gpx_v3::TrackPointExtension::ELEMENT,
        TypedDecoder(gpx_v3::TrackPointExtension::decode),
    );
}

fn register_track_point_v1(registry: &mut DecoderRegistry) {
    registry.register(
        GARMIN_TRACK_POINT_V1_NAMESPACE,
        track_point_v1::TrackPointExtension::ELEMENT,
        TypedDecoder(track_point_v1::TrackPointExtension::decode),
    );
}

fn register_creation_time_v1(registry: &mut DecoderRegistry) {
    registry.register(
        GARMIN_CREATION_TIME_V1_NAMESPACE,
        creation_time::CreationTimeExtension::ELEMENT,
        TypedDecoder(creation_time::CreationTimeExtension::decode),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SUPPORTED_EXTENSION_NAMESPACES;

    #[test]
    fn test_create_extension_registry() {
        let registry = create_extension_registry();

        assert!(registry.has_decoder(GARMIN_GPX_V3_NAMESPACE, "WaypointExtension"));
        assert!(registry.has_decoder(GARMIN_GPX_V3_NAMESPACE, "RoutePointExtension"));
        assert!(registry.has_decoder(GARMIN_GPX_V3_NAMESPACE, "TrackPointExtension"));
        assert!(registry.has_decoder(GARMIN_TRACK_POINT_V1_NAMESPACE, "TrackPointExtension"));
        assert!(registry.has_decoder(GARMIN_CREATION_TIME_V1_NAMESPACE, "CreationTimeExtension"));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_every_supported_namespace_is_registered() {
        let registry = create_extension_registry();
        for ns in SUPPORTED_EXTENSION_NAMESPACES {
            assert!(registry.namespaces().contains(ns), "missing {ns}");
        }
    }

    #[test]
    fn test_create_registry_for_subset() {
        let registry = create_registry_for([GARMIN_CREATION_TIME_V1_NAMESPACE]).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(!registry.has_decoder(GARMIN_GPX_V3_NAMESPACE, "WaypointExtension"));
    }

    #[test]
    fn test_create_registry_for_unknown_namespace() {
        let result = create_registry_for(["urn:unknown"]);
        assert!(matches!(result, Err(DecodeError::UnsupportedNamespace(_))));
    }
}
