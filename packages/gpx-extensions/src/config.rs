//! Namespace constants and validation for GPX and its known extension schemas.

use crate::error::DecodeError;

/// GPX 1.1 namespace.
pub const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";

/// GPX 1.1 schema location.
pub const GPX_SCHEMA_LOCATION: &str = "http://www.topografix.com/GPX/1/1/gpx.xsd";

/// Garmin GPX extensions, version 3.
pub const GARMIN_GPX_V3_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/GpxExtensions/v3";

/// Schema location of the Garmin GPX extensions, version 3.
pub const GARMIN_GPX_V3_SCHEMA_LOCATION: &str =
    "http://www8.garmin.com/xmlschemas/GpxExtensionsv3.xsd";

/// Garmin track point extension, version 1.
pub const GARMIN_TRACK_POINT_V1_NAMESPACE: &str =
    "http://www.garmin.com/xmlschemas/TrackPointExtension/v1";

/// Schema location of the Garmin track point extension, version 1.
pub const GARMIN_TRACK_POINT_V1_SCHEMA_LOCATION: &str =
    "http://www8.garmin.com/xmlschemas/TrackPointExtensionv1.xsd";

/// Garmin creation time extension, version 1.
pub const GARMIN_CREATION_TIME_V1_NAMESPACE: &str =
    "http://www.garmin.com/xmlschemas/CreationTimeExtension/v1";

/// Schema location of the Garmin creation time extension, version 1.
pub const GARMIN_CREATION_TIME_V1_SCHEMA_LOCATION: &str =
    "http://www8.garmin.com/xmlschemas/CreationTimeExtensionv1.xsd";

/// Extension namespaces that have decoders.
pub const SUPPORTED_EXTENSION_NAMESPACES: [&str; 3] = [
    GARMIN_GPX_V3_NAMESPACE,
    GARMIN_TRACK_POINT_V1_NAMESPACE,
    GARMIN_CREATION_TIME_V1_NAMESPACE,
];

/// Look up the schema location of a supported extension namespace.
///
/// # Examples
/// ```
/// use gpx_extensions::config::{schema_location, GARMIN_GPX_V3_NAMESPACE};
///
/// assert_eq!(
///     schema_location(GARMIN_GPX_V3_NAMESPACE),
///     Some("http://www8.garmin.com/xmlschemas/GpxExtensionsv3.xsd")
/// );
/// assert_eq!(schema_location("urn:unknown"), None);
/// ```
pub fn schema_location(namespace: &str) -> Option<&'static str> {
    match namespace {
        GPX_NAMESPACE => Some(GPX_SCHEMA_LOCATION),
        GARMIN_GPX_V3_NAMESPACE => Some(GARMIN_GPX_V3_SCHEMA_LOCATION),
        GARMIN_TRACK_POINT_V1_NAMESPACE => Some(GARMIN_TRACK_POINT_V1_SCHEMA_LOCATION),
        GARMIN_CREATION_TIME_V1_NAMESPACE => Some(GARMIN_CREATION_TIME_V1_SCHEMA_LOCATION),
        _ => None,
    }
}

/// Validate that a namespace has decoders.
///
/// # Returns
/// * `Ok(())` if the namespace is one of [`SUPPORTED_EXTENSION_NAMESPACES`]
/// * `Err(DecodeError::UnsupportedNamespace)` otherwise
///
/// # Examples
/// ```
/// use gpx_extensions::config::validate_namespace;
///
/// assert!(validate_namespace("http://www.garmin.com/xmlschemas/GpxExtensions/v3").is_ok());
/// assert!(validate_namespace("http://www.topografix.com/GPX/1/1").is_err());
/// ```
pub fn validate_namespace(namespace: &str) -> Result<(), DecodeError> {
    if SUPPORTED_EXTENSION_NAMESPACES.contains(&namespace) {
        Ok(())
    } else {
        Err(DecodeError::UnsupportedNamespace(namespace.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_namespace_has_schema() {
        for ns in SUPPORTED_EXTENSION_NAMESPACES {
            assert!(schema_location(ns).is_some(), "no schema for {ns}");
            assert!(validate_namespace(ns).is_ok());
        }
    }

    #[test]
    fn test_validate_namespace_rejects_unknown() {
        let err = validate_namespace("urn:unknown").unwrap_err();
        assert_eq!(err, DecodeError::UnsupportedNamespace("urn:unknown".to_string()));
    }

    #[test]
    fn test_gpx_namespace_is_not_an_extension() {
        assert!(validate_namespace(GPX_NAMESPACE).is_err());
        assert_eq!(schema_location(GPX_NAMESPACE), Some(GPX_SCHEMA_LOCATION));
    }
}
