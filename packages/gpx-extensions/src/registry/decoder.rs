//! Decoding service traits and the fallback-to-raw decoder adapter.

use super::types::DecodedValue;
use crate::error::DecodeError;
use crate::fragment::Fragment;

/// A service that can try to turn a fragment into a typed value.
///
/// Implementations must be safe to share between threads; the adapter holds
/// no state of its own.
pub trait DecodingService: Send + Sync {
    /// Attempt to decode one fragment.
    fn decode(&self, fragment: &Fragment) -> Result<DecodedValue, DecodeError>;
}

/// Trait for per-element decoders held by a `DecoderRegistry`.
pub trait ElementDecoder: Send + Sync {
    /// Decode a fragment that matched this decoder's element name.
    fn decode(&self, fragment: &Fragment) -> Result<DecodedValue, DecodeError>;
}

/// Element decoder backed by a model's `decode` function.
///
/// # Examples
/// ```
/// use gpx_extensions::garmin::WaypointExtension;
/// use gpx_extensions::registry::TypedDecoder;
///
/// let decoder = TypedDecoder(WaypointExtension::decode);
/// # let _ = decoder;
/// ```
pub struct TypedDecoder<T>(pub fn(&Fragment) -> Result<T, DecodeError>);

impl<T> ElementDecoder for TypedDecoder<T>
where
    T: Into<DecodedValue>,
{
    fn decode(&self, fragment: &Fragment) -> Result<DecodedValue, DecodeError> {
        (self.0)(fragment).map(Into::into)
    }
}

/// Decode a fragment, keeping the raw fragment when decoding is unavailable
/// or fails.
///
/// Failures are logged at debug level and never returned.
///
/// # Examples
/// ```
/// use gpx_extensions::{decode, DecodedValue, Fragment};
///
/// let fragment = Fragment::parse("<unknown/>").unwrap();
/// assert_eq!(decode(&fragment, None), DecodedValue::Fragment(fragment.clone()));
/// ```
pub fn decode(fragment: &Fragment, service: Option<&dyn DecodingService>) -> DecodedValue {
    let Some(service) = service else {
        return DecodedValue::Fragment(fragment.clone());
    };

    service.decode(fragment).unwrap_or_else(|err| {
        tracing::debug!(
            error = %err,
            tag = %fragment.name(),
            namespace = fragment.namespace().unwrap_or_default(),
            "Could not decode extension, keeping raw fragment"
        );
        DecodedValue::Fragment(fragment.clone())
    })
}
