//! Garmin extension schemas.
//!
//! Each submodule models one Garmin namespace. Shared behavior across the
//! models is expressed as capability traits, which double as targets for
//! polymorphic queries on an `ExtensionIndex`:
//!
//! - [`GarminExtension`]: every Garmin model
//! - [`Temperature`]: models that report a temperature reading
//! - [`Addressed`]: models that may carry a postal address
//! - [`Depth`]: models that report a depth reading
//! - [`Categorized`]: models that can be filed under user categories

pub mod creation_time;
pub mod gpx_v3;
pub mod track_point_v1;

use std::fmt::Display;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::fragment::Fragment;

pub use creation_time::CreationTimeExtension;
pub use gpx_v3::{Address, DisplayMode, PhoneNumber, RoutePointExtension, WaypointExtension};

/// Common supertype of all Garmin extension models.
pub trait GarminExtension {
    /// Namespace URI of the schema that defines the model.
    fn namespace(&self) -> &'static str;

    /// Local element name of the model.
    fn element_name(&self) -> &'static str;
}

/// A model that can report a temperature in degrees Celsius.
pub trait Temperature {
    /// Temperature, if recorded.
    fn temperature(&self) -> Option<f64>;
}

/// A model that may carry a postal address.
pub trait Addressed {
    /// Address, if present.
    fn address(&self) -> Option<&Address>;
}

/// A model that can report a depth in meters.
pub trait Depth {
    /// Depth, if recorded.
    fn depth(&self) -> Option<f64>;
}

/// A model that can be filed under user-defined categories.
pub trait Categorized {
    /// Category names in document order.
    fn categories(&self) -> &[String];
}

/// Check that a fragment is the expected element before decoding it.
pub(crate) fn expect_element(
    fragment: &Fragment,
    namespace: &str,
    name: &str,
) -> Result<(), DecodeError> {
    if fragment.is(namespace, name) {
        Ok(())
    } else {
        Err(DecodeError::UnknownElement {
            namespace: fragment.namespace().map(String::from),
            name: fragment.name().to_string(),
        })
    }
}

/// Parse a string into `T`, reporting the element it came from on failure.
pub(crate) fn parse_value<T>(element: &str, raw: &str) -> Result<T, DecodeError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|err| DecodeError::invalid_value(element, raw, err))
}

/// Parse the text of an optional child element.
pub(crate) fn parse_child<T>(fragment: &Fragment, name: &str) -> Result<Option<T>, DecodeError>
where
    T: FromStr,
    T::Err: Display,
{
    fragment
        .child_text(name)
        .map(|text| parse_value(name, &text))
        .transpose()
}

/// Parse the text of a required child element.
pub(crate) fn require_child<T>(fragment: &Fragment, name: &str) -> Result<T, DecodeError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_child(fragment, name)?.ok_or_else(|| DecodeError::missing(name, fragment.name()))
}

/// Parse a required attribute.
pub(crate) fn require_attribute<T>(fragment: &Fragment, name: &str) -> Result<T, DecodeError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = fragment
        .attribute(name)
        .ok_or_else(|| DecodeError::missing(format!("@{name}"), fragment.name()))?;
    parse_value(name, raw)
}
