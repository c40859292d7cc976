//! Decoded values, their type tags, and the query trait.

use std::fmt;

use serde::Serialize;

use crate::fragment::Fragment;
use crate::garmin::{
    creation_time, gpx_v3, track_point_v1, Addressed, Categorized, Depth, GarminExtension,
    Temperature,
};

/// Exact runtime type of a [`DecodedValue`], used as the index key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ValueKind {
    /// Raw fragment that was not decoded.
    Fragment,
    /// `gpxx:WaypointExtension`.
    GpxWaypoint,
    /// `gpxx:RoutePointExtension`.
    GpxRoutePoint,
    /// `gpxx:TrackPointExtension`.
    GpxTrackPoint,
    /// `gpxtpx:TrackPointExtension`.
    TrackPointV1,
    /// `wptx1:CreationTimeExtension`.
    CreationTime,
}

impl ValueKind {
    /// Stable name for reports and logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fragment => "Fragment",
            Self::GpxWaypoint => "GpxWaypoint",
            Self::GpxRoutePoint => "GpxRoutePoint",
            Self::GpxTrackPoint => "GpxTrackPoint",
            Self::TrackPointV1 => "TrackPointV1",
            Self::CreationTime => "CreationTime",
        }
    }

    /// Values of this kind implement [`GarminExtension`].
    #[must_use]
    pub fn is_garmin(&self) -> bool {
        !matches!(self, Self::Fragment)
    }

    /// Values of this kind implement [`Temperature`].
    #[must_use]
    pub fn has_temperature(&self) -> bool {
        matches!(
            self,
            Self::GpxWaypoint | Self::GpxTrackPoint | Self::TrackPointV1
        )
    }

    /// Values of this kind implement [`Addressed`].
    #[must_use]
    pub fn has_address(&self) -> bool {
        matches!(self, Self::GpxWaypoint)
    }

    /// Values of this kind implement [`Depth`].
    #[must_use]
    pub fn has_depth(&self) -> bool {
        matches!(
            self,
            Self::GpxWaypoint | Self::GpxTrackPoint | Self::TrackPointV1
        )
    }

    /// Values of this kind implement [`Categorized`].
    #[must_use]
    pub fn is_categorized(&self) -> bool {
        matches!(self, Self::GpxWaypoint)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of decoding one fragment: a typed extension or the raw fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedValue {
    Fragment(Fragment),
    GpxWaypoint(gpx_v3::WaypointExtension),
    GpxRoutePoint(gpx_v3::RoutePointExtension),
    GpxTrackPoint(gpx_v3::TrackPointExtension),
    TrackPointV1(track_point_v1::TrackPointExtension),
    CreationTime(creation_time::CreationTimeExtension),
}

impl DecodedValue {
    /// Exact runtime type of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Fragment(_) => ValueKind::Fragment,
            Self::GpxWaypoint(_) => ValueKind::GpxWaypoint,
            Self::GpxRoutePoint(_) => ValueKind::GpxRoutePoint,
            Self::GpxTrackPoint(_) => ValueKind::GpxTrackPoint,
            Self::TrackPointV1(_) => ValueKind::TrackPointV1,
            Self::CreationTime(_) => ValueKind::CreationTime,
        }
    }

    /// View as a Garmin extension.
    #[must_use]
    pub fn as_garmin(&self) -> Option<&(dyn GarminExtension + 'static)> {
        match self {
            Self::Fragment(_) => None,
            Self::GpxWaypoint(v) => Some(v),
            Self::GpxRoutePoint(v) => Some(v),
            Self::GpxTrackPoint(v) => Some(v),
            Self::TrackPointV1(v) => Some(v),
            Self::CreationTime(v) => Some(v),
        }
    }

    /// View as a temperature reading.
    #[must_use]
    pub fn as_temperature(&self) -> Option<&(dyn Temperature + 'static)> {
        match self {
            Self::GpxWaypoint(v) => Some(v),
            Self::GpxTrackPoint(v) => Some(v),
            Self::TrackPointV1(v) => Some(v),
            _ => None,
        }
    }

    /// View as an address carrier.
    #[must_use]
    pub fn as_addressed(&self) -> Option<&(dyn Addressed + 'static)> {
        match self {
            Self::GpxWaypoint(v) => Some(v),
            _ => None,
        }
    }

    /// View as a depth reading.
    #[must_use]
    pub fn as_depth(&self) -> Option<&(dyn Depth + 'static)> {
        match self {
            Self::GpxWaypoint(v) => Some(v),
            Self::GpxTrackPoint(v) => Some(v),
            Self::TrackPointV1(v) => Some(v),
            _ => None,
        }
    }

    /// View as a categorized model.
    #[must_use]
    pub fn as_categorized(&self) -> Option<&(dyn Categorized + 'static)> {
        match self {
            Self::GpxWaypoint(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from_extension {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for DecodedValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_extension! {
    Fragment => Fragment,
    GpxWaypoint => gpx_v3::WaypointExtension,
    GpxRoutePoint => gpx_v3::RoutePointExtension,
    GpxTrackPoint => gpx_v3::TrackPointExtension,
    TrackPointV1 => track_point_v1::TrackPointExtension,
    CreationTime => creation_time::CreationTimeExtension,
}

/// A type that can be looked up in an `ExtensionIndex`.
///
/// Concrete types match exactly one [`ValueKind`]. Capability trait objects
/// (`dyn Temperature`, ...) have no exact kind and only match in
/// polymorphic queries, as does [`DecodedValue`] itself, which accepts every
/// kind.
pub trait ExtensionQuery {
    /// The kind whose values are exactly of this type.
    fn exact_kind() -> Option<ValueKind>;

    /// Whether values of `kind` can be viewed as this type.
    fn is_assignable_from(kind: ValueKind) -> bool;

    /// View a value as this type.
    fn extract(value: &DecodedValue) -> Option<&Self>;
}

macro_rules! impl_exact_query {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl ExtensionQuery for $ty {
                fn exact_kind() -> Option<ValueKind> {
                    Some(ValueKind::$variant)
                }

                fn is_assignable_from(kind: ValueKind) -> bool {
                    kind == ValueKind::$variant
                }

                fn extract(value: &DecodedValue) -> Option<&Self> {
                    match value {
                        DecodedValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_exact_query! {
    Fragment => Fragment,
    GpxWaypoint => gpx_v3::WaypointExtension,
    GpxRoutePoint => gpx_v3::RoutePointExtension,
    GpxTrackPoint => gpx_v3::TrackPointExtension,
    TrackPointV1 => track_point_v1::TrackPointExtension,
    CreationTime => creation_time::CreationTimeExtension,
}

impl ExtensionQuery for DecodedValue {
    fn exact_kind() -> Option<ValueKind> {
        None
    }

    fn is_assignable_from(_kind: ValueKind) -> bool {
        true
    }

    fn extract(value: &DecodedValue) -> Option<&Self> {
        Some(value)
    }
}

impl ExtensionQuery for dyn GarminExtension {
    fn exact_kind() -> Option<ValueKind> {
        None
    }

    fn is_assignable_from(kind: ValueKind) -> bool {
        kind.is_garmin()
    }

    fn extract(value: &DecodedValue) -> Option<&Self> {
        value.as_garmin()
    }
}

impl ExtensionQuery for dyn Temperature {
    fn exact_kind() -> Option<ValueKind> {
        None
    }

    fn is_assignable_from(kind: ValueKind) -> bool {
        kind.has_temperature()
    }

    fn extract(value: &DecodedValue) -> Option<&Self> {
        value.as_temperature()
    }
}

impl ExtensionQuery for dyn Addressed {
    fn exact_kind() -> Option<ValueKind> {
        None
    }

    fn is_assignable_from(kind: ValueKind) -> bool {
        kind.has_address()
    }

    fn extract(value: &DecodedValue) -> Option<&Self> {
        value.as_addressed()
    }
}

impl ExtensionQuery for dyn Depth {
    fn exact_kind() -> Option<ValueKind> {
        None
    }

    fn is_assignable_from(kind: ValueKind) -> bool {
        kind.has_depth()
    }

    fn extract(value: &DecodedValue) -> Option<&Self> {
        value.as_depth()
    }
}

impl ExtensionQuery for dyn Categorized {
    fn exact_kind() -> Option<ValueKind> {
        None
    }

    fn is_assignable_from(kind: ValueKind) -> bool {
        kind.is_categorized()
    }

    fn extract(value: &DecodedValue) -> Option<&Self> {
        value.as_categorized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<DecodedValue> {
        vec![
            Fragment::new(None, "raw").into(),
            gpx_v3::WaypointExtension::default().into(),
            gpx_v3::RoutePointExtension::default().into(),
            gpx_v3::TrackPointExtension::default().into(),
            track_point_v1::TrackPointExtension::default().into(),
        ]
    }

    #[test]
    fn test_kind_flags_agree_with_views() {
        for value in samples() {
            let kind = value.kind();
            assert_eq!(kind.is_garmin(), value.as_garmin().is_some(), "{kind}");
            assert_eq!(kind.has_temperature(), value.as_temperature().is_some(), "{kind}");
            assert_eq!(kind.has_address(), value.as_addressed().is_some(), "{kind}");
            assert_eq!(kind.has_depth(), value.as_depth().is_some(), "{kind}");
            assert_eq!(kind.is_categorized(), value.as_categorized().is_some(), "{kind}");
        }
    }

    #[test]
    fn test_exact_query_extracts_only_own_variant() {
        let values = samples();
        let waypoints: Vec<_> = values
            .iter()
            .filter_map(<gpx_v3::WaypointExtension as ExtensionQuery>::extract)
            .collect();
        assert_eq!(waypoints.len(), 1);
    }

    #[test]
    fn test_capabilities_have_no_exact_kind() {
        assert_eq!(<dyn Temperature as ExtensionQuery>::exact_kind(), None);
        assert_eq!(<dyn GarminExtension as ExtensionQuery>::exact_kind(), None);
        assert_eq!(<DecodedValue as ExtensionQuery>::exact_kind(), None);
        assert_eq!(
            <Fragment as ExtensionQuery>::exact_kind(),
            Some(ValueKind::Fragment)
        );
    }

    #[test]
    fn test_fragment_is_not_garmin() {
        assert!(!<dyn GarminExtension as ExtensionQuery>::is_assignable_from(ValueKind::Fragment));
        assert!(<DecodedValue as ExtensionQuery>::is_assignable_from(ValueKind::Fragment));
    }

    #[test]
    fn test_value_kind_display() {
        assert_eq!(ValueKind::CreationTime.to_string(), "CreationTime");
    }
}
