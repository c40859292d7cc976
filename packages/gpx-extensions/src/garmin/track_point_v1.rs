//! Garmin track point extension, version 1 (`gpxtpx`).
//!
//! Written by fitness devices for heart rate, cadence and temperature.

use serde::Serialize;

use super::{expect_element, parse_child, Depth, GarminExtension, Temperature};
use crate::config::GARMIN_TRACK_POINT_V1_NAMESPACE;
use crate::error::DecodeError;
use crate::fragment::Fragment;

/// Sensor readings at a track point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackPointExtension {
    /// Air temperature in degrees Celsius.
    pub air_temperature: Option<f64>,
    /// Water temperature in degrees Celsius.
    pub water_temperature: Option<f64>,
    /// Depth in meters.
    pub depth: Option<f64>,
    /// Heart rate in beats per minute.
    pub heart_rate: Option<u8>,
    /// Cadence in revolutions per minute.
    pub cadence: Option<u8>,
}

impl TrackPointExtension {
    /// Element name in the `gpxtpx` namespace.
    pub const ELEMENT: &'static str = "TrackPointExtension";

    /// Decode a `<gpxtpx:TrackPointExtension>` fragment.
    pub fn decode(fragment: &Fragment) -> Result<Self, DecodeError> {
        expect_element(fragment, GARMIN_TRACK_POINT_V1_NAMESPACE, Self::ELEMENT)?;
        Ok(Self {
            air_temperature: parse_child(fragment, "atemp")?,
            water_temperature: parse_child(fragment, "wtemp")?,
            depth: parse_child(fragment, "depth")?,
            heart_rate: parse_child(fragment, "hr")?,
            cadence: parse_child(fragment, "cad")?,
        })
    }
}

impl GarminExtension for TrackPointExtension {
    fn namespace(&self) -> &'static str {
        GARMIN_TRACK_POINT_V1_NAMESPACE
    }

    fn element_name(&self) -> &'static str {
        Self::ELEMENT
    }
}

impl Temperature for TrackPointExtension {
    /// Air temperature, falling back to water temperature.
    fn temperature(&self) -> Option<f64> {
        self.air_temperature.or(self.water_temperature)
    }
}

impl Depth for TrackPointExtension {
    fn depth(&self) -> Option<f64> {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpxtpx(inner: &str) -> Fragment {
        Fragment::parse(&format!(
            r#"<gpxtpx:TrackPointExtension xmlns:gpxtpx="{GARMIN_TRACK_POINT_V1_NAMESPACE}">{inner}</gpxtpx:TrackPointExtension>"#
        ))
        .unwrap()
    }

    #[test]
    fn test_decode_fitness_readings() {
        let ext = TrackPointExtension::decode(&gpxtpx(
            "<gpxtpx:atemp>21.0</gpxtpx:atemp><gpxtpx:hr>142</gpxtpx:hr><gpxtpx:cad>88</gpxtpx:cad>",
        ))
        .unwrap();

        assert_eq!(ext.heart_rate, Some(142));
        assert_eq!(ext.cadence, Some(88));
        assert_eq!(ext.temperature(), Some(21.0));
    }

    #[test]
    fn test_water_temperature_fallback() {
        let ext = TrackPointExtension::decode(&gpxtpx("<gpxtpx:wtemp>12.5</gpxtpx:wtemp>")).unwrap();
        assert_eq!(ext.temperature(), Some(12.5));
    }

    #[test]
    fn test_heart_rate_out_of_range() {
        let result = TrackPointExtension::decode(&gpxtpx("<gpxtpx:hr>300</gpxtpx:hr>"));
        assert!(matches!(result, Err(DecodeError::InvalidValue { .. })));
    }

    #[test]
    fn test_gpx_v3_element_is_rejected() {
        let fragment = Fragment::parse(
            r#"<TrackPointExtension xmlns="http://www.garmin.com/xmlschemas/GpxExtensions/v3"/>"#,
        )
        .unwrap();
        assert!(TrackPointExtension::decode(&fragment).is_err());
    }
}
