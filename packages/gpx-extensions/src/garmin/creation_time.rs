//! Garmin creation time extension, version 1 (`wptx1`).
//!
//! Records when a waypoint or photo was created.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::Serialize;

use super::{expect_element, require_child, GarminExtension};
use crate::config::GARMIN_CREATION_TIME_V1_NAMESPACE;
use crate::error::DecodeError;
use crate::fragment::Fragment;

/// Creation timestamp of the host record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationTimeExtension {
    pub creation_time: DateTime<FixedOffset>,
}

impl CreationTimeExtension {
    /// Element name in the `wptx1` namespace.
    pub const ELEMENT: &'static str = "CreationTimeExtension";

    /// Decode a `<wptx1:CreationTimeExtension>` fragment.
    ///
    /// `CreationTime` is required. It is an `xsd:dateTime`, so the offset is
    /// optional; a local time without one is read as UTC.
    pub fn decode(fragment: &Fragment) -> Result<Self, DecodeError> {
        expect_element(fragment, GARMIN_CREATION_TIME_V1_NAMESPACE, Self::ELEMENT)?;
        let raw: String = require_child(fragment, "CreationTime")?;
        let creation_time = parse_date_time(&raw)?;
        Ok(Self { creation_time })
    }
}

fn parse_date_time(raw: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    DateTime::parse_from_rfc3339(raw).or_else(|err| {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc().into())
            .map_err(|_| DecodeError::invalid_value("CreationTime", raw, err))
    })
}

impl GarminExtension for CreationTimeExtension {
    fn namespace(&self) -> &'static str {
        GARMIN_CREATION_TIME_V1_NAMESPACE
    }

    fn element_name(&self) -> &'static str {
        Self::ELEMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn wptx1(inner: &str) -> Fragment {
        Fragment::parse(&format!(
            r#"<wptx1:CreationTimeExtension xmlns:wptx1="{GARMIN_CREATION_TIME_V1_NAMESPACE}">{inner}</wptx1:CreationTimeExtension>"#
        ))
        .unwrap()
    }

    #[test]
    fn test_decode_creation_time() {
        let ext = CreationTimeExtension::decode(&wptx1(
            "<wptx1:CreationTime>2012-06-07T11:43:33Z</wptx1:CreationTime>",
        ))
        .unwrap();
        assert_eq!(ext.creation_time.year(), 2012);
        assert_eq!(ext.creation_time.month(), 6);
    }

    #[test]
    fn test_decode_creation_time_without_offset() {
        let ext = CreationTimeExtension::decode(&wptx1(
            "<wptx1:CreationTime>2012-06-07T11:43:33</wptx1:CreationTime>",
        ))
        .unwrap();
        assert_eq!(ext.creation_time.year(), 2012);
        assert_eq!(ext.creation_time.hour(), 11);
        assert_eq!(ext.creation_time.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_decode_creation_time_keeps_offset() {
        let ext = CreationTimeExtension::decode(&wptx1(
            "<wptx1:CreationTime>2012-06-07T11:43:33.250+02:00</wptx1:CreationTime>",
        ))
        .unwrap();
        assert_eq!(ext.creation_time.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(ext.creation_time.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_missing_creation_time() {
        let err = CreationTimeExtension::decode(&wptx1("")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::missing("CreationTime", "CreationTimeExtension")
        );
    }

    #[test]
    fn test_invalid_creation_time() {
        let err =
            CreationTimeExtension::decode(&wptx1("<wptx1:CreationTime>yesterday</wptx1:CreationTime>"))
                .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidValue { .. }));
    }
}
