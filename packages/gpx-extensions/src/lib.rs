//! GPX extensions - typed access to the `<extensions>` content of GPX files.
//!
//! GPX records (waypoints, routes, tracks, ...) may carry an `<extensions>`
//! element with arbitrary child elements. This crate copies those children
//! into owned [`Fragment`]s, decodes the ones it recognizes into typed
//! models, and indexes the results by type so callers can ask for "all
//! waypoint extensions" or "anything with a temperature".
//!
//! # Example
//!
//! ```
//! use gpx_extensions::garmin::WaypointExtension;
//! use gpx_extensions::{create_extension_registry, ExtensionIndex, Fragment};
//!
//! let xml = r#"<gpxx:WaypointExtension xmlns:gpxx="http://www.garmin.com/xmlschemas/GpxExtensions/v3">
//!     <gpxx:Categories><gpxx:Category>JUNIT</gpxx:Category></gpxx:Categories>
//! </gpxx:WaypointExtension>"#;
//! let fragments = vec![Fragment::parse(xml).unwrap(), Fragment::new(None, "unknown")];
//!
//! let registry = create_extension_registry();
//! let index = ExtensionIndex::build(&fragments, Some(&registry));
//!
//! let waypoint = index.find_first::<WaypointExtension>(false).unwrap();
//! assert_eq!(waypoint.categories, vec!["JUNIT"]);
//! assert_eq!(index.find_all::<Fragment>(false).len(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespace constants and validation
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML utilities
//! - [`fragment`]: Owned XML fragments and extension blocks
//! - [`garmin`]: Garmin extension models and capability traits
//! - [`registry`]: Decoding services, the decoder adapter and the type index
//! - [`gpx`]: Extension blocks of GPX documents
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod fragment;
pub mod garmin;
pub mod gpx;
pub mod registry;
pub mod xml;

// Re-export commonly used items
pub use error::{DecodeError, ExtensionError, Result};
pub use fragment::{Extensions, Fragment};
pub use registry::{
    create_extension_registry, decode, find_extensions, find_extensions_with_context,
    find_first_extension, find_first_extension_with_context, DecodedValue, DecoderContext,
    DecoderRegistry, DecodingContext, DecodingService, ExtensionIndex, ExtensionQuery, ValueKind,
};
