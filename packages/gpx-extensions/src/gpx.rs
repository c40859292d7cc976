//! Reading `<extensions>` blocks out of GPX documents.
//!
//! Only the records that can carry extensions are visited: metadata,
//! waypoints, routes and route points, tracks, track segments and track
//! points. Everything else in the document is ignored.

use std::collections::HashMap;

use roxmltree::{Document, Node};
use serde::Serialize;

use crate::config::GPX_NAMESPACE;
use crate::error::{ExtensionError, Result};
use crate::fragment::Extensions;
use crate::xml::{element_children, find_child, get_namespace, get_tag_name, get_text};

/// Kind of GPX record that owns an `<extensions>` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    Metadata,
    Waypoint,
    Route,
    RoutePoint,
    Track,
    TrackSegment,
    TrackPoint,
}

impl HostKind {
    /// Map a GPX tag name to a host kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "metadata" => Some(Self::Metadata),
            "wpt" => Some(Self::Waypoint),
            "rte" => Some(Self::Route),
            "rtept" => Some(Self::RoutePoint),
            "trk" => Some(Self::Track),
            "trkseg" => Some(Self::TrackSegment),
            "trkpt" => Some(Self::TrackPoint),
            _ => None,
        }
    }
}

/// A GPX record together with its extension fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionHost {
    /// Kind of record.
    pub kind: HostKind,
    /// Position in the document, e.g. `trk[0]/trkseg[1]/trkpt[3]`.
    pub path: String,
    /// Value of the record's `<name>` child, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fragments of the `<extensions>` block in document order.
    pub extensions: Extensions,
}

/// Parse a GPX document and collect every record that has extensions.
///
/// # Errors
/// Returns `XmlParse` for malformed XML and `NotGpx` when the root element
/// is not `<gpx>`.
///
/// # Examples
/// ```
/// use gpx_extensions::gpx::{read_extension_hosts, HostKind};
///
/// let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1" version="1.1">
///   <wpt lat="52.4" lon="10.8"><name>Home</name><extensions><color>red</color></extensions></wpt>
///   <wpt lat="52.5" lon="10.9"/>
/// </gpx>"#;
/// let hosts = read_extension_hosts(xml).unwrap();
/// assert_eq!(hosts.len(), 1);
/// assert_eq!(hosts[0].kind, HostKind::Waypoint);
/// assert_eq!(hosts[0].path, "wpt[0]");
/// assert_eq!(hosts[0].name.as_deref(), Some("Home"));
/// ```
pub fn read_extension_hosts(xml: &str) -> Result<Vec<ExtensionHost>> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let tag = get_tag_name(root);
    if tag != "gpx" {
        return Err(ExtensionError::NotGpx(tag.to_string()));
    }
    if get_namespace(root) != Some(GPX_NAMESPACE) {
        tracing::warn!(
            namespace = get_namespace(root).unwrap_or_default(),
            "GPX root is not in the GPX 1.1 namespace, reading anyway"
        );
    }

    let mut hosts = Vec::new();
    collect_hosts(root, "", &mut hosts);
    tracing::debug!(hosts = hosts.len(), "Collected extension hosts");
    Ok(hosts)
}

fn collect_hosts(node: Node<'_, '_>, prefix: &str, hosts: &mut Vec<ExtensionHost>) {
    let mut counters: HashMap<&str, usize> = HashMap::new();

    for child in element_children(node) {
        let tag = get_tag_name(child);
        let Some(kind) = HostKind::from_tag(tag) else {
            continue;
        };

        let counter = counters.entry(tag).or_default();
        let path = if prefix.is_empty() {
            format!("{tag}[{counter}]")
        } else {
            format!("{prefix}/{tag}[{counter}]")
        };
        *counter += 1;

        if let Some(extensions) = find_child(child, "extensions") {
            hosts.push(ExtensionHost {
                kind,
                path: path.clone(),
                name: find_child(child, "name")
                    .map(get_text)
                    .filter(|name| !name.is_empty()),
                extensions: Extensions::from_node(extensions),
            });
        }

        collect_hosts(child, &path, hosts);
    }
}
