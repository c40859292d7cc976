//! Command-line interface for inspecting GPX extensions.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::{schema_location, validate_namespace};
use crate::error::{ExtensionError, Result};
use crate::garmin::GarminExtension;
use crate::gpx::{read_extension_hosts, ExtensionHost, HostKind};
use crate::registry::{
    service_from_context, DecodedValue, DecoderContext, DecodingService, ExtensionIndex,
};

/// GPX extensions - decode and inspect the extension data of GPX files.
#[derive(Parser)]
#[command(name = "gpx-extensions")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the decoded extensions of every record as YAML.
    Inspect {
        /// GPX file to read
        file: PathBuf,

        /// Do not decode, list raw fragments only
        #[arg(long)]
        raw: bool,

        /// Extension namespace to decode (repeatable, default: all supported)
        #[arg(short, long = "namespace", value_name = "URI")]
        namespaces: Vec<String>,
    },
}

/// Extensions of one record, grouped by kind.
#[derive(Debug, Serialize)]
pub struct HostReport<'a> {
    pub path: &'a str,
    pub kind: HostKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub extensions: BTreeMap<&'static str, Vec<&'a DecodedValue>>,
    /// Schema locations of the decoded extensions.
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub schemas: BTreeSet<&'static str>,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            file,
            raw,
            namespaces,
        } => inspect_command(&file, raw, namespaces),
    }
}

/// Execute the inspect command.
fn inspect_command(file: &Path, raw: bool, namespaces: Vec<String>) -> Result<()> {
    let xml = std::fs::read_to_string(file)?;
    let yaml = inspect(&xml, raw, namespaces)?;
    print!("{yaml}");
    Ok(())
}

/// Decode all extension blocks of a GPX document and render them as YAML.
///
/// # Errors
/// Fails for unreadable documents and for namespaces without decoders.
pub fn inspect(xml: &str, raw: bool, namespaces: Vec<String>) -> Result<String> {
    for namespace in &namespaces {
        validate_namespace(namespace)?;
    }
    let hosts = read_extension_hosts(xml)?;

    let service: Option<Box<dyn DecodingService>> = if raw {
        None
    } else if namespaces.is_empty() {
        service_from_context(&DecoderContext::default())
    } else {
        service_from_context(&DecoderContext::new(namespaces))
    };

    let indexes: Vec<ExtensionIndex> = hosts
        .iter()
        .map(|host| ExtensionIndex::build(&host.extensions, service.as_deref()))
        .collect();

    let reports: Vec<HostReport<'_>> = hosts
        .iter()
        .zip(&indexes)
        .map(|(host, index)| host_report(host, index))
        .collect();

    Ok(serde_yaml_ng::to_string(&reports)?)
}

fn host_report<'a>(host: &'a ExtensionHost, index: &'a ExtensionIndex) -> HostReport<'a> {
    let extensions = index
        .iter()
        .map(|(kind, values)| (kind.as_str(), values.iter().collect()))
        .collect();

    let schemas = index
        .find_all::<dyn GarminExtension>(true)
        .into_iter()
        .filter_map(|ext| schema_location(ext.namespace()))
        .collect();

    HostReport {
        path: &host.path,
        kind: host.kind,
        name: host.name.as_deref(),
        extensions,
        schemas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAYPOINT: &str = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1"
        xmlns:wptx1="http://www.garmin.com/xmlschemas/CreationTimeExtension/v1">
      <wpt lat="52.4" lon="10.8">
        <name>Bild</name>
        <extensions>
          <wptx1:CreationTimeExtension>
            <wptx1:CreationTime>2012-06-07T11:43:33Z</wptx1:CreationTime>
          </wptx1:CreationTimeExtension>
        </extensions>
      </wpt>
    </gpx>"#;

    #[test]
    fn test_inspect_decodes_by_default() {
        let yaml = inspect(WAYPOINT, false, Vec::new()).unwrap();

        assert!(yaml.contains("CreationTime:"));
        assert!(yaml.contains("creation_time:"));
        assert!(yaml.contains("name: Bild"));
    }

    #[test]
    fn test_inspect_lists_schema_locations() {
        let yaml = inspect(WAYPOINT, false, Vec::new()).unwrap();

        assert!(yaml.contains("schemas:"));
        assert!(yaml.contains(crate::config::GARMIN_CREATION_TIME_V1_SCHEMA_LOCATION));
    }

    #[test]
    fn test_inspect_raw() {
        let yaml = inspect(WAYPOINT, true, Vec::new()).unwrap();

        assert!(yaml.contains("Fragment:"));
        assert!(!yaml.contains("creation_time:"));
        assert!(!yaml.contains("schemas:"));
    }

    #[test]
    fn test_inspect_unsupported_namespace() {
        let err = inspect(WAYPOINT, false, vec!["urn:unknown".to_string()]).unwrap_err();
        assert!(matches!(err, ExtensionError::Decode(_)));
    }

    #[test]
    fn test_inspect_selected_namespace() {
        let namespaces = vec![crate::config::GARMIN_GPX_V3_NAMESPACE.to_string()];
        let yaml = inspect(WAYPOINT, false, namespaces).unwrap();
        assert!(yaml.contains("Fragment:"));
    }

    #[test]
    fn test_inspect_rejects_non_gpx() {
        assert!(inspect("<kml/>", false, Vec::new()).is_err());
    }
}
