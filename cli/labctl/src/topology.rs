//! Topology file loading.
//!
//! Files ending in `.json` are parsed as JSON; everything else as YAML.

use std::path::Path;

use anyhow::{Context, Result};
use labwire_links::LinksDocument;
use tracing::debug;

/// Default topology file, relative to the working directory.
pub const DEFAULT_TOPOLOGY_FILE: &str = "topology.yml";

/// Parse the link section of a topology from its text.
pub fn links_from_str(contents: &str, json: bool) -> Result<LinksDocument> {
    if json {
        serde_json::from_str(contents).context("invalid topology JSON")
    } else {
        serde_yaml::from_str(contents).context("invalid topology YAML")
    }
}

/// Load the link section of a topology file.
pub fn load_links(path: &Path) -> Result<LinksDocument> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read topology: {}", path.display()))?;

    let json = path.extension().and_then(|s| s.to_str()) == Some("json");
    let doc = links_from_str(&contents, json)
        .with_context(|| format!("failed to parse topology: {}", path.display()))?;

    debug!(path = %path.display(), links = doc.len(), "loaded topology");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_yaml_topology() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(
            file,
            r#"
name: demo
topology:
  links:
    - endpoints: ["srl1:e1-1", "srl2:e1-1"]
    - type: mgmt-net
      host-interface: srl1_e1-5
      endpoint: {{node: srl1, interface: e1-5}}
"#
        )
        .unwrap();

        let doc = load_links(file.path()).unwrap();
        assert_eq!(doc.len(), 2);
        assert!(doc.decode().is_ok());
    }

    #[test]
    fn load_json_topology() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"links": [{{"endpoints": ["srl1:e1-1", "srl2:e1-1"]}}]}}"#
        )
        .unwrap();

        let doc = load_links(file.path()).unwrap();
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_links(Path::new("/nonexistent/topology.yml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/topology.yml"));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(links_from_str("links: [", false).is_err());
    }
}
