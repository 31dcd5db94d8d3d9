//! Manifest and configuration files.
//!
//! A manifest lists parts and the relations between them. Relations are
//! replayed in file order, so the resulting categories and child order are
//! the same as issuing the calls by hand.

use bom_graph::{BomGraph, GraphConfig};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Directory holding the per-project configuration.
pub const CONFIG_DIR: &str = ".bom";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub parts: Vec<PartEntry>,
    #[serde(default)]
    pub relations: Vec<RelationEntry>,
}

#[derive(Debug, Deserialize)]
pub struct PartEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct RelationEntry {
    pub parent: String,
    pub child: String,
    #[serde(default)]
    pub mode: LinkMode,
}

/// Which graph operation a relation entry is replayed through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMode {
    #[default]
    Create,
    Attach,
}

impl Manifest {
    /// Reads a manifest from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read manifest {}: {}", path.display(), e))?;
        let manifest: Manifest = serde_json::from_str(&content)?;
        debug!(
            "Loaded manifest with {} parts and {} relations",
            manifest.parts.len(),
            manifest.relations.len()
        );
        Ok(manifest)
    }

    /// Replays the manifest into a new graph.
    pub fn build(&self, config: GraphConfig) -> bom_core::Result<BomGraph> {
        let mut graph = BomGraph::with_config(config);

        for part in &self.parts {
            graph.create_part(part.id.as_str(), part.name.as_str(), part.description.as_str())?;
        }

        for relation in &self.relations {
            match relation.mode {
                LinkMode::Create => graph.create_relation(&relation.parent, &relation.child)?,
                LinkMode::Attach => graph.attach_existing(&relation.parent, &relation.child)?,
            };
        }

        info!(
            "Built graph: {} parts, {} relations",
            graph.len(),
            graph.relation_count()
        );
        Ok(graph)
    }
}

/// Default configuration path for a manifest.
pub fn default_config_path(manifest: &Path) -> PathBuf {
    manifest
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Loads the graph configuration.
///
/// An explicit path must exist; the default location is optional and falls
/// back to the built-in defaults.
pub fn load_config(explicit: Option<&Path>, manifest: &Path) -> Result<GraphConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = default_config_path(manifest);
            if !path.exists() {
                return Ok(GraphConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
    let config: GraphConfig = serde_json::from_str(&content)?;
    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bom_core::{BomError, Category};
    use bom_graph::Traversal;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "parts": [
            {"id": "bike", "name": "Bicycle"},
            {"id": "wheel", "name": "Wheel", "description": "700c"},
            {"id": "spoke", "name": "Spoke"},
            {"id": "bell"}
        ],
        "relations": [
            {"parent": "wheel", "child": "spoke"},
            {"parent": "bike", "child": "wheel", "mode": "attach"}
        ]
    }"#;

    #[test]
    fn test_build_from_manifest() {
        let manifest: Manifest = serde_json::from_str(SAMPLE).unwrap();
        let graph = manifest.build(GraphConfig::default()).unwrap();

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.part("bike").unwrap().category, Category::TopLevelAssembly);
        assert_eq!(graph.part("wheel").unwrap().category, Category::SubAssembly);
        assert_eq!(graph.part("spoke").unwrap().category, Category::Component);
        assert_eq!(graph.part("bell").unwrap().category, Category::Orphan);
        assert_eq!(graph.part("wheel").unwrap().description, "700c");
    }

    #[test]
    fn test_build_stops_at_first_error() {
        let manifest: Manifest = serde_json::from_str(
            r#"{"parts": [{"id": "a"}], "relations": [{"parent": "a", "child": "b"}]}"#,
        )
        .unwrap();

        let err = manifest.build(GraphConfig::default()).unwrap_err();
        assert_eq!(err, BomError::InvalidPartId("b".to_string()));
    }

    #[test]
    fn test_load_config_default_and_explicit() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("bom.json");

        let config = load_config(None, &manifest).unwrap();
        assert_eq!(config, GraphConfig::default());

        let path = default_config_path(&manifest);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"traversal": "distinct", "reject_cycles": true}"#).unwrap();

        let config = load_config(None, &manifest).unwrap();
        assert_eq!(config.traversal, Traversal::Distinct);
        assert!(config.reject_cycles);

        let missing = dir.path().join("nope.json");
        assert!(load_config(Some(&missing), &manifest).is_err());
    }

    #[test]
    fn test_load_manifest_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bom.json");
        fs::write(&path, SAMPLE).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.parts.len(), 4);
        assert_eq!(manifest.relations[1].mode, LinkMode::Attach);
    }
}
