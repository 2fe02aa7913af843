//! Fixed namespace/pod inventory, loaded from JSON or built in memory

use std::collections::BTreeMap;
use std::path::Path;

use super::{ClusterError, ResourceLister};

/// Lister over a fixed `namespace -> pods` map.
///
/// Inventory files are a JSON object mapping each namespace to its pods:
/// `{ "default": ["api-0", "api-1"], "staging": [] }`. Namespaces are
/// listed in sorted order; pods keep file order.
#[derive(Debug, Clone, Default)]
pub struct StaticLister {
    namespaces: BTreeMap<String, Vec<String>>,
}

impl StaticLister {
    pub fn new(namespaces: BTreeMap<String, Vec<String>>) -> Self {
        Self { namespaces }
    }

    /// Load an inventory JSON file
    pub fn from_file(path: &Path) -> Result<Self, ClusterError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| ClusterError::InventoryRead {
                path: path.to_path_buf(),
                source,
            })?;
        let namespaces =
            serde_json::from_str(&contents).map_err(|source| ClusterError::InventoryParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { namespaces })
    }

    pub fn with_namespace<I, S>(mut self, namespace: &str, pods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaces.insert(
            namespace.to_string(),
            pods.into_iter().map(Into::into).collect(),
        );
        self
    }
}

impl ResourceLister for StaticLister {
    fn list_namespaces(&self) -> Result<Vec<String>, ClusterError> {
        Ok(self.namespaces.keys().cloned().collect())
    }

    fn list_pods(&self, namespace: &str) -> Result<Vec<String>, ClusterError> {
        self.namespaces
            .get(namespace)
            .cloned()
            .ok_or_else(|| ClusterError::UnknownNamespace(namespace.to_string()))
    }
}
