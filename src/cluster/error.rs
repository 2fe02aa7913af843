//! Error types for cluster resource listing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while listing namespaces or pods.
#[derive(Debug, Error)]
pub enum ClusterError {
    /// The lister program could not be started at all.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The lister program ran but reported failure.
    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("failed to read inventory file {}: {source}", path.display())]
    InventoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid inventory file {}: {source}", path.display())]
    InventoryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Pods were requested for a namespace the lister does not know.
    #[error("namespace '{0}' not found")]
    UnknownNamespace(String),
}
