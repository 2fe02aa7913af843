//! Transfer configuration produced by the wizard
//!
//! These types are the hand-off boundary to the transfer engine. The wizard
//! only guarantees that every field was confirmed non-empty; validating the
//! port or URI is left to the consumer.

use serde::{Deserialize, Serialize};

/// Top-level branch of the wizard, fixed once chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferMode {
    /// Copy from one pod to another
    #[serde(rename = "pod2pod")]
    PodToPod,
    /// Copy from a remote URI into a pod
    #[serde(rename = "pod2remote")]
    PodToRemote,
}

impl TransferMode {
    /// All modes in the order they are offered
    pub const ALL: [TransferMode; 2] = [TransferMode::PodToPod, TransferMode::PodToRemote];

    /// Short label shown in the mode list and used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            TransferMode::PodToPod => "pod2pod",
            TransferMode::PodToRemote => "pod2remote",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl std::fmt::Display for TransferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where the data comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransferSource {
    Pod { namespace: String, pod: String },
    Remote { uri: String },
}

/// Destination pod and port. Present for every mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodTarget {
    pub namespace: String,
    pub pod: String,
    pub port: String,
}

/// Fully populated configuration handed to the transfer engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfig {
    pub mode: TransferMode,
    pub source: TransferSource,
    pub destination: PodTarget,
}

impl TransferConfig {
    pub fn namespace_from(&self) -> Option<&str> {
        match &self.source {
            TransferSource::Pod { namespace, .. } => Some(namespace),
            TransferSource::Remote { .. } => None,
        }
    }

    pub fn pod_from(&self) -> Option<&str> {
        match &self.source {
            TransferSource::Pod { pod, .. } => Some(pod),
            TransferSource::Remote { .. } => None,
        }
    }

    pub fn remote_uri(&self) -> Option<&str> {
        match &self.source {
            TransferSource::Remote { uri } => Some(uri),
            TransferSource::Pod { .. } => None,
        }
    }

    pub fn namespace_to(&self) -> &str {
        &self.destination.namespace
    }

    pub fn pod_to(&self) -> &str {
        &self.destination.pod
    }

    pub fn port_to(&self) -> &str {
        &self.destination.port
    }
}
