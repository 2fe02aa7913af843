//! Cluster resource listing
//!
//! The wizard never talks to the cluster directly; it asks a
//! [`ResourceLister`] for namespace and pod names when a list step is entered.

mod error;
mod inventory;
mod kubectl;

pub use error::ClusterError;
pub use inventory::StaticLister;
pub use kubectl::{parse_resource_names, KubectlLister};

/// Source of selectable namespaces and pods
pub trait ResourceLister {
    /// Names of all namespaces visible to the caller
    fn list_namespaces(&self) -> Result<Vec<String>, ClusterError>;

    /// Names of the pods in `namespace`
    fn list_pods(&self, namespace: &str) -> Result<Vec<String>, ClusterError>;
}
