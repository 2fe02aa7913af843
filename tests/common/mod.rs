//! Shared test utilities and fixtures

#![allow(dead_code)]

use podferry::cli::events::{Key, WizardEvent};
use podferry::cli::wizard::{Wizard, WizardOutcome};
use podferry::cluster::{ClusterError, ResourceLister, StaticLister};

/// Small inventory with two populated namespaces and one empty one
///
/// Namespaces list in sorted order: `default`, `empty`, `staging`.
pub fn sample_lister() -> StaticLister {
    StaticLister::default()
        .with_namespace("default", ["api-0", "api-1", "worker-0"])
        .with_namespace("staging", ["db-0", "web-0"])
        .with_namespace("empty", Vec::<String>::new())
}

pub fn sample_wizard() -> Wizard {
    Wizard::start(Box::new(sample_lister()))
}

/// Lister whose every call fails
pub struct FailingLister;

impl ResourceLister for FailingLister {
    fn list_namespaces(&self) -> Result<Vec<String>, ClusterError> {
        Err(ClusterError::CommandFailed {
            command: "kubectl get namespaces -o name".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "connection refused".to_string(),
        })
    }

    fn list_pods(&self, namespace: &str) -> Result<Vec<String>, ClusterError> {
        Err(ClusterError::UnknownNamespace(namespace.to_string()))
    }
}

/// Feed keys in order, returning the first outcome produced
pub fn press(wizard: &mut Wizard, keys: &[Key]) -> Option<WizardOutcome> {
    let mut outcome = None;
    for key in keys {
        if let Some(o) = wizard.handle_input(WizardEvent::Key(*key)) {
            outcome.get_or_insert(o);
        }
    }
    outcome
}

/// Type `text` character by character
pub fn type_text(wizard: &mut Wizard, text: &str) -> Option<WizardOutcome> {
    let keys: Vec<Key> = text.chars().map(Key::Char).collect();
    press(wizard, &keys)
}
