//! Resource lister backed by the `kubectl` binary

use std::process::Command;

use super::{ClusterError, ResourceLister};

/// Lists namespaces and pods by shelling out to kubectl
#[derive(Debug, Clone)]
pub struct KubectlLister {
    program: String,
    context: Option<String>,
}

impl Default for KubectlLister {
    fn default() -> Self {
        Self::new("kubectl")
    }
}

impl KubectlLister {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            context: None,
        }
    }

    /// Pin every call to a kubeconfig context instead of the current one
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Full argument list for a `get` of `resource`, optionally namespaced
    pub fn get_args(&self, resource: &str, namespace: Option<&str>) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(context) = &self.context {
            args.push("--context".to_string());
            args.push(context.clone());
        }
        args.push("get".to_string());
        args.push(resource.to_string());
        if let Some(ns) = namespace {
            args.push("-n".to_string());
            args.push(ns.to_string());
        }
        args.push("-o".to_string());
        args.push("name".to_string());
        args
    }

    fn run(&self, args: &[String]) -> Result<String, ClusterError> {
        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| ClusterError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ClusterError::CommandFailed {
                command: format!("{} {}", self.program, args.join(" ")),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl ResourceLister for KubectlLister {
    fn list_namespaces(&self) -> Result<Vec<String>, ClusterError> {
        let stdout = self.run(&self.get_args("namespaces", None))?;
        Ok(parse_resource_names(&stdout, "namespace"))
    }

    fn list_pods(&self, namespace: &str) -> Result<Vec<String>, ClusterError> {
        let stdout = self.run(&self.get_args("pods", Some(namespace)))?;
        Ok(parse_resource_names(&stdout, "pod"))
    }
}

/// Parse `kubectl get <kind> -o name` output into bare names.
///
/// Lines look like `pod/api-0`; blank lines are skipped and the `kind/`
/// prefix is stripped when present.
pub fn parse_resource_names(output: &str, kind: &str) -> Vec<String> {
    let prefix = format!("{}/", kind);
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.strip_prefix(&prefix).unwrap_or(line).to_string())
        .collect()
}
