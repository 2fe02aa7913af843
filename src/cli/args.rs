//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// podferry - Interactively configure a pod-to-pod or pod-to-remote transfer
#[derive(Parser, Debug)]
#[command(name = "podferry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON inventory mapping each namespace to its pods.
    /// When given, namespaces and pods are read from this file instead of the cluster.
    #[arg(long)]
    pub inventory: Option<PathBuf>,

    /// kubectl binary used to list namespaces and pods
    #[arg(long, default_value = "kubectl")]
    pub kubectl: String,

    /// kubeconfig context to list from (defaults to the current context)
    #[arg(long)]
    pub context: Option<String>,

    /// Write the resulting transfer configuration to this JSON file
    #[arg(short, long, value_parser = validate_json_extension)]
    pub output: Option<PathBuf>,

    /// Print the resulting configuration as JSON instead of a summary table
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Overwrite an existing output file without asking
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Disable colors in the wizard and the summary
    #[arg(long, default_value = "false")]
    pub no_color: bool,
}

/// Validator for the --output path: must end in .json
pub fn validate_json_extension(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(path),
        _ => Err(format!("'{}' must have a .json extension", s)),
    }
}
