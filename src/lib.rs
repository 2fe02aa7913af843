//! podferry: Transfer Configuration Library
//!
//! An interactive wizard that collects a pod-to-pod or pod-to-remote
//! transfer configuration, plus the resource listers that feed it.

pub mod cli;
pub mod cluster;
pub mod report;
pub mod transfer;
pub mod utils;
