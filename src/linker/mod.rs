//! Module-resolution linker
//!
//! Contributes an opaque block of extra argument tokens and extra input
//! files to a bundle action. The planner injects the block between
//! `--format` and `--config` without interpreting it.

use std::path::PathBuf;

use crate::config::BundleSpec;

/// What a linker adds to one bundle action
#[derive(Debug, Clone, Default)]
pub struct LinkerContribution {
    /// Extra argument tokens, emitted verbatim
    pub args: Vec<String>,

    /// Extra declared input files/directories
    pub inputs: Vec<PathBuf>,
}

/// Contributes module-resolution arguments and inputs to bundle actions
pub trait Linker {
    fn contribute(&self, spec: &BundleSpec) -> LinkerContribution;
}

/// Linker for npm packages installed under `node_modules`.
///
/// When a bundle declares `deps`, rollup needs the node-resolve plugin to
/// follow bare import specifiers into `node_modules`; each declared
/// package directory becomes an action input.
pub struct NodeModulesLinker;

impl Linker for NodeModulesLinker {
    fn contribute(&self, spec: &BundleSpec) -> LinkerContribution {
        if spec.deps.is_empty() {
            return LinkerContribution::default();
        }

        LinkerContribution {
            args: vec!["--plugin".to_string(), "node-resolve".to_string()],
            inputs: spec
                .deps
                .iter()
                .map(|dep| PathBuf::from("node_modules").join(dep))
                .collect(),
        }
    }
}
