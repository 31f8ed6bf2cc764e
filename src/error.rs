//! Error types for bundle planning and execution.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Structural problems in a bundle spec, raised at planning time.
///
/// Planning fails fast: no outputs are declared and no process is launched
/// once one of these is hit.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bundle '{0}': exactly one of entry_point/entry_points is required")]
    EntryPointRequired(String),

    #[error("bundle '{bundle}': entry point '{label}' must resolve to exactly one file (found {count})")]
    EntryPointResolution {
        bundle: String,
        label: String,
        count: usize,
    },

    #[error("bundle '{0}': multiple entry points require output_dir")]
    OutputDirRequired(String),

    #[error("config not found: {0}")]
    NotFound(PathBuf),

    #[error("no bundles defined in config")]
    NoBundles,

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The external bundler process failed.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("'{tool}' exited with {status}")]
    Failed { tool: String, status: ExitStatus },

    #[error("failed to launch '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
}
