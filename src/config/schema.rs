//! Configuration schema definitions

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Project metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "dist".to_string()
}

/// External tool locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Path to the rollup binary, relative to the project root
    #[serde(default = "default_rollup_bin")]
    pub rollup: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            rollup: default_rollup_bin(),
        }
    }
}

fn default_rollup_bin() -> String {
    "node_modules/.bin/rollup".to_string()
}

/// Module format handed to rollup's `--format`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Amd,
    Cjs,
    #[default]
    Esm,
    Iife,
    Umd,
    System,
}

impl Format {
    /// The token emitted after `--format`
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Amd => "amd",
            Format::Cjs => "cjs",
            Format::Esm => "esm",
            Format::Iife => "iife",
            Format::Umd => "umd",
            Format::System => "system",
        }
    }
}

/// Sourcemap mode
///
/// `True` declares a `.js.map` output next to the bundle; `Inline` embeds
/// the map in the bundle; `False` disables sourcemaps entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcemapMode {
    #[default]
    Inline,
    True,
    False,
}

impl SourcemapMode {
    /// The token emitted after `--sourcemap`
    pub fn as_str(&self) -> &'static str {
        match self {
            SourcemapMode::Inline => "inline",
            SourcemapMode::True => "true",
            SourcemapMode::False => "false",
        }
    }
}

/// One declarative bundle: which entry points to bundle and how.
///
/// Exactly one of `entry_point`/`entry_points` must be set; the planner
/// rejects specs that set both or neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleSpec {
    /// Bundle name, used as the default output/chunk name
    pub name: String,

    /// Single entry point (the bundle name becomes the chunk name)
    #[serde(default)]
    pub entry_point: Option<String>,

    /// Entry-point mapping: source label -> output chunk name.
    /// Declaration order is preserved and drives argument ordering.
    #[serde(default)]
    pub entry_points: Option<IndexMap<String, String>>,

    /// Additional source files/patterns declared as action inputs
    #[serde(default)]
    pub srcs: Vec<String>,

    /// npm package dependencies handed to the linker
    #[serde(default)]
    pub deps: Vec<String>,

    /// Module format (default: esm)
    #[serde(default)]
    pub format: Format,

    /// Sourcemap mode (default: inline)
    #[serde(default)]
    pub sourcemap: SourcemapMode,

    /// External module id -> global variable name, in declaration order
    #[serde(default)]
    pub globals: IndexMap<String, String>,

    /// Directory-output mode (code splitting); required for multiple
    /// entry points
    #[serde(default)]
    pub output_dir: bool,

    /// Rollup config template; falls back to the built-in template
    #[serde(default)]
    pub config_file: Option<PathBuf>,
}
