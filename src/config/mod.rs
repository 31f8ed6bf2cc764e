//! Configuration handling for rollwrap
//!
//! Parses and manages rollwrap.toml configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::planner;

mod schema;

pub use schema::*;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project metadata
    pub project: ProjectConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// External tool locations
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Declared bundles
    #[serde(default, rename = "bundle")]
    pub bundles: Vec<BundleSpec>,

    /// Root directory (computed from config file location)
    #[serde(skip)]
    pub root: PathBuf,
}

impl Config {
    /// Load configuration from a file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let canonical_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let content = fs::read_to_string(&canonical_path)
            .with_context(|| format!("Failed to read config file: {}", canonical_path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| "Failed to parse rollwrap.toml")?;

        // Set root directory to the directory containing the config file
        config.root = canonical_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Structural checks only: a malformed bundle spec must fail here,
    /// before any outputs are declared or processes launched. Entry-point
    /// file resolution happens later, in the planner.
    fn validate(&self) -> Result<()> {
        if self.bundles.is_empty() {
            return Err(ConfigError::NoBundles.into());
        }

        for bundle in &self.bundles {
            planner::desugar_entry_point_names(
                &bundle.name,
                bundle.entry_point.as_deref(),
                bundle.entry_points.as_ref(),
            )?;
        }

        Ok(())
    }

    /// Get the absolute output directory path
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output.dir)
    }

    /// Get the rollup binary path, relative to the project root
    pub fn rollup_bin(&self) -> PathBuf {
        PathBuf::from(&self.tools.rollup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Config {
        let mut config: Config = toml::from_str(content).unwrap();
        config.root = PathBuf::from(".");
        config
    }

    #[test]
    fn test_defaults() {
        let config = parse(
            r#"
            [project]
            name = "demo"

            [[bundle]]
            name = "app"
            entry_point = "src/main.js"
            "#,
        );

        assert_eq!(config.output.dir, "dist");
        assert_eq!(config.tools.rollup, "node_modules/.bin/rollup");

        let bundle = &config.bundles[0];
        assert_eq!(bundle.format, Format::Esm);
        assert_eq!(bundle.sourcemap, SourcemapMode::Inline);
        assert!(!bundle.output_dir);
        assert!(bundle.globals.is_empty());
    }

    #[test]
    fn test_globals_preserve_declaration_order() {
        let config = parse(
            r#"
            [project]
            name = "demo"

            [[bundle]]
            name = "app"
            entry_point = "src/main.js"

            [bundle.globals]
            zlib = "Z"
            angular = "ng"
            "#,
        );

        let keys: Vec<&String> = config.bundles[0].globals.keys().collect();
        assert_eq!(keys, ["zlib", "angular"]);
    }

    #[test]
    fn test_entry_points_preserve_declaration_order() {
        let config = parse(
            r#"
            [project]
            name = "demo"

            [[bundle]]
            name = "app"
            output_dir = true

            [bundle.entry_points]
            "src/z.js" = "chunkZ"
            "src/a.js" = "chunkA"
            "#,
        );

        let entries = config.bundles[0].entry_points.as_ref().unwrap();
        let names: Vec<&String> = entries.values().collect();
        assert_eq!(names, ["chunkZ", "chunkA"]);
    }

    #[test]
    fn test_sourcemap_modes_parse() {
        for (text, mode) in [
            ("\"inline\"", SourcemapMode::Inline),
            ("\"true\"", SourcemapMode::True),
            ("\"false\"", SourcemapMode::False),
        ] {
            let config = parse(&format!(
                r#"
                [project]
                name = "demo"

                [[bundle]]
                name = "app"
                entry_point = "src/main.js"
                sourcemap = {text}
                "#
            ));
            assert_eq!(config.bundles[0].sourcemap, mode);
        }
    }
}
