//! Output planning
//!
//! Decides which output files a bundle action declares before the
//! bundler runs.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::SourcemapMode;
use crate::error::ConfigError;

use super::desugar_entry_point_names;

/// The declared outputs of one bundle action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OutputPlan {
    /// One bundle file, plus a `.js.map` next to it when the sourcemap
    /// mode is `true`
    SingleFile {
        file: PathBuf,
        map: Option<PathBuf>,
    },

    /// One output directory. Individual files inside it are produced by
    /// the bundler (code splitting) but are not pre-declared, since the
    /// chunk set is not knowable before the bundler runs.
    Directory { dir: PathBuf },
}

impl OutputPlan {
    /// All declared output paths, files before maps
    pub fn declared(&self) -> Vec<&Path> {
        match self {
            OutputPlan::SingleFile { file, map } => {
                let mut paths = vec![file.as_path()];
                if let Some(map) = map {
                    paths.push(map.as_path());
                }
                paths
            }
            OutputPlan::Directory { dir } => vec![dir.as_path()],
        }
    }

    /// The same plan with every path placed under `base`
    pub fn rebase(&self, base: &Path) -> OutputPlan {
        match self {
            OutputPlan::SingleFile { file, map } => OutputPlan::SingleFile {
                file: base.join(file),
                map: map.as_ref().map(|m| base.join(m)),
            },
            OutputPlan::Directory { dir } => OutputPlan::Directory {
                dir: base.join(dir),
            },
        }
    }
}

/// Compute the declared outputs for a bundle.
///
/// Directory mode declares exactly one directory named after the bundle.
/// Single-file mode declares `<chunk>.js` (and `<chunk>.js.map` when the
/// sourcemap mode is exactly `true`) and rejects specs with more than one
/// entry point. Paths are relative to the action root; callers rebase
/// them under the configured output directory.
pub fn plan_outputs(
    sourcemap: SourcemapMode,
    name: &str,
    entry_point: Option<&str>,
    entry_points: Option<&IndexMap<String, String>>,
    output_dir: bool,
) -> Result<OutputPlan, ConfigError> {
    let chunk_names = desugar_entry_point_names(name, entry_point, entry_points)?;

    if output_dir {
        return Ok(OutputPlan::Directory {
            dir: PathBuf::from(name),
        });
    }

    if chunk_names.len() > 1 {
        return Err(ConfigError::OutputDirRequired(name.to_string()));
    }

    let chunk = &chunk_names[0];
    let map = match sourcemap {
        SourcemapMode::True => Some(PathBuf::from(format!("{chunk}.js.map"))),
        SourcemapMode::Inline | SourcemapMode::False => None,
    };

    Ok(OutputPlan::SingleFile {
        file: PathBuf::from(format!("{chunk}.js")),
        map,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn two_entries() -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        map.insert("a.js".to_string(), "chunkA".to_string());
        map.insert("b.js".to_string(), "chunkB".to_string());
        map
    }

    #[test]
    fn test_single_file_with_external_map() {
        let plan = plan_outputs(
            SourcemapMode::True,
            "bundle",
            Some("src/main.js"),
            None,
            false,
        )
        .unwrap();

        assert_eq!(
            plan,
            OutputPlan::SingleFile {
                file: PathBuf::from("bundle.js"),
                map: Some(PathBuf::from("bundle.js.map")),
            }
        );
        assert_eq!(plan.declared().len(), 2);
    }

    #[test]
    fn test_inline_sourcemap_declares_no_map_file() {
        let plan = plan_outputs(
            SourcemapMode::Inline,
            "bundle",
            Some("src/main.js"),
            None,
            false,
        )
        .unwrap();

        assert_eq!(
            plan,
            OutputPlan::SingleFile {
                file: PathBuf::from("bundle.js"),
                map: None,
            }
        );
    }

    #[test]
    fn test_sourcemap_false_declares_no_map_file() {
        let plan = plan_outputs(
            SourcemapMode::False,
            "bundle",
            Some("src/main.js"),
            None,
            false,
        )
        .unwrap();

        assert_eq!(plan.declared(), vec![Path::new("bundle.js")]);
    }

    #[test]
    fn test_multiple_entry_points_require_output_dir() {
        let entries = two_entries();
        let err = plan_outputs(SourcemapMode::Inline, "bundle", None, Some(&entries), false)
            .unwrap_err();

        assert!(matches!(err, ConfigError::OutputDirRequired(ref name) if name == "bundle"));
    }

    #[test]
    fn test_directory_mode_declares_one_directory() {
        let entries = two_entries();
        let plan =
            plan_outputs(SourcemapMode::Inline, "bundle", None, Some(&entries), true).unwrap();

        assert_eq!(
            plan,
            OutputPlan::Directory {
                dir: PathBuf::from("bundle"),
            }
        );
    }

    #[test]
    fn test_directory_mode_ignores_sourcemap_outputs() {
        let plan = plan_outputs(
            SourcemapMode::True,
            "bundle",
            Some("src/main.js"),
            None,
            true,
        )
        .unwrap();

        assert_eq!(plan.declared(), vec![Path::new("bundle")]);
    }

    #[test]
    fn test_rebase_prefixes_all_paths() {
        let plan = plan_outputs(
            SourcemapMode::True,
            "bundle",
            Some("src/main.js"),
            None,
            false,
        )
        .unwrap();

        assert_eq!(
            plan.rebase(Path::new("dist")),
            OutputPlan::SingleFile {
                file: PathBuf::from("dist/bundle.js"),
                map: Some(PathBuf::from("dist/bundle.js.map")),
            }
        );
    }
}
