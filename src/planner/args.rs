//! Argument planning
//!
//! Builds the ordered argument list for the rollup invocation. The
//! ordering is a contract: plans feed caching keys and tests, and the
//! wrapped tool is positional-argument sensitive, so tokens are emitted
//! in a fixed precedence.

use std::path::Path;

use crate::config::{BundleSpec, SourcemapMode};

use super::{OutputPlan, ResolvedEntryPoints};

/// Build the argument token list for one bundle action.
///
/// Token order: entry tokens and the output flag, `--format`, the
/// injected linker block, `--config`, `--preserveSymlinks`, then the
/// conditional `--sourcemap` and `--external`/`--globals` tokens.
/// Validation has already happened by this point; this function is total
/// over valid plans.
pub fn plan_arguments(
    spec: &BundleSpec,
    entries: &ResolvedEntryPoints,
    outputs: &OutputPlan,
    linker_args: &[String],
    config_file: &Path,
) -> Vec<String> {
    let mut args = Vec::new();

    match outputs {
        OutputPlan::Directory { dir } => {
            for (source, chunk) in entries {
                args.push(format!(
                    "{}={}",
                    chunk,
                    strip_extension(&source.to_string_lossy())
                ));
            }
            args.push("--output.dir".to_string());
            args.push(dir.to_string_lossy().into_owned());
        }
        OutputPlan::SingleFile { file, .. } => {
            if let Some((source, _)) = entries.first() {
                args.push(strip_extension(&source.to_string_lossy()));
            }
            args.push("--output.file".to_string());
            args.push(file.to_string_lossy().into_owned());
        }
    }

    args.push("--format".to_string());
    args.push(spec.format.as_str().to_string());

    // Opaque token block contributed by the linker
    args.extend(linker_args.iter().cloned());

    args.push("--config".to_string());
    args.push(config_file.to_string_lossy().into_owned());

    // Keeps the tool's module resolution inside the declared inputs:
    // symlinks are treated as the file location, not followed to their
    // targets.
    args.push("--preserveSymlinks".to_string());

    if spec.sourcemap != SourcemapMode::False {
        args.push("--sourcemap".to_string());
        args.push(spec.sourcemap.as_str().to_string());
    }

    if !spec.globals.is_empty() {
        let externals: Vec<&str> = spec.globals.keys().map(String::as_str).collect();
        let pairs: Vec<String> = spec
            .globals
            .iter()
            .map(|(id, global)| format!("{id}:{global}"))
            .collect();

        args.push("--external".to_string());
        args.push(externals.join(","));
        args.push("--globals".to_string());
        args.push(pairs.join(","));
    }

    args
}

/// Strip the final `.` and everything after it; paths without a dot are
/// returned unchanged.
fn strip_extension(path: &str) -> String {
    match path.rfind('.') {
        Some(index) => path[..index].to_string(),
        None => path.to_string(),
    }
}
