//! Bundle action planning
//!
//! Turns a declarative [`BundleSpec`] into the concrete action the
//! runner executes: the validated entry points, the declared outputs,
//! and the ordered argument list for the external bundler. The whole
//! pass is a pure, single-shot computation; identical specs produce
//! byte-identical plans, which the host build flow relies on for
//! caching.

mod args;
mod outputs;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::config::BundleSpec;
use crate::error::ConfigError;
use crate::linker::Linker;
use crate::resolver::FileResolver;

pub use args::plan_arguments;
pub use outputs::{plan_outputs, OutputPlan};

/// Ordered mapping from resolved source file to output chunk name.
/// Computed once per planning pass and not mutated afterward.
pub type ResolvedEntryPoints = IndexMap<PathBuf, String>;

/// Everything the runner needs to execute one bundle action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundlePlan {
    /// The bundler executable, relative to the project root
    pub executable: PathBuf,

    /// Ordered argument tokens
    pub args: Vec<String>,

    /// Declared input files, relative to the project root
    pub inputs: Vec<PathBuf>,

    /// Declared outputs
    pub outputs: OutputPlan,

    /// The generated rollup config file referenced by `--config`
    pub config_file: PathBuf,
}

/// Desugar the one-or-many entry-point forms into the ordered chunk-name
/// sequence.
///
/// A single `entry_point` yields the bundle's own name as the sole chunk
/// name; `entry_points` yields its values in declaration order. Setting
/// both or neither is a [`ConfigError`].
pub fn desugar_entry_point_names(
    name: &str,
    entry_point: Option<&str>,
    entry_points: Option<&IndexMap<String, String>>,
) -> Result<Vec<String>, ConfigError> {
    match (entry_point, entry_points) {
        (Some(_), None) => Ok(vec![name.to_string()]),
        (None, Some(map)) => Ok(map.values().cloned().collect()),
        _ => Err(ConfigError::EntryPointRequired(name.to_string())),
    }
}

/// Desugar the entry-point forms into the ordered (source file, chunk
/// name) mapping, resolving each label through the file resolver.
///
/// This is the validation boundary: every label must resolve to exactly
/// one file, and nothing downstream re-checks it.
pub fn desugar_entry_points(
    name: &str,
    entry_point: Option<&str>,
    entry_points: Option<&IndexMap<String, String>>,
    resolver: &dyn FileResolver,
) -> Result<ResolvedEntryPoints, ConfigError> {
    let labeled: Vec<(&str, String)> = match (entry_point, entry_points) {
        (Some(label), None) => vec![(label, name.to_string())],
        (None, Some(map)) => map
            .iter()
            .map(|(label, chunk)| (label.as_str(), chunk.clone()))
            .collect(),
        _ => return Err(ConfigError::EntryPointRequired(name.to_string())),
    };

    let mut resolved = ResolvedEntryPoints::new();
    for (label, chunk) in labeled {
        let files = resolver.resolve(label);
        if files.len() != 1 {
            return Err(ConfigError::EntryPointResolution {
                bundle: name.to_string(),
                label: label.to_string(),
                count: files.len(),
            });
        }
        resolved.insert(files.into_iter().next().unwrap(), chunk);
    }

    Ok(resolved)
}

/// Plans bundle actions against a project's output directory, file
/// resolver, and linker
pub struct BundlePlanner<'a> {
    /// Output directory the declared outputs are rebased under
    out_dir: PathBuf,

    /// Label-to-file resolution
    resolver: &'a dyn FileResolver,

    /// Module-resolution collaborator; its argument block is opaque here
    linker: &'a dyn Linker,
}

impl<'a> BundlePlanner<'a> {
    /// Create a planner for one project
    pub fn new(
        out_dir: PathBuf,
        resolver: &'a dyn FileResolver,
        linker: &'a dyn Linker,
    ) -> Self {
        Self {
            out_dir,
            resolver,
            linker,
        }
    }

    /// Compute the full action plan for one bundle.
    ///
    /// Fails eagerly on a structurally invalid spec; no partial plan is
    /// returned.
    pub fn plan(&self, spec: &BundleSpec, executable: &Path) -> Result<BundlePlan, ConfigError> {
        // 1. Validate and desugar the entry points
        let entries = desugar_entry_points(
            &spec.name,
            spec.entry_point.as_deref(),
            spec.entry_points.as_ref(),
            self.resolver,
        )?;

        // 2. Declare the outputs
        let outputs = plan_outputs(
            spec.sourcemap,
            &spec.name,
            spec.entry_point.as_deref(),
            spec.entry_points.as_ref(),
            spec.output_dir,
        )?
        .rebase(&self.out_dir);

        // 3. The generated config lands next to the outputs
        let config_file = self
            .out_dir
            .join(format!("{}.rollup.config.js", spec.name));

        // 4. Linker contribution and the argument list
        let contribution = self.linker.contribute(spec);
        let args = plan_arguments(spec, &entries, &outputs, &contribution.args, &config_file);

        // 5. Declared inputs: entry files, srcs, the config template,
        //    and whatever the linker brings
        let mut inputs: Vec<PathBuf> = entries.keys().cloned().collect();
        for pattern in &spec.srcs {
            for file in self.resolver.resolve(pattern) {
                if !inputs.contains(&file) {
                    inputs.push(file);
                }
            }
        }
        if let Some(template) = &spec.config_file {
            inputs.push(template.clone());
        }
        inputs.extend(contribution.inputs);

        debug!("Planned bundle '{}': {} args", spec.name, args.len());

        Ok(BundlePlan {
            executable: executable.to_path_buf(),
            args,
            inputs,
            outputs,
            config_file,
        })
    }
}
