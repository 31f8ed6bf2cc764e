//! Rollup config generation
//!
//! Expands the config template into the generated file referenced by
//! `--config`, substituting the build-stamp placeholder. Stamped builds
//! get the quoted stamp string; unstamped builds get the literal
//! `undefined`, so the generated JavaScript stays valid either way.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Placeholder replaced during template expansion
pub const STAMP_PLACEHOLDER: &str = "__VERSION_STAMP__";

/// Built-in config template, used when a bundle declares no
/// `config_file`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"// Generated by rollwrap. Do not edit.
const versionStamp = __VERSION_STAMP__;

export default {
  onwarn(warning, warn) {
    if (warning.code === 'EMPTY_BUNDLE') return;
    warn(warning);
  },
  output: {
    banner: versionStamp ? `/* ${versionStamp} */` : undefined,
  },
};
"#;

/// The value substituted for the stamp placeholder
pub fn stamp_substitution(stamp: Option<&str>) -> String {
    match stamp {
        Some(value) => format!("\"{value}\""),
        None => "undefined".to_string(),
    }
}

/// Expand a template by substituting the stamp placeholder
pub fn expand(template: &str, stamp: Option<&str>) -> String {
    template.replace(STAMP_PLACEHOLDER, &stamp_substitution(stamp))
}

/// Generate the rollup config file for one bundle.
///
/// Reads `template_file` relative to `root` when given, otherwise uses
/// the built-in template, and writes the expanded result to `dest`.
pub fn generate(
    template_file: Option<&Path>,
    root: &Path,
    dest: &Path,
    stamp: Option<&str>,
) -> Result<()> {
    let template = match template_file {
        Some(path) => fs::read_to_string(root.join(path))
            .with_context(|| format!("Failed to read config template: {}", path.display()))?,
        None => DEFAULT_CONFIG_TEMPLATE.to_string(),
    };

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(dest, expand(&template, stamp))
        .with_context(|| format!("Failed to write generated config: {}", dest.display()))?;

    Ok(())
}
