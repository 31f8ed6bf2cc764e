//! Build command implementation

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::config::Config;
use crate::linker::NodeModulesLinker;
use crate::planner::BundlePlanner;
use crate::resolver::FsResolver;
use crate::runner::Runner;
use crate::template;

/// Plan and run every declared bundle
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Build-provenance stamp injected into the generated config
    #[arg(long)]
    pub stamp: Option<String>,

    /// Override the rollup binary path
    #[arg(long)]
    pub rollup: Option<PathBuf>,
}

impl BuildCommand {
    pub async fn execute(&self, config_path: &str) -> Result<()> {
        let start = Instant::now();

        info!("Loading configuration from {}", config_path);
        let config = Config::load(config_path)?;

        eprintln!("{} Building bundles...", "→".blue());

        let resolver = FsResolver::new(&config.root);
        let linker = NodeModulesLinker;
        let planner = BundlePlanner::new(
            PathBuf::from(&config.output.dir),
            &resolver,
            &linker,
        );
        let executable = self.rollup.clone().unwrap_or_else(|| config.rollup_bin());
        let runner = Runner::new(&config.root);

        for bundle in &config.bundles {
            let plan = planner.plan(bundle, &executable)?;

            template::generate(
                bundle.config_file.as_deref(),
                &config.root,
                &config.root.join(&plan.config_file),
                self.stamp.as_deref(),
            )?;

            runner.run(&plan).await?;

            for output in plan.outputs.declared() {
                let path = config.root.join(output);
                let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                let size_kb = size as f64 / 1024.0;
                let size_str = if size_kb > 1024.0 {
                    format!("{:.2} MB", size_kb / 1024.0)
                } else {
                    format!("{:.2} KB", size_kb)
                };

                eprintln!(
                    "  {} {} {}",
                    "•".dimmed(),
                    output.display().to_string().cyan(),
                    size_str.dimmed()
                );
            }
        }

        let duration = start.elapsed();
        eprintln!(
            "\n{} Built {} bundle(s) in {:.2}s\n",
            "✓".green().bold(),
            config.bundles.len(),
            duration.as_secs_f64()
        );

        Ok(())
    }
}
