//! Plan command implementation
//!
//! Computes the action plans without executing anything. Plans are
//! deterministic, so this output doubles as a caching-key surface.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::config::Config;
use crate::linker::NodeModulesLinker;
use crate::planner::{BundlePlan, BundlePlanner};
use crate::resolver::FsResolver;

/// Print the computed action plans without executing anything
#[derive(Args, Debug)]
pub struct PlanCommand {
    /// Emit plans as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the rollup binary path
    #[arg(long)]
    pub rollup: Option<PathBuf>,
}

impl PlanCommand {
    pub async fn execute(&self, config_path: &str) -> Result<()> {
        let config = Config::load(config_path)?;

        let resolver = FsResolver::new(&config.root);
        let linker = NodeModulesLinker;
        let planner = BundlePlanner::new(
            PathBuf::from(&config.output.dir),
            &resolver,
            &linker,
        );
        let executable = self.rollup.clone().unwrap_or_else(|| config.rollup_bin());

        let mut plans: Vec<(String, BundlePlan)> = Vec::new();
        for bundle in &config.bundles {
            plans.push((bundle.name.clone(), planner.plan(bundle, &executable)?));
        }

        if self.json {
            let mut as_json = serde_json::Map::new();
            for (name, plan) in &plans {
                as_json.insert(name.clone(), serde_json::to_value(plan)?);
            }
            println!("{}", serde_json::to_string_pretty(&as_json)?);
            return Ok(());
        }

        for (name, plan) in &plans {
            println!("{} {}", "bundle".bold(), name.cyan());
            println!("  exec    {}", plan.executable.display());
            println!("  args    {}", plan.args.join(" "));
            for output in plan.outputs.declared() {
                println!("  output  {}", output.display());
            }
            for input in &plan.inputs {
                println!("  input   {}", input.display());
            }
            println!();
        }

        Ok(())
    }
}
