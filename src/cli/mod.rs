//! Command-line interface for rollwrap
//!
//! Provides the main CLI structure using clap with subcommands for:
//! - `build`: plan and run every bundle
//! - `plan`: print the computed action plans without running anything
//! - `init`: project scaffolding

mod build;
mod init;
mod plan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

pub use build::BuildCommand;
pub use init::InitCommand;
pub use plan::PlanCommand;

/// rollwrap - declarative build rules for Rollup
#[derive(Parser, Debug)]
#[command(name = "rollwrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to rollwrap.toml config file
    #[arg(short, long, global = true, default_value = "rollwrap.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan and run every declared bundle
    Build(BuildCommand),

    /// Print the computed action plans without executing anything
    Plan(PlanCommand),

    /// Initialize a new project
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Build(cmd) => {
                print_banner();
                cmd.execute(&self.config).await
            }
            Commands::Plan(cmd) => cmd.execute(&self.config).await,
            Commands::Init(cmd) => {
                print_banner();
                cmd.execute().await
            }
        }
    }
}

/// Print the rollwrap banner
fn print_banner() {
    eprintln!(
        "\n{} {} {}\n",
        "⚡".cyan(),
        "rollwrap".bold().cyan(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
