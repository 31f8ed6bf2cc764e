//! External process execution
//!
//! Runs the planned bundler invocation. The build fails on a non-zero
//! exit status; stdout/stderr are inherited and never inspected.

use std::path::PathBuf;

use tracing::debug;

use crate::error::ExecutionError;
use crate::planner::BundlePlan;

/// Executes bundle plans from the project root
pub struct Runner {
    root: PathBuf,
}

impl Runner {
    /// Create a runner rooted at the project directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Execute one bundle plan
    pub async fn run(&self, plan: &BundlePlan) -> Result<(), ExecutionError> {
        let tool = plan.executable.display().to_string();

        debug!("Running {} {}", tool, plan.args.join(" "));

        let status = tokio::process::Command::new(self.root.join(&plan.executable))
            .args(&plan.args)
            .current_dir(&self.root)
            .status()
            .await
            .map_err(|source| ExecutionError::Spawn {
                tool: tool.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ExecutionError::Failed { tool, status });
        }

        Ok(())
    }
}
