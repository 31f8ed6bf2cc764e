//! Project initialization command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::template;

/// Initialize a new project
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Project name / directory
    #[arg(default_value = ".")]
    pub name: String,
}

impl InitCommand {
    pub async fn execute(&self) -> Result<()> {
        let project_dir = Path::new(&self.name);

        eprintln!("{} Initializing new project...\n", "→".blue());

        // Create project directory if needed
        if self.name != "." {
            fs::create_dir_all(project_dir)
                .context("Failed to create project directory")?;
        }

        // Generate rollwrap.toml
        fs::write(project_dir.join("rollwrap.toml"), self.generate_config())
            .context("Failed to write rollwrap.toml")?;
        eprintln!("  {} Created {}", "✓".green(), "rollwrap.toml".cyan());

        // Generate a starter entry point
        let src_dir = project_dir.join("src");
        fs::create_dir_all(&src_dir)?;
        fs::write(
            src_dir.join("main.js"),
            "export function main() {\n  console.log('hello from rollwrap');\n}\n\nmain();\n",
        )
        .context("Failed to write src/main.js")?;
        eprintln!("  {} Created {}", "✓".green(), "src/main.js".cyan());

        // Generate a config template the user can customize
        fs::write(
            project_dir.join("rollup.config.template.js"),
            template::DEFAULT_CONFIG_TEMPLATE,
        )
        .context("Failed to write rollup.config.template.js")?;
        eprintln!(
            "  {} Created {}",
            "✓".green(),
            "rollup.config.template.js".cyan()
        );

        eprintln!(
            "\n{} Project initialized successfully!\n",
            "✓".green().bold()
        );

        eprintln!("  Next steps:");
        if self.name != "." {
            eprintln!("    {} cd {}", "→".dimmed(), self.name.cyan());
        }
        eprintln!("    {} npm install rollup", "→".dimmed());
        eprintln!("    {} rollwrap build", "→".dimmed());
        eprintln!();

        Ok(())
    }

    fn generate_config(&self) -> String {
        format!(
            r#"# rollwrap configuration

[project]
name = "{name}"
version = "0.1.0"

[output]
dir = "dist"

[[bundle]]
name = "app"
entry_point = "src/main.js"
format = "esm"
sourcemap = "inline"
config_file = "rollup.config.template.js"
"#,
            name = if self.name == "." { "my-app" } else { &self.name },
        )
    }
}
