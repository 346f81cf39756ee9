//! Config command - inspect and scaffold pipeline configuration.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use cashback_core::PipelineConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration as JSON
    Show,

    /// Write a starter configuration file with the built-in defaults
    Init {
        /// Where to write the file
        #[arg(default_value = "cashback.json")]
        path: PathBuf,
    },
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Show => {
            let config = match config_path {
                Some(path) => PipelineConfig::from_file(std::path::Path::new(path))?,
                None => PipelineConfig::default(),
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { path } => {
            PipelineConfig::default().save(&path)?;
            println!("{} {}", style("Wrote").green(), path.display());
        }
    }
    Ok(())
}
