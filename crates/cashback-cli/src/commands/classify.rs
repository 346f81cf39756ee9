//! Classify command - map one category name to an icon key.

use clap::Args;

use cashback_core::classify_icon;

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Category name to classify
    name: String,
}

pub fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    println!("{}", classify_icon(&args.name));
    Ok(())
}
