//! Extract command - pull cashback candidates out of an OCR text dump.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cashback_core::{CashbackCandidate, CashbackExtractor, PipelineConfig};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file with raw OCR output (stdin if omitted)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Bound category-name runs to at most this many tokens
    #[arg(long)]
    max_tokens: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = if let Some(path) = config_path {
        PipelineConfig::from_file(std::path::Path::new(path))?
    } else {
        PipelineConfig::default()
    };
    if args.max_tokens.is_some() {
        config.max_category_tokens = args.max_tokens;
    }

    let text = match &args.input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!("read {} chars of OCR text", text.len());

    let extractor = CashbackExtractor::with_config(config)?;
    let candidates = extractor.extract(&text);
    info!("extracted {} candidates", candidates.len());

    let rendered = render(&candidates, args.format)?;

    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn render(candidates: &[CashbackCandidate], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(candidates)?
        )),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for candidate in candidates {
                writer.serialize(candidate)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| anyhow::anyhow!("failed to flush CSV: {e}"))?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Text => {
            if candidates.is_empty() {
                return Ok("No cashback categories found.\n".to_string());
            }

            let mut out = String::new();
            for candidate in candidates {
                out.push_str(&format!(
                    "{}  {}% ({})\n",
                    style(&candidate.category_name).bold(),
                    candidate.cashback_percent,
                    candidate.icon
                ));
            }
            Ok(out)
        }
    }
}
