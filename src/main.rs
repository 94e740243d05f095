//! apidecl — extract eligible API declarations from Swift interface files.
//!
//! - **directory / file mode**: `apidecl api_training_data/ -o data/api.jsonl`
//! - **stdin mode**: `apidecl < UIKit.swift`

use anyhow::{Context, Result};
use apidecl::model::Version;
use apidecl::{parser, render, ScanConfig, Scanner};
use clap::Parser;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "apidecl",
    about = "Extract documented, availability-filtered API declarations from Swift sources"
)]
struct Cli {
    /// Input files, directories or glob patterns. If omitted, reads from stdin.
    inputs: Vec<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: pairs (default), elements, markdown
    #[arg(short = 'f', long, default_value = "pairs")]
    format: String,

    /// Platform keyword looked up in @available attributes
    #[arg(long, default_value = apidecl::config::DEFAULT_PLATFORM)]
    platform: String,

    /// Minimum introduced version (MAJOR[.MINOR]) for an element to be kept
    #[arg(long, default_value = "17.0")]
    min_version: Version,

    /// File extension scanned in input directories
    #[arg(long = "ext", default_value = "swift")]
    extension: String,

    /// Language name used in generated prompts
    #[arg(long, default_value = "Swift")]
    language: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            platform: self.platform.clone(),
            min_version: self.min_version,
            extension: self.extension.clone(),
            language: self.language.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let scanner = Scanner::new(cli.scan_config()).context("invalid scanner configuration")?;
    let renderer = render::create_renderer(&cli.format, scanner.config())?;

    let elements = if cli.inputs.is_empty() {
        // stdin mode
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        scanner.scan_str(&input, "<stdin>")
    } else {
        let files = parser::expand_inputs(&cli.inputs, scanner.config().extension())?;
        info!(files = files.len(), "resolved inputs");
        parser::scan_files(&scanner, &files)
    };
    info!(elements = elements.len(), "total eligible API elements");

    match cli.output {
        Some(ref path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory: {}", parent.display())
                })?;
            }
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut out = BufWriter::new(file);
            render::write_rendered(renderer.as_ref(), &elements, &mut out)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render::write_rendered(renderer.as_ref(), &elements, &mut out)?;
        }
    }

    Ok(())
}
