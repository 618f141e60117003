mod sink;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use docs_to_slack_engine::{CopyMode, copy_to_sink, generate};
use log::LevelFilter;

use sink::WriterSink;

/// Convert list-heavy clipboard HTML (Google Docs and friends) into Slack's
/// rich-text clipboard payload.
#[derive(Debug, Parser)]
#[command(name = "docs-to-slack", version, about)]
struct Cli {
    /// Emit the plain-text rendering only, skipping the binary payload
    #[arg(short = 't', long = "text")]
    text_only: bool,

    /// Enable debug output (dumps the input HTML and the converted result)
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Read HTML from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let html = read_input(cli.input.as_deref())?;
    log::debug!("input html:\n{html}");

    let result = generate(&html).context("failed to convert clipboard HTML")?;
    if cli.text_only {
        log::debug!("converted plain text:\n{}", result.plain_text);
    } else {
        log::debug!(
            "converted slack/texty delta:\n{}",
            serde_json::to_string_pretty(&result.delta)?
        );
    }

    let mode = if cli.text_only {
        CopyMode::TextOnly
    } else {
        CopyMode::Rich
    };

    match cli.output {
        Some(path) => {
            let file = fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            copy_to_sink(&mut WriterSink::new(file), &result, mode)?;
        }
        None => {
            copy_to_sink(&mut WriterSink::new(io::stdout().lock()), &result, mode)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("failed to read HTML from stdin")?;
            Ok(html)
        }
    }
}
