//! `chatdown` - translate an HTML document to chat markdown.
//!
//! Reads HTML from a file or stdin and writes either the markdown text or a
//! JSON object `{ "markdown": ..., "images": [...] }`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chatdown::{ChatdownService, TranslateOptions};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "chatdown", version, about = "Convert HTML to chat markdown")]
struct Cli {
    /// Input HTML file; `-` or absent reads stdin
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep literal text that sits directly under the document root
    #[arg(long)]
    plaintext: bool,

    /// Emit markdown and extracted images as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let html = read_input(cli.input.as_ref())?;
    debug!(bytes = html.len(), "read input");

    let service = ChatdownService::with_options(TranslateOptions {
        capture_plaintext: cli.plaintext,
        ..Default::default()
    });
    let translation = service.translate(&html).context("translation failed")?;

    let mut rendered = if cli.json {
        serde_json::to_string_pretty(&translation).context("failed to serialize output")?
    } else {
        translation.markdown
    };
    rendered.push('\n');

    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("failed to write stdout")?,
    }

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}
