use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use texdocs::Config;

#[derive(Parser)]
#[command(name = "texdocs")]
#[command(about = "Convert LaTeX outlines into Google Docs batchUpdate requests")]
struct Cli {
    /// Config file (defaults are used when it does not exist)
    #[arg(long, global = true, default_value = "texdocs.toml")]
    config: PathBuf,

    /// Log parser and generator details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a LaTeX file into the JSON document tree
    Parse {
        /// Input LaTeX file
        input: PathBuf,

        /// Output JSON file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate batchUpdate requests from a JSON document tree
    Generate {
        /// Input JSON document tree
        input: PathBuf,

        /// Output JSON file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the raw edit commands instead of API requests
        #[arg(long)]
        commands: bool,
    },
    /// Convert a LaTeX file directly into batchUpdate requests
    Convert {
        /// Input LaTeX file
        input: PathBuf,

        /// Output JSON file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Parse { input, output } => {
            let source = read(&input)?;
            let parsed = texdocs::parse_with_diagnostics(
                &source.lines().collect::<Vec<_>>(),
                &config.window,
            );
            if !parsed.anomalies.is_empty() {
                info!(count = parsed.anomalies.len(), "input needed structural repairs");
            }
            write(output.as_deref(), &texdocs::to_json(&parsed.document)?)
        }
        Command::Generate {
            input,
            output,
            commands,
        } => {
            let document = texdocs::from_json(&read(&input)?)
                .with_context(|| format!("Error reading tree from {}", input.display()))?;
            let json = if commands {
                serde_json::to_string_pretty(&texdocs::generate(&document)?)?
            } else {
                serde_json::to_string_pretty(&texdocs::tree_to_requests(&document, &config)?)?
            };
            write(output.as_deref(), &json)
        }
        Command::Convert { input, output } => {
            let body = texdocs::latex_to_requests_with_config(&read(&input)?, &config)?;
            if body.is_empty() {
                info!("no requests generated");
            }
            write(output.as_deref(), &serde_json::to_string_pretty(&body)?)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Error reading {}", path.display()))
}

fn write(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Error writing {}", path.display()))?;
            eprintln!("Created {}", path.display());
        }
        None => writeln!(io::stdout().lock(), "{content}")?,
    }
    Ok(())
}
