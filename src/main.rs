//! packetdoc - packet reference tables from a plain-text layout
//!
//! With no arguments, reads `protocol.txt` and writes one
//! `{direction}_{id}.html` table per packet into the working directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

use packetdoc::{PacketDocConfig, PacketLayout, TableRenderer, TableWriter};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "packetdoc")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Generate HTML packet tables from a protocol layout file", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Layout file to read (overrides the config file)
    #[arg(short, long, value_name = "FILE", env = "PACKETDOC_INPUT")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one HTML table per packet (default)
    Tables {
        /// Directory receiving the generated files
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Escape HTML special characters in cell text
        #[arg(long)]
        escape_html: bool,
    },

    /// Write a single Markdown document covering every packet
    Markdown {
        /// Output file (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Escape HTML special characters in cell text
        #[arg(long)]
        escape_html: bool,
    },

    /// Print the parsed layout as JSON
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match &cli.config {
        Some(path) => PacketDocConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PacketDocConfig::default(),
    };

    if let Some(input) = cli.input {
        config.input = input;
    }

    match cli.command.unwrap_or(Commands::Tables {
        output_dir: None,
        escape_html: false,
    }) {
        Commands::Tables {
            output_dir,
            escape_html,
        } => {
            if let Some(dir) = output_dir {
                config.output.dir = dir;
            }
            config.output.escape_html |= escape_html;
            config.validate()?;
            write_tables(&config)?;
        }
        Commands::Markdown {
            output,
            escape_html,
        } => {
            if output.is_some() {
                config.markdown.path = output;
            }
            config.output.escape_html |= escape_html;
            config.validate()?;
            write_markdown(&config)?;
        }
        Commands::Dump => {
            config.validate()?;
            dump_layout(&config)?;
        }
    }

    Ok(())
}

fn load_layout(config: &PacketDocConfig) -> Result<PacketLayout> {
    let layout = PacketLayout::load_from_file(&config.input)?;
    Ok(layout)
}

fn write_tables(config: &PacketDocConfig) -> Result<()> {
    let layout = load_layout(config)?;

    ensure_dir(&config.output.dir)?;

    let renderer = TableRenderer::new(config.output.escape_html);
    let writer = TableWriter::new(&config.output.dir, renderer);
    let report = writer.write_all(layout.protocols());

    for failure in &report.failures {
        error!("{}", failure);
    }

    report.check()?;
    Ok(())
}

fn write_markdown(config: &PacketDocConfig) -> Result<()> {
    let layout = load_layout(config)?;

    let renderer = TableRenderer::new(config.output.escape_html);
    let document = renderer.render_markdown(layout.protocols());

    match &config.markdown.path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                ensure_dir(parent)?;
            }
            fs::write(path, document)
                .with_context(|| format!("Failed to write Markdown to {}", path.display()))?;
            info!("Wrote Markdown document to {}", path.display());
        }
        None => print!("{}", document),
    }

    Ok(())
}

fn dump_layout(config: &PacketDocConfig) -> Result<()> {
    let layout = load_layout(config)?;
    let json = serde_json::to_string_pretty(layout.protocols())
        .context("Failed to serialize layout")?;
    println!("{}", json);
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))
}
