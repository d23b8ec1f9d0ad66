// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! perftables CLI
//!
//! Generates markdown comparison tables from matrix operation benchmark logs.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use perftables_core::{aggregate, ConfigLoader, DocumentKind};

mod commands;

const EXAMPLES: &str = "\
Examples:
  perftables --sections --save     # One file with all test sections
  perftables --readme-style --save # README-style summary table
  perftables --test tiny --save    # Specific test size only
  perftables --all                 # Generate all formats";

/// perftables - Markdown tables from matrix operation benchmark logs
#[derive(Parser)]
#[command(name = "perftables")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
#[command(group(ArgGroup::new("mode").args(["sections", "test", "readme_style", "all"])))]
pub struct Cli {
    /// Save output to markdown files instead of printing to console
    #[arg(long)]
    pub save: bool,

    /// Generate table for one test size only (tiny, small, medium, large, ...)
    #[arg(long, value_name = "SIZE")]
    pub test: Option<String>,

    /// Generate README-style summary table (tiny test only)
    #[arg(long)]
    pub readme_style: bool,

    /// Generate one file with sections for each test size
    #[arg(long)]
    pub sections: bool,

    /// Generate all formats: sectioned file + complete comparison + README style
    #[arg(long)]
    pub all: bool,

    /// Configuration file path (defaults to perftables.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the backend log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Directory for saved markdown files
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Document shape selected by the mode flags, `None` for the overview.
    fn document(&self) -> Option<DocumentKind> {
        if self.sections {
            Some(DocumentKind::Sections)
        } else if self.readme_style {
            Some(DocumentKind::Summary)
        } else {
            self.test.as_ref().map(|selector| DocumentKind::Tier {
                selector: selector.clone(),
            })
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only markdown
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ConfigLoader::discover(cli.config.as_deref())?;
    if let Some(dir) = &cli.log_dir {
        config = config.with_log_dir(dir);
    }
    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }

    tracing::info!(backends = config.backends.len(), "Parsing all log files");
    let aggregation = match aggregate(&config).require_data() {
        Ok(aggregation) => aggregation,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(());
        }
    };

    if cli.all {
        return commands::all::execute(&config, &aggregation);
    }

    match cli.document() {
        Some(kind) => commands::generate::execute(&config, &aggregation, kind, cli.save),
        None => commands::overview::execute(&config, &aggregation),
    }
}
