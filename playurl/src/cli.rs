//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use eyre::Result;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

use crate::resolve::{self, Resolver};

#[derive(Debug, Parser)]
#[command(name = "playurl")]
#[command(about = "yt-dlp integration glue for a music player daemon")]
#[command(version)]
pub struct Cli {
    /// Severity threshold for diagnostics on stderr
    #[arg(short, long, value_enum, default_value_t = Verbosity::Error)]
    pub verbosity: Verbosity,

    /// Media page URL to resolve
    pub input_url: String,
}

/// Severity choices, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Verbosity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Debug => LevelFilter::DEBUG,
            Verbosity::Info => LevelFilter::INFO,
            Verbosity::Warning => LevelFilter::WARN,
            Verbosity::Error => LevelFilter::ERROR,
        }
    }
}

/// Execute the resolve pipeline - separated for testing.
pub fn run(cli: Cli) -> Result<ExitCode> {
    tracing::debug!(?cli, "parsed arguments");

    let resolver = Resolver::new();

    let Some(info) = resolver.extract(&cli.input_url)? else {
        return Ok(ExitCode::FAILURE);
    };

    let Some(url) = resolve::rewrite_url(&info) else {
        return Ok(ExitCode::FAILURE);
    };

    println!("{url}");

    Ok(ExitCode::SUCCESS)
}
