//! playurl - yt-dlp integration glue for a music player daemon.

use clap::Parser;
use eyre::Result;
use playurl::cli::{self, Cli};
use playurl::logfmt;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    // The daemon reads this diagnostic from stdout, before any argument
    // handling.
    if let Err(err) = playurl_ytdl::dl::probe() {
        let argv0 = std::env::args().next().unwrap_or_else(|| "playurl".into());
        println!("{argv0}: could not import yt_dlp ({err}), is it installed correctly?");
        return Ok(ExitCode::FAILURE);
    }

    color_eyre::install()?;

    let cli = Cli::parse();

    let _guard = logfmt::init(cli.verbosity.level_filter());

    cli::run(cli)
}
