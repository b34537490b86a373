//! Resolve a media page URL to a direct audio stream URL.
//!
//! Intended to be spawned by a music player daemon: the resolved URL is the
//! only thing written to stdout, diagnostics go to stderr, and the exit code
//! tells the daemon whether the page could be resolved.

pub mod cli;
pub mod logfmt;
pub mod resolve;
