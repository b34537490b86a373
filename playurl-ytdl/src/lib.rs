//! Typed Rust bindings to the [yt-dlp](https://github.com/yt-dlp/yt-dlp) info
//! extraction API.
//!
//! ## Modules
//!
//! - [`dl`] - YoutubeDL parameter and info-dict types, extraction entry point
//! - [`logger`] - bridge routing the extractor's own diagnostics into `tracing`
//!
//! ## Quick Start
//!
//! ```no_run
//! use playurl_ytdl::dl::{extract_info, ExtractOptions, Extraction};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let outcome = extract_info(
//!     "https://youtube.com/watch?v=example",
//!     ExtractOptions::best_audio(),
//! )?;
//!
//! if let Extraction::Extracted(info) = outcome {
//!     println!("stream: {:?}", info.url);
//! }
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod logger;
