//! Resolve step - drive the extractor and pull the stream URL out of its
//! result.

use eyre::{Context, Result};
use playurl_ytdl::dl::{self, ExtractOptions, Extraction, TrackInfo};

/// Runs yt-dlp with a fixed option set and classifies its failures.
#[derive(Debug)]
pub struct Resolver {
    opts: ExtractOptions,
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            opts: ExtractOptions::best_audio(),
        }
    }

    pub fn with_options(opts: ExtractOptions) -> Self {
        Self { opts }
    }

    /// Run the extractor on `url`.
    ///
    /// The two recognized extractor failures collapse to `Ok(None)` after one
    /// error line; any other extractor fault propagates to the caller.
    pub fn extract(&self, url: &str) -> Result<Option<TrackInfo>> {
        let extraction = dl::extract_info(url, self.opts.clone())
            .wrap_err("failed to extract stream info")?;

        Ok(report_outcome(extraction))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse an extraction outcome to the info it carried.
///
/// The two recognized extractor failures log one error line each and come
/// back as `None`.
pub fn report_outcome(extraction: Extraction) -> Option<TrackInfo> {
    match extraction {
        Extraction::Extracted(info) => Some(info),
        Extraction::Unavailable => {
            tracing::error!("The requested file is not available");
            None
        }
        Extraction::QuotaExceeded => {
            tracing::error!("You have reached your download quota for that site");
            None
        }
    }
}

/// Pull the direct stream URL out of the extractor's result.
///
/// Logs one error line naming the page URL when the info dict carries no
/// `url` key.
pub fn rewrite_url(info: &TrackInfo) -> Option<&str> {
    match info.url.as_deref() {
        Some(url) => Some(url),
        None => {
            let page = info.webpage_url.as_deref().unwrap_or("<unknown>");
            tracing::error!(page = %page, "extracted info has no playable url");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(url: Option<&str>, page: Option<&str>) -> TrackInfo {
        TrackInfo {
            url: url.map(str::to_owned),
            webpage_url: page.map(str::to_owned),
        }
    }

    #[test]
    fn rewrite_returns_direct_url() {
        let info = info(
            Some("https://cdn.example.com/audio.m4a"),
            Some("https://example.com/watch?v=abc"),
        );

        assert_eq!(rewrite_url(&info), Some("https://cdn.example.com/audio.m4a"));
    }

    #[test]
    fn rewrite_without_url_is_none() {
        let info = info(None, Some("https://example.com/watch?v=abc"));

        assert_eq!(rewrite_url(&info), None);
    }

    #[test]
    fn rewrite_without_any_field_is_none() {
        assert_eq!(rewrite_url(&info(None, None)), None);
    }

    #[test]
    fn resolver_defaults_to_best_audio() {
        let resolver = Resolver::new();

        assert_eq!(resolver.opts.format.as_deref(), Some("bestaudio/best"));
        assert_eq!(resolver.opts.noplaylist, Some(true));
    }

    #[test]
    fn resolver_accepts_custom_options() {
        let resolver = Resolver::with_options(ExtractOptions {
            quiet: Some(true),
            ..Default::default()
        });

        assert_eq!(resolver.opts.quiet, Some(true));
        assert_eq!(resolver.opts.format, None);
    }
}
