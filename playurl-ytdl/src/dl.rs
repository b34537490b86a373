//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL`
//! parameters, narrowed to the info-extraction call (`download=False`).
//!
//! ```no_run
//! use playurl_ytdl::dl::{extract_info, ExtractOptions, Extraction};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! match extract_info("https://youtube.com/watch?v=example", ExtractOptions::best_audio())? {
//!     Extraction::Extracted(info) => println!("stream: {:?}", info.url),
//!     Extraction::Unavailable => eprintln!("not available"),
//!     Extraction::QuotaExceeded => eprintln!("quota reached"),
//! }
//! # Ok(())
//! # }
//! ```

use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::logger::YtdlLogger;

/// yt-dlp configuration passed to `YoutubeDL(params)`.
///
/// Only the parameters this crate's callers use are modeled; the `logger`
/// parameter is injected separately so extractor diagnostics reach the
/// process-wide subscriber (see [`YtdlLogger`]).
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct ExtractOptions {
    /// Stop at top-level playlist entries instead of resolving each one
    /// (`"in_playlist"`).
    pub extract_flat: Option<String>,
    /// Format selector expression, e.g. `"bestaudio/best"`.
    pub format: Option<String>,
    /// Resolve only the single video when the URL also names a playlist.
    pub noplaylist: Option<bool>,
    /// Socket-level timeout in seconds for the extractor's own requests.
    pub socket_timeout: Option<u32>,
    /// Read credentials for the target site from `~/.netrc`.
    pub usenetrc: Option<bool>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
}

impl ExtractOptions {
    /// Fixed configuration for resolving a page URL to its best audio stream:
    /// flattened playlists, `bestaudio/best`, a 10 second socket timeout, and
    /// netrc credentials honored.
    pub fn best_audio() -> Self {
        Self {
            extract_flat: Some("in_playlist".to_string()),
            format: Some("bestaudio/best".to_string()),
            noplaylist: Some(true),
            socket_timeout: Some(10),
            usenetrc: Some(true),
            ..Default::default()
        }
    }
}

/// Narrow view of the yt-dlp info dict.
///
/// Extracted from the sanitized dict returned by `extract_info`; a missing
/// key and a Python `None` value both come back as `None`. Everything else
/// the extractor reports is ignored.
#[derive(Clone, Debug, Default)]
pub struct TrackInfo {
    /// Direct URL of the selected stream, when format selection produced one.
    pub url: Option<String>,
    /// URL of the page the media was extracted from.
    pub webpage_url: Option<String>,
}

impl FromPyObject<'_, '_> for TrackInfo {
    type Error = PyErr;

    fn extract(obj: Borrowed<'_, '_, PyAny>) -> PyResult<Self> {
        let dict = obj.cast::<PyDict>()?;

        Ok(Self {
            url: item(&dict, "url")?,
            webpage_url: item(&dict, "webpage_url")?,
        })
    }
}

fn item(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<Option<String>> {
    match dict.get_item(key)? {
        Some(value) => value.extract(),
        None => Ok(None),
    }
}

/// Outcome of one extraction attempt.
///
/// The two recognized extractor failures are ordinary values here; every other
/// Python exception stays a [`PyErr`] and is not meant to be recovered.
#[derive(Debug)]
pub enum Extraction {
    /// The extractor produced an info dict.
    Extracted(TrackInfo),
    /// The extractor raised `yt_dlp.utils.UnavailableVideoError`.
    Unavailable,
    /// The extractor raised `yt_dlp.utils.MaxDownloadsReached`.
    QuotaExceeded,
}

/// Import `yt_dlp`, surfacing the loader error when the library is missing.
///
/// Callers are expected to run this once at startup and treat a failure as
/// "the extractor is not installed".
pub fn probe() -> PyResult<()> {
    Python::attach(|py| py.import("yt_dlp").map(|_| ()))
}

/// Resolve a single URL with `extract_info(url, download=False)`.
///
/// The `YoutubeDL` client lives inside a `with` block in the embedded helper,
/// so its network handles are released on every exit path.
pub fn extract_info(url: &str, opts: ExtractOptions) -> Result<Extraction, PyErr> {
    Python::attach(|py| {
        let module = PyModule::from_code(py, c_str!(include_str!("./dl.py")), c"dl.py", c"dl")?;

        let params = opts.into_pyobject(py)?;
        let logger = Bound::new(py, YtdlLogger)?;

        match module.getattr("extract")?.call1((url, params, logger)) {
            Ok(info) => Ok(Extraction::Extracted(info.extract()?)),
            Err(err) => classify(py, err),
        }
    })
}

/// Map the two recognized extractor exceptions to their [`Extraction`]
/// variants; hand anything else back untouched.
fn classify(py: Python<'_>, err: PyErr) -> PyResult<Extraction> {
    let utils = py.import("yt_dlp.utils")?;
    let value = err.value(py);

    if value.is_instance(&utils.getattr("UnavailableVideoError")?)? {
        return Ok(Extraction::Unavailable);
    }
    if value.is_instance(&utils.getattr("MaxDownloadsReached")?)? {
        return Ok(Extraction::QuotaExceeded);
    }

    Err(err)
}
