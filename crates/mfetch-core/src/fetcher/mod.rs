//! Safe download-and-place.
//!
//! `Fetcher::fetch` streams one URL into a temp file and renames it onto the
//! destination only after the whole body arrived. A path it writes is either
//! absent or complete. It does not check whether the destination exists
//! beforehand; the batch runner does, and the final rename refuses to clobber.

mod error;
mod staging;
mod transport;

pub use error::FetchError;
pub use transport::{BodySink, CurlTransport, Transport};

use std::path::{Path, PathBuf};
use url::Url;

use crate::config::FetchOptions;
use staging::Staging;

/// Parse `raw` and require an http(s) scheme.
pub fn parse_http_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

pub struct Fetcher<T> {
    transport: T,
    temp_dir: Option<PathBuf>,
}

impl Fetcher<CurlTransport> {
    /// Production fetcher over libcurl.
    pub fn curl(opts: &FetchOptions) -> Self {
        Self::new(CurlTransport::new(opts), opts)
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, opts: &FetchOptions) -> Self {
        Self {
            transport,
            temp_dir: opts.temp_dir.clone(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Download `url` to `destination`. Returns the number of bytes written.
    ///
    /// Missing parent directories are created once the server has accepted the
    /// request. On error nothing is left at `destination` and the temp file is
    /// removed.
    pub fn fetch(&self, url: &str, destination: &Path) -> Result<u64, FetchError> {
        let url = parse_http_url(url)?;
        let mut staging = Staging::new(destination, self.temp_dir.as_deref());
        self.transport.get(&url, &mut staging)?;
        let written = staging.commit()?;
        tracing::debug!(
            url = %url,
            dest = %destination.display(),
            bytes = written,
            "fetch complete"
        );
        Ok(written)
    }
}
