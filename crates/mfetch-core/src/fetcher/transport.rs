//! Streaming HTTP GET behind a small trait so the fetcher can be driven by
//! libcurl in production and by scripted transports in tests.

use std::time::Duration;
use url::Url;

use super::FetchError;
use crate::config::FetchOptions;

/// Receives the response body chunk by chunk.
pub trait BodySink {
    fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), FetchError>;
}

/// Issues one GET for `url` and streams the body into `sink`.
///
/// Implementations must return `FetchError::Transfer` for a non-2xx status and
/// should not hand the body of such a response to the sink.
pub trait Transport {
    fn get(&self, url: &Url, sink: &mut dyn BodySink) -> Result<(), FetchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url, sink: &mut dyn BodySink) -> Result<(), FetchError> {
        (**self).get(url, sink)
    }
}

/// libcurl-backed transport: follows redirects, no custom headers.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    low_speed_limit: u32,
    low_speed_time: Duration,
    timeout: Duration,
    buffer_size: usize,
}

impl CurlTransport {
    pub fn new(opts: &FetchOptions) -> Self {
        Self {
            connect_timeout: opts.connect_timeout,
            low_speed_limit: opts.low_speed_limit,
            low_speed_time: opts.low_speed_time,
            timeout: opts.timeout,
            buffer_size: opts.buffer_size,
        }
    }
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(&FetchOptions::default())
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &Url, sink: &mut dyn BodySink) -> Result<(), FetchError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        // >= 400 aborts on headers, before any body reaches the sink.
        easy.fail_on_error(true)?;
        easy.buffer_size(self.buffer_size)?;
        easy.connect_timeout(self.connect_timeout)?;
        // Stalls are caught here; a slow but moving transfer runs to the end.
        easy.low_speed_limit(self.low_speed_limit)?;
        easy.low_speed_time(self.low_speed_time)?;
        if !self.timeout.is_zero() {
            easy.timeout(self.timeout)?;
        }

        let mut sink_error: Option<FetchError> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match sink.write_chunk(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    sink_error = Some(e);
                    // Short count makes curl abort with a write error.
                    Ok(0)
                }
            })?;
            transfer.perform()
        };

        if let Err(e) = performed {
            if let Some(err) = sink_error.take() {
                return Err(err);
            }
            if e.is_http_returned_error() {
                let code = easy.response_code()?;
                return Err(FetchError::Transfer(code));
            }
            return Err(FetchError::Network(e));
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Transfer(code));
        }
        tracing::debug!(url = %url, code, "GET complete");
        Ok(())
    }
}
