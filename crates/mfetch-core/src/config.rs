//! Runtime settings. There is no config file; defaults live here and the CLI
//! overrides the models directory with `--models-dir`.

use std::path::PathBuf;
use std::time::Duration;

/// Base directory the built-in catalog installs into.
pub const DEFAULT_MODELS_DIR: &str = "/root/ComfyUI/models";

/// Receive buffer size for the body stream (8 KiB chunks).
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Transfer tuning for a single fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Abort if throughput stays below this many bytes/sec for `low_speed_time`.
    pub low_speed_limit: u32,
    pub low_speed_time: Duration,
    /// Hard wall-clock limit for one transfer; `Duration::ZERO` means none.
    /// A fetch that hits it starts over from zero on the next run, so stalls
    /// are left to the low-speed check.
    pub timeout: Duration,
    /// Curl receive buffer size; the write callback sees at most this many bytes per call.
    pub buffer_size: usize,
    /// Where in-flight temp files go. `None` = the destination's parent directory,
    /// which keeps the final rename on one filesystem.
    pub temp_dir: Option<PathBuf>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            low_speed_limit: 1024,
            low_speed_time: Duration::from_secs(60),
            timeout: Duration::ZERO,
            buffer_size: CHUNK_SIZE,
            temp_dir: None,
        }
    }
}

/// Resolved models directory: explicit override or [`DEFAULT_MODELS_DIR`].
pub fn models_dir(override_dir: Option<PathBuf>) -> PathBuf {
    override_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_MODELS_DIR))
}
