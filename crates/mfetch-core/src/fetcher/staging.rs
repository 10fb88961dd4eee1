//! Temp-file staging for one download.
//!
//! The temp file is created lazily on the first body chunk, so a request
//! rejected on status never touches the filesystem. It is hidden, uniquely
//! named, and keeps the destination's extension. `commit` syncs it and moves
//! it into place with a no-clobber rename; dropping an uncommitted staging
//! removes the temp file.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::transport::BodySink;
use super::FetchError;

const TEMP_PREFIX: &str = ".mfetch-";

/// Suffix for the temp file: the destination's extension with its dot (`.safetensors`), or empty.
pub fn temp_suffix(destination: &Path) -> OsString {
    match destination.extension() {
        Some(ext) => {
            let mut s = OsString::from(".");
            s.push(ext);
            s
        }
        None => OsString::new(),
    }
}

/// Parent directory of `destination`; a bare file name resolves to the current directory.
fn parent_dir(destination: &Path) -> &Path {
    match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

pub(crate) struct Staging<'a> {
    destination: &'a Path,
    temp_dir: Option<&'a Path>,
    temp: Option<NamedTempFile>,
    written: u64,
}

impl<'a> Staging<'a> {
    pub(crate) fn new(destination: &'a Path, temp_dir: Option<&'a Path>) -> Self {
        Self {
            destination,
            temp_dir,
            temp: None,
            written: 0,
        }
    }

    fn create_temp(&self) -> Result<NamedTempFile, FetchError> {
        let parent = parent_dir(self.destination);
        fs::create_dir_all(parent).map_err(|e| FetchError::fs("create directory", parent, e))?;

        let dir = self.temp_dir.unwrap_or(parent);
        if dir != parent {
            fs::create_dir_all(dir).map_err(|e| FetchError::fs("create directory", dir, e))?;
        }

        let suffix = temp_suffix(self.destination);
        let temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(&suffix)
            .tempfile_in(dir)
            .map_err(|e| FetchError::fs("create temp file in", dir, e))?;
        tracing::debug!(
            temp = %temp.path().display(),
            dest = %self.destination.display(),
            "staging download"
        );
        Ok(temp)
    }

    fn open(&mut self) -> Result<&mut NamedTempFile, FetchError> {
        let temp = match self.temp.take() {
            Some(t) => t,
            None => self.create_temp()?,
        };
        Ok(self.temp.insert(temp))
    }

    /// Path of the temp file, once created.
    #[cfg(test)]
    pub(crate) fn temp_path(&self) -> Option<PathBuf> {
        self.temp.as_ref().map(|t| t.path().to_path_buf())
    }

    /// Sync the temp file and atomically move it to the destination. Fails,
    /// leaving any existing destination untouched, if the destination exists.
    pub(crate) fn commit(mut self) -> Result<u64, FetchError> {
        let written = self.written;
        let destination: PathBuf = self.destination.to_path_buf();
        let mut temp = match self.temp.take() {
            Some(t) => t,
            // Empty body: still produce an (empty) file.
            None => self.create_temp()?,
        };
        let temp_path = temp.path().to_path_buf();
        temp.flush()
            .map_err(|e| FetchError::fs("flush", &temp_path, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| FetchError::fs("sync", &temp_path, e))?;
        temp.persist_noclobber(&destination)
            .map_err(|e| FetchError::fs("move download into", &destination, e.error))?;
        Ok(written)
    }
}

impl BodySink for Staging<'_> {
    fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), FetchError> {
        let temp = self.open()?;
        if let Err(e) = temp.write_all(chunk) {
            let path = temp.path().to_path_buf();
            return Err(FetchError::fs("write", path, e));
        }
        self.written += chunk.len() as u64;
        Ok(())
    }
}
