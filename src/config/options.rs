// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

/// How the Stats Fetcher talks to the remote and how fast the batch walks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub endpoint: String,
    pub timeout: Duration,
    /// Fixed sleep after every row.
    pub pause: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(ENDPOINT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl FetchOptions {
    /// Same remote, no pacing. Handy for tests and local fixtures.
    pub fn unpaced(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            pause: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI text into the output directory. Empty text means the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(s)
        };
    }

    pub fn is_default(&self) -> bool {
        self.out_dir == Path::new(DEFAULT_OUT_DIR)
    }

    /// `<out_dir>/<file_name>`
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }
}
