//! System font discovery for the generated project's assets.
//!
//! The engine template loads `assets/font.ttf` on startup. We copy the first
//! well-known system font we can find; when none exists the user is told to
//! add one by hand.

use std::io;
use std::path::{Path, PathBuf};

use crate::platform::HostFamily;

/// Filesystem queries used during font discovery. Tests substitute a fake.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::copy(from, to).map(|_| ())
    }
}

/// Candidate font paths, most preferred first
pub fn font_candidates(host: HostFamily) -> Vec<PathBuf> {
    let paths: &[&str] = match host {
        HostFamily::Windows => &[
            "C:/Windows/Fonts/msyh.ttc",
            "C:/Windows/Fonts/msyh.ttf",
            "C:/Windows/Fonts/simhei.ttf",
            "C:/Windows/Fonts/simsun.ttc",
        ],
        HostFamily::Unix => &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/System/Library/Fonts/PingFang.ttc",
        ],
    };
    paths.iter().map(PathBuf::from).collect()
}

/// First candidate that exists on `fs`
pub fn first_existing<'a>(fs: &impl FileSystem, candidates: &'a [PathBuf]) -> Option<&'a Path> {
    candidates
        .iter()
        .map(PathBuf::as_path)
        .find(|path| fs.exists(path))
}

/// Result of a best-effort font copy
#[derive(Debug)]
pub enum FontCopy {
    Copied(PathBuf),
    /// No candidate could be copied; failed attempts are listed
    NotFound { failures: Vec<(PathBuf, io::Error)> },
}

/// Copy the first existing candidate to `dest`.
///
/// A candidate that exists but fails to copy is recorded and the next one
/// is tried.
pub fn copy_first_available(fs: &impl FileSystem, candidates: &[PathBuf], dest: &Path) -> FontCopy {
    let mut failures = Vec::new();
    let mut remaining = candidates;
    while let Some(source) = first_existing(fs, remaining) {
        match fs.copy(source, dest) {
            Ok(()) => return FontCopy::Copied(source.to_path_buf()),
            Err(e) => {
                log::debug!("font copy from {} failed: {e}", source.display());
                failures.push((source.to_path_buf(), e));
            }
        }
        let tried = remaining
            .iter()
            .position(|c| c.as_path() == source)
            .map_or(remaining.len(), |i| i + 1);
        remaining = &remaining[tried..];
    }
    FontCopy::NotFound { failures }
}
