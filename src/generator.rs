//! Walks a directory tree and creates empty companion headers for C/C++ sources.
//!
//! Traversal never follows symlinks and does not skip hidden entries.
//! Per-entry failures are collected into the [`Report`] and the walk keeps
//! going; only an unusable root aborts the run.

use crate::companion::SourcePath;
use crate::error::{StubError, StubResult};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};
use walkdir::WalkDir;

/// Outcome of one `ensure_headers` run
#[derive(Debug, Default)]
pub struct Report {
    /// Non-directory entries visited
    pub files_scanned: usize,
    /// Source files with a recognized extension
    pub sources_matched: usize,
    /// Companion headers created by this run
    pub created: Vec<PathBuf>,
    /// Companion paths that already existed and were left alone
    pub existing: Vec<PathBuf>,
    pub failures: Vec<StubError>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Result of walking the tree, before anything is written
#[derive(Debug, Default)]
struct Discovery {
    files_scanned: usize,
    sources: Vec<SourcePath>,
    failures: Vec<StubError>,
}

/// Ensure every `.cpp`/`.cxx` under `root` has a sibling `.hpp` and every
/// `.c` has a sibling `.h`, creating missing ones as zero-byte files.
///
/// Existing entries at a companion path are never opened for writing.
pub fn ensure_headers(root: &Path) -> StubResult<Report> {
    validate_root(root)?;

    let discovery = discover_sources(root);
    let mut report = Report {
        files_scanned: discovery.files_scanned,
        sources_matched: discovery.sources.len(),
        failures: discovery.failures,
        ..Report::default()
    };

    for source in &discovery.sources {
        let header = source.companion_path();
        match create_stub(&header) {
            Ok(true) => {
                debug!(source = %source.path.display(), header = %header.display(), "created stub");
                report.created.push(header);
            }
            Ok(false) => {
                debug!(header = %header.display(), "companion already present");
                report.existing.push(header);
            }
            Err(source_err) => {
                warn!(header = %header.display(), error = %source_err, "failed to create stub");
                report.failures.push(StubError::FileCreation {
                    path: header,
                    source: source_err,
                });
            }
        }
    }

    info!(
        scanned = report.files_scanned,
        matched = report.sources_matched,
        created = report.created.len(),
        existing = report.existing.len(),
        failed = report.failures.len(),
        "header stub pass complete"
    );

    Ok(report)
}

fn validate_root(root: &Path) -> StubResult<()> {
    let metadata = fs::metadata(root).map_err(|e| StubError::InvalidRoot {
        path: root.to_path_buf(),
        reason: if e.kind() == io::ErrorKind::NotFound {
            "does not exist".to_string()
        } else {
            e.to_string()
        },
    })?;

    if !metadata.is_dir() {
        return Err(StubError::InvalidRoot {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    fs::read_dir(root).map_err(|e| StubError::InvalidRoot {
        path: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Collect recognized sources under `root`, sorted by path
fn discover_sources(root: &Path) -> Discovery {
    let mut discovery = Discovery::default();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                discovery.failures.push(StubError::Traversal { path, source: e });
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }
        discovery.files_scanned += 1;

        match SourcePath::new(entry.path()) {
            Some(source) => discovery.sources.push(source),
            None => trace!(path = %entry.path().display(), "ignored"),
        }
    }

    discovery.sources.sort_by(|a, b| a.path.cmp(&b.path));
    discovery
}

/// Create an empty file at `path` unless something already lives there.
///
/// Returns `Ok(false)` when the path is taken. The check and the create are
/// a single exclusive open, so an existing file is never truncated.
fn create_stub(path: &Path) -> io::Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}
