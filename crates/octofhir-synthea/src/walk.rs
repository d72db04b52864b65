use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, UploadError};

/// The immediate files of one directory, in `read_dir` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub dir: PathBuf,
    /// Names as the filesystem returned them, so non-UTF-8 names can be reopened.
    pub files: Vec<OsString>,
}

impl DirectoryListing {
    /// Lossy UTF-8 names, index-aligned with `files`, for matching and display.
    pub fn display_names(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }
}

/// Walk `root` top-down, one directory at a time.
///
/// The root comes first, followed by each subdirectory (recursively) in the
/// order the filesystem lists them. A directory is only listed when the
/// iterator reaches it, so callers can act on a listing before anything
/// deeper is read. Symlinked directories are skipped.
///
/// Failing to list the root is an error. A subdirectory that cannot be
/// listed is skipped with a warning, along with everything below it.
pub fn walk(root: &Path) -> Walk {
    Walk {
        root: Some(root.to_path_buf()),
        pending: Vec::new(),
    }
}

pub struct Walk {
    root: Option<PathBuf>,
    /// Directories still to visit, next one on top.
    pending: Vec<PathBuf>,
}

impl Iterator for Walk {
    type Item = Result<DirectoryListing>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            return Some(match self.list(&root) {
                Ok(listing) => Ok(listing),
                Err(source) => Err(UploadError::Walk { path: root, source }),
            });
        }

        while let Some(dir) = self.pending.pop() {
            match self.list(&dir) {
                Ok(listing) => return Some(Ok(listing)),
                Err(err) => {
                    tracing::warn!(dir = %dir.display(), error = %err, "Skipping unreadable directory");
                }
            }
        }
        None
    }
}

impl Walk {
    /// List `dir` and queue its subdirectories so the first listed is visited next.
    fn list(&mut self, dir: &Path) -> io::Result<DirectoryListing> {
        let mut files = Vec::new();
        let mut subdirs = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // An entry whose type cannot be determined is treated as a file.
            let file_type = entry.file_type().ok();
            if file_type.is_some_and(|t| t.is_dir()) {
                subdirs.push(entry.path());
            } else if file_type.is_some_and(|t| t.is_symlink()) && entry.path().is_dir() {
                tracing::debug!(path = %entry.path().display(), "Skipping symlinked directory");
            } else {
                files.push(entry.file_name());
            }
        }

        tracing::debug!(dir = %dir.display(), files = files.len(), "Listed directory");
        self.pending.extend(subdirs.into_iter().rev());
        Ok(DirectoryListing {
            dir: dir.to_path_buf(),
            files,
        })
    }
}
