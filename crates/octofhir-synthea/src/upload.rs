use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use reqwest::StatusCode;

use crate::classify::BundleKind;
use crate::client::{BundleClient, UploadTarget};
use crate::error::{Result, UploadError};
use crate::output::print_upload;
use crate::plan::upload_order;
use crate::walk::walk;

/// Result of sending one bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub path: PathBuf,
    /// Display form of the name; lossy when the name is not UTF-8.
    pub file_name: String,
    /// The pass that sent the file.
    pub pass: BundleKind,
    pub status: StatusCode,
}

/// Sequential uploader: one file read and one request in flight at a time.
pub struct Uploader {
    client: BundleClient,
}

impl Uploader {
    pub fn new(target: UploadTarget) -> Self {
        Self {
            client: BundleClient::new(target),
        }
    }

    pub fn target(&self) -> &UploadTarget {
        self.client.target()
    }

    /// Upload every bundle under `root`, reporting each one on stdout.
    pub async fn upload(&self, root: &Path) -> Result<Vec<UploadOutcome>> {
        self.upload_with_output(root, &mut io::stdout()).await
    }

    /// Upload every bundle under `root`, directory by directory.
    ///
    /// Each directory is uploaded before anything below it is listed. Stops
    /// at the first read or transport failure. Non-2xx statuses are reported
    /// to `out` and the run continues.
    pub async fn upload_with_output(
        &self,
        root: &Path,
        out: &mut impl Write,
    ) -> Result<Vec<UploadOutcome>> {
        let mut outcomes = Vec::new();
        for listing in walk(root) {
            let listing = listing?;
            let names = listing.display_names();
            for planned in upload_order(&names) {
                let path = listing.dir.join(&listing.files[planned.index]);
                tracing::debug!(pass = %planned.pass, file = planned.file_name, "Uploading bundle");
                let status = self.send(&path, planned.file_name).await?;
                print_upload(out, planned.file_name, status).map_err(UploadError::Output)?;
                outcomes.push(UploadOutcome {
                    path,
                    file_name: planned.file_name.to_string(),
                    pass: planned.pass,
                    status,
                });
            }
        }
        Ok(outcomes)
    }

    async fn send(&self, path: &Path, file_name: &str) -> Result<StatusCode> {
        let body = fs::read_to_string(path).map_err(|source| UploadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let status = self.client.post_bundle(file_name, body).await?;
        if status.is_success() {
            tracing::info!(file = file_name, status = status.as_u16(), "Bundle uploaded");
        } else {
            tracing::warn!(file = file_name, status = status.as_u16(), "Server rejected bundle");
        }
        Ok(status)
    }
}

/// Upload everything under `root` to `endpoint_url`.
pub async fn upload(root: &Path, endpoint_url: &str) -> Result<Vec<UploadOutcome>> {
    Uploader::new(UploadTarget::new(endpoint_url))
        .upload(root)
        .await
}
