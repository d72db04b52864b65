use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use crate::error::{Result, UploadError};

pub const DEFAULT_URL: &str = "http://localhost:8080/fhir/";

pub const FHIR_JSON_UTF8: &str = "application/fhir+json;charset=utf-8";

/// Endpoint and content type shared by every request of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    url: String,
    content_type: &'static str,
}

impl UploadTarget {
    /// The URL is used verbatim; a malformed one fails when the first bundle is sent.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            content_type: FHIR_JSON_UTF8,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn content_type(&self) -> &str {
        self.content_type
    }
}

impl Default for UploadTarget {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

pub struct BundleClient {
    http: reqwest::Client,
    target: UploadTarget,
}

impl BundleClient {
    pub fn new(target: UploadTarget) -> Self {
        Self {
            http: reqwest::Client::new(),
            target,
        }
    }

    pub fn target(&self) -> &UploadTarget {
        &self.target
    }

    /// POST one bundle and return the server's status, whatever it is.
    ///
    /// `file` only labels the error when the request cannot be sent.
    pub async fn post_bundle(&self, file: &str, body: String) -> Result<StatusCode> {
        let resp = self
            .http
            .post(self.target.url())
            .header(CONTENT_TYPE, self.target.content_type())
            .body(body)
            .send()
            .await
            .map_err(|source| UploadError::Request {
                file: file.to_string(),
                source,
            })?;
        Ok(resp.status())
    }
}
