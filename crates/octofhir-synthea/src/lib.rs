//! Bulk upload of Synthea-generated FHIR bundles.
//!
//! Synthea writes one hospital bundle, one practitioner bundle and one bundle
//! per patient. Patient bundles reference resources from the other two, so
//! every directory is uploaded in three passes:
//!
//! ```text
//! 1. first hospitalInformation*.json      ─┐
//! 2. first practitionerInformation*.json  ─┼─► POST <url>, one at a time
//! 3. every other file (patients)          ─┘
//! ```

pub mod classify;
pub mod cli;
pub mod client;
pub mod error;
pub mod observability;
pub mod output;
pub mod plan;
pub mod upload;
pub mod walk;

pub use classify::{BundleKind, classify};
pub use client::{BundleClient, DEFAULT_URL, FHIR_JSON_UTF8, UploadTarget};
pub use error::UploadError;
pub use plan::{PlannedUpload, upload_order};
pub use upload::{UploadOutcome, Uploader, upload};
pub use walk::{DirectoryListing, Walk, walk};
