use std::path::PathBuf;

use clap::Parser;

use crate::client::{DEFAULT_URL, UploadTarget};

#[derive(Parser, Debug)]
#[command(name = "octofhir-synthea")]
#[command(about = "Uploads Synthea-generated FHIR bundles to a FHIR server")]
#[command(version)]
pub struct Cli {
    /// Path to the output directory of Synthea
    pub path: PathBuf,

    /// URL to the FHIR server
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,
}

impl Cli {
    pub fn target(&self) -> UploadTarget {
        UploadTarget::new(&self.url)
    }
}
