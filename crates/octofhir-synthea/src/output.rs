use std::io::{self, Write};

use colored::Colorize;
use reqwest::StatusCode;

use crate::upload::UploadOutcome;

/// File name on one line, status code on the next.
pub fn print_upload(out: &mut impl Write, file_name: &str, status: StatusCode) -> io::Result<()> {
    writeln!(out, "{file_name}")?;
    let code = status.as_u16().to_string();
    if status.is_success() {
        writeln!(out, "{}", code.green())
    } else {
        writeln!(out, "{}", code.red())
    }
}

pub fn print_summary(out: &mut impl Write, outcomes: &[UploadOutcome]) -> io::Result<()> {
    let failed = outcomes.iter().filter(|o| !o.status.is_success()).count();
    let line = format!("Uploaded {} bundle(s) ({failed} non-2xx)", outcomes.len());
    if failed == 0 {
        writeln!(out, "{} {}", "✓".green(), line)
    } else {
        writeln!(out, "{} {}", "!".yellow(), line)
    }
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}
