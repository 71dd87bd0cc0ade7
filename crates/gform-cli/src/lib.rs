//! Commands behind the `gform` binary.
//!
//! Each command reads a saved form page (and optionally a JSON values file)
//! and returns the text to print.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use gform_forms::{encode_params, FormDocument, Values};

/// Outcome of the `validate` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateReport {
    /// Whether every value passed.
    pub valid: bool,
    /// Text to print.
    pub output: String,
}

/// Loads and extracts a form page from disk.
pub fn load_document(path: &Path) -> Result<FormDocument> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read form page {}", path.display()))?;
    let document = FormDocument::parse(&html)
        .with_context(|| format!("failed to extract form from {}", path.display()))?;
    debug!(path = %path.display(), fields = document.fields().len(), "form page loaded");
    Ok(document)
}

/// Loads name-keyed values from a JSON object file.
///
/// Each entry is a string or, for checkbox fields, an array of strings.
pub fn load_values(path: &Path) -> Result<Values> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read values file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("values file {} is not a JSON object of strings", path.display()))
}

/// `gform fields`: the field profiles as pretty JSON.
pub fn fields(page: &Path) -> Result<String> {
    let document = load_document(page)?;
    Ok(serde_json::to_string_pretty(document.fields())?)
}

/// `gform validate`: `ok`, or one line per failure.
pub fn validate(page: &Path, values: &Path) -> Result<ValidateReport> {
    let document = load_document(page)?;
    let values = load_values(values)?;

    Ok(match document.validate(&values) {
        Ok(()) => ValidateReport {
            valid: true,
            output: "ok".to_string(),
        },
        Err(errors) => ValidateReport {
            valid: false,
            output: errors.messages().join("\n"),
        },
    })
}

/// `gform params`: the submission URL and the encoded body, one per line.
pub fn params(page: &Path, values: &Path) -> Result<String> {
    let document = load_document(page)?;
    let values = load_values(values)?;
    let body = encode_params(&document.to_id_keyed(&values));
    Ok(format!("{}\n{body}", document.submission_url()))
}
