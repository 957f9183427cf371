use color_eyre::eyre::{eyre, Result, WrapErr};
use std::{path::Path, process::Command};

/// Run `pdftotext -layout` over the statement and return its text.
/// Extraction failure is fatal to the run, there is no retry.
pub(crate) fn extract_text(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "extracting text");

    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg(path)
        .arg("-")
        .output()
        .wrap_err_with(|| format!("failed to run pdftotext on {}", path.display()))?;

    if !output.status.success() {
        return Err(eyre!(
            "pdftotext failed on {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    tracing::debug!(length = text.len(), "extracted text");
    Ok(text)
}
