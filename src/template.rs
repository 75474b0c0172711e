//! Template rendering for bundle assets
//!
//! Assets are Tera templates embedded in the binary; custom override files
//! are read from disk and pushed through the same rendering pass with an
//! empty context, so their behavior matches the staged assets exactly.

use std::path::Path;

use tera::{Context, Tera};

use crate::error::{EbstageError, Result};

/// Render an embedded template and write the result, overwriting any
/// existing file at `dest`.
pub fn render_to_file(name: &str, template: &str, dest: &Path, context: &Context) -> Result<()> {
    let rendered =
        Tera::one_off(template, context, false).map_err(|e| EbstageError::TemplateRenderFailed {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    std::fs::write(dest, rendered).map_err(|e| EbstageError::FileWriteFailed {
        path: dest.display().to_string(),
        reason: e.to_string(),
    })
}

/// Render a template file from disk with an empty context and write the
/// result to `dest`, overwriting any existing file.
pub fn render_file_to_file(source: &Path, dest: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(source).map_err(|e| EbstageError::FileReadFailed {
        path: source.display().to_string(),
        reason: e.to_string(),
    })?;

    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());

    render_to_file(&name, &contents, dest, &Context::new())
}
