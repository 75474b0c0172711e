//! Bundle archiver
//!
//! Compresses the staged bundle tree into a single gzip-compressed tar.
//! The staging tree must not change once archiving starts; the archive is a
//! deterministic function of its contents.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::{Compression, GzBuilder};
use tar::Builder;
use walkdir::WalkDir;

use crate::error::{EbstageError, Result};

fn archive_error(e: impl std::fmt::Display) -> EbstageError {
    EbstageError::ArchiveFailed {
        message: e.to_string(),
    }
}

/// Archive `staging_dir` into `output`, overwriting a stale archive.
///
/// Entry paths are relative to `staging_dir`; the staging root itself does
/// not appear as a path prefix. `on_progress` receives whole percentages in
/// discrete 10% bands, non-decreasing, at most once per band.
pub fn archive<F>(staging_dir: &Path, output: &Path, mut on_progress: F) -> Result<()>
where
    F: FnMut(u8),
{
    // Stale archive from an earlier build; absence is fine
    let _ = std::fs::remove_file(output);

    let files = collect_files(staging_dir)?;

    let writer = File::create(output).map_err(archive_error)?;
    let encoder = GzBuilder::new().mtime(0).write(writer, Compression::best());
    let mut tar = Builder::new(encoder);
    tar.mode(tar::HeaderMode::Deterministic);

    let total = files.len();
    let mut next_band = 0.1_f64;

    for (index, path) in files.iter().enumerate() {
        let relative = path
            .strip_prefix(staging_dir)
            .map_err(archive_error)?;
        tar.append_path_with_name(path, relative)
            .map_err(archive_error)?;

        if total > 0 {
            let progress = (index + 1) as f64 / total as f64;
            if progress > next_band {
                on_progress((next_band * 100.0).round() as u8);
                next_band += 0.1;
            }
        }
    }

    let encoder = tar.into_inner().map_err(archive_error)?;
    encoder.finish().map_err(archive_error)?;

    Ok(())
}

/// Regular files under the staging root, in a stable order
fn collect_files(staging_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(staging_dir).sort_by_file_name() {
        let entry = entry.map_err(archive_error)?;
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}
